use crate::infra::AppState;
use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use hiring_ai::error::AppError;
use hiring_ai::workflows::hiring::{
    diversity, hiring_router, CandidateScorer, DiversityMetrics, HiringService, ScoreBreakdown,
    SelectionRepository,
};
use hiring_ai::workflows::intake::CandidateImporter;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Serialize)]
pub(crate) struct ScorecardResponse {
    pub(crate) scored: usize,
    pub(crate) candidates: Vec<ScoreBreakdown>,
    pub(crate) diversity: DiversityMetrics,
}

pub(crate) fn with_hiring_routes<R>(service: Arc<HiringService<R>>) -> axum::Router
where
    R: SelectionRepository + 'static,
{
    hiring_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/scorecards",
            axum::routing::post(scorecards_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Scores an uploaded submissions array without touching the loaded pool or the team.
pub(crate) async fn scorecards_endpoint(body: Bytes) -> Result<Json<ScorecardResponse>, AppError> {
    let pool = CandidateImporter::from_reader(body.as_ref())?;
    let scorer = CandidateScorer;

    let candidates: Vec<ScoreBreakdown> = pool
        .candidates()
        .iter()
        .map(|candidate| scorer.evaluate(candidate))
        .collect();
    let names: Vec<String> = pool
        .candidates()
        .iter()
        .map(|candidate| candidate.name.clone())
        .collect();
    let diversity = diversity(pool.candidates(), &names);
    debug!(scored = candidates.len(), "ad-hoc scorecards computed");

    Ok(Json(ScorecardResponse {
        scored: candidates.len(),
        candidates,
        diversity,
    }))
}
