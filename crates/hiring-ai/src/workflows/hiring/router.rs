use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::report::HiringReport;
use super::repository::SelectionRepository;
use super::service::{HiringService, HiringServiceError};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CandidateQuery {
    #[serde(default)]
    pub(crate) q: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct SelectRequest {
    pub(crate) name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReportQuery {
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct HiringReportResponse {
    #[serde(flatten)]
    report: HiringReport,
    narrative: String,
}

/// Router builder exposing candidate browsing, team selection, and reporting endpoints.
pub fn hiring_router<R>(service: Arc<HiringService<R>>) -> Router
where
    R: SelectionRepository + 'static,
{
    Router::new()
        .route("/api/v1/candidates", get(list_candidates_handler::<R>))
        .route("/api/v1/candidates/:name", get(candidate_handler::<R>))
        .route("/api/v1/team", get(team_handler::<R>))
        .route("/api/v1/team/members", post(select_handler::<R>))
        .route("/api/v1/team/members/:name", delete(remove_handler::<R>))
        .route("/api/v1/team/report", get(report_handler::<R>))
        .route("/api/v1/dashboard", get(dashboard_handler::<R>))
        .with_state(service)
}

pub(crate) async fn list_candidates_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Query(query): Query<CandidateQuery>,
) -> Response
where
    R: SelectionRepository + 'static,
{
    match service.candidates(query.q.as_deref()) {
        Ok(cards) => (StatusCode::OK, axum::Json(cards)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn candidate_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(name): Path<String>,
) -> Response
where
    R: SelectionRepository + 'static,
{
    match service.candidate(&name) {
        Ok(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn team_handler<R>(State(service): State<Arc<HiringService<R>>>) -> Response
where
    R: SelectionRepository + 'static,
{
    match service.team() {
        Ok(team) => (StatusCode::OK, axum::Json(team)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn select_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    axum::Json(request): axum::Json<SelectRequest>,
) -> Response
where
    R: SelectionRepository + 'static,
{
    match service.select(&request.name) {
        Ok(team) => (StatusCode::CREATED, axum::Json(team)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn remove_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(name): Path<String>,
) -> Response
where
    R: SelectionRepository + 'static,
{
    match service.remove(&name) {
        Ok(team) => (StatusCode::OK, axum::Json(team)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Query(query): Query<ReportQuery>,
) -> Response
where
    R: SelectionRepository + 'static,
{
    let today = query.today.unwrap_or_else(|| Local::now().date_naive());
    match service.report(today) {
        Ok(report) => {
            let narrative = report.to_markdown();
            (
                StatusCode::OK,
                axum::Json(HiringReportResponse { report, narrative }),
            )
                .into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn dashboard_handler<R>(State(service): State<Arc<HiringService<R>>>) -> Response
where
    R: SelectionRepository + 'static,
{
    match service.dashboard() {
        Ok(overview) => (StatusCode::OK, axum::Json(overview)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) fn status_for(err: &HiringServiceError) -> StatusCode {
    match err {
        HiringServiceError::UnknownCandidate(_) => StatusCode::NOT_FOUND,
        HiringServiceError::EmptyTeam | HiringServiceError::Selection(_) => StatusCode::CONFLICT,
        HiringServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: HiringServiceError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        error!(error = %err, "hiring request failed");
    }
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
