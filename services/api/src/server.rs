use crate::cli::ServeArgs;
use crate::infra::{load_config, load_pool, AppState, InMemorySelectionRepository};
use crate::routes::with_hiring_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hiring_ai::error::AppError;
use hiring_ai::telemetry;
use hiring_ai::workflows::hiring::HiringService;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs, candidates: Option<PathBuf>) -> Result<(), AppError> {
    let mut config = load_config(candidates)?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let pool = load_pool(&config)?;
    let repository = Arc::new(InMemorySelectionRepository::default());
    let hiring_service = Arc::new(HiringService::new(
        pool,
        repository,
        config.hiring.team_size,
    ));

    let app = with_hiring_routes(hiring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        candidates_path = %config.hiring.candidates_path.display(),
        "hiring dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
