use crate::cli::ServeArgs;
use crate::infra::{AppState, CompanionServices};
use crate::routes::with_companion_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nura::config::AppConfig;
use nura::error::AppError;
use nura::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

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

    let services = CompanionServices::standard(&config.companion)?;
    let app = with_companion_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        training_session_size = config.companion.training_session_size,
        fact_page_size = config.companion.fact_page_size,
        "nura companion ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
