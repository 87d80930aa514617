use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use tracing::info;
use villa_map::config::AppConfig;
use villa_map::error::AppError;
use villa_map::listings::resolve_catalog;
use villa_map::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = resolve_catalog(config.catalog.path.as_deref())?;
    info!(
        listings = catalog.len(),
        source = ?config.catalog.path,
        "villa catalog loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(catalog, config.map.presenter_options(), prometheus_handle);
    let readiness_flag = app_state.readiness.clone();

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "villa map service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
