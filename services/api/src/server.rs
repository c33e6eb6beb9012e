use crate::cli::ServeArgs;
use crate::infra::{load_seed, seeded_stores, AppState};
use crate::routes::with_onboarding_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use onboarding::config::AppConfig;
use onboarding::error::AppError;
use onboarding::onboarding::{OnboardingService, SeedDocument};
use onboarding::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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

    let seed = match &config.seed.applications_path {
        Some(path) => load_seed(path)?,
        None => SeedDocument::default(),
    };
    let (repository, statuses) = seeded_stores(seed);
    let service = Arc::new(OnboardingService::new(
        Arc::new(repository),
        Arc::new(statuses),
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_onboarding_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "onboarding viewer ready");

    axum::serve(listener, app).await?;
    Ok(())
}
