use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use hivesense::application::ports::AnalysisLogRepository;
use hivesense::application::services::AnalysisService;
use hivesense::infrastructure::audio::{MfccExtractor, SymphoniaAudioDecoder};
use hivesense::infrastructure::model::PretrainedModel;
use hivesense::infrastructure::observability::{TracingConfig, init_tracing};
use hivesense::infrastructure::persistence::{
    NoopAnalysisLogRepository, PgAnalysisLogRepository, create_pool,
};
use hivesense::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = std::env::var("APP_ENV")
        .ok()
        .and_then(|e| Environment::try_from(e).ok())
        .unwrap_or(Environment::Local);

    let settings = Settings::load(environment)?;

    init_tracing(TracingConfig::default(), settings.server.port);

    // Artifact load failure leaves the service up but degraded: /ready
    // reports it and every analyze request fails fast.
    let model = match PretrainedModel::load(
        Path::new(&settings.model.forest_path),
        Path::new(&settings.model.scaler_path),
    ) {
        Ok(model) => Some(Arc::new(model)),
        Err(e) => {
            tracing::error!(error = %e, "starting degraded: model artifacts unavailable");
            None
        }
    };

    let log_repository: Arc<dyn AnalysisLogRepository> = match &settings.database.url {
        Some(url) => match create_pool(url, settings.database.max_connections).await {
            Ok(pool) => {
                if settings.database.run_migrations {
                    sqlx::migrate!("./migrations").run(&pool).await?;
                }
                Arc::new(PgAnalysisLogRepository::new(pool))
            }
            Err(e) => {
                // The log sink is best-effort; an unreachable store must not
                // keep the service from classifying.
                tracing::warn!(error = %e, "database unreachable, analysis logs will be dropped");
                Arc::new(NoopAnalysisLogRepository)
            }
        },
        None => {
            tracing::info!("no database configured, analysis logs will not be persisted");
            Arc::new(NoopAnalysisLogRepository)
        }
    };

    let analysis_service = Arc::new(AnalysisService::new(
        Arc::new(SymphoniaAudioDecoder),
        Arc::new(MfccExtractor::new()),
        model,
        log_repository,
    ));

    let state = AppState { analysis_service };
    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
