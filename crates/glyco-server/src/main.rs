use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use glyco_model::artifacts::ArtifactLoader;
use glyco_model::evaluator::RiskEvaluator;
use glyco_server::config::{LogFormat, ServerConfig};
use glyco_server::screening::Screening;
use glyco_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    config.log_migration();

    // Missing or malformed artifacts are fatal: nothing can be served.
    let artifacts = ArtifactLoader::new(&config.model_dir)
        .load()
        .wrap_err("failed to load model artifacts")?;

    let screening = Screening::new(
        RiskEvaluator::from_artifacts(artifacts),
        config.reference_table(),
        config.reference_in_report,
    );
    let app = glyco_server::app(AppState::new(screening));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(bind = %config.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    tracing::info!("shutting down");
}
