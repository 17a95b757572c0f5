use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use pressdoc_export::pdf::OfficeConverter;
use pressdoc_export::styles::DocumentStyles;
use pressdoc_server::config::{LogFormat, ServerConfig};
use pressdoc_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let converter = OfficeConverter::new(&config.soffice);
    match converter.probe() {
        Ok(version) => tracing::info!(version = %version, "office converter available"),
        Err(e) => tracing::warn!(
            error = %e,
            "office converter unavailable, PDF requests will fail until it is installed"
        ),
    }

    if let Some(dir) = &config.scratch_dir {
        std::fs::create_dir_all(dir)?;
    }

    let state = AppState {
        converter: Arc::new(converter),
        styles: DocumentStyles::default(),
        scratch_dir: config.scratch_dir.clone(),
    };
    let app = pressdoc_server::router(state, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
