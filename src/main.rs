use std::{net::SocketAddr, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};
use wellness_app::{AppConfig, AppState, FileStore, chat::ChatClient, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env();
    let store = FileStore::open(&config.data_path)
        .await
        .map_err(|err| err.message)?;
    info!(path = %store.path().display(), "using data file");

    if config.assistant_url.is_none() {
        info!("ASSISTANT_URL not set, chat will answer with the fallback reply");
    }
    let chat = ChatClient::new(config.assistant_url.clone(), config.assistant_timeout)?;
    let state = AppState::new(Arc::new(store), chat, config.mapping);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
