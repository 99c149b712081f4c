use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use notifica_server::config::ServerConfig;
use notifica_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(config.renderer());
    let app = notifica_server::app(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
