use anyhow::{Context, Result};
use proximo_core::config::ProximoConfig;
use proximo_core::repository::MemoryStore;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use proximo_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ProximoConfig::load()?;

    let store = if config.server.seed_demo {
        tracing::info!("seeding demo accounts and events");
        MemoryStore::demo()
    } else {
        MemoryStore::new()
    };

    let app = proximo_server::app(AppState::new(store));

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("proximo-server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
