//! HTTP server rendering plain-text outlines into slide decks.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::{router, AppState};

/// Bind the configured address and serve until the server stops.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    log::info!(
        "serving {} on http://{}",
        config.static_dir.display(),
        addr
    );

    axum::serve(listener, router(AppState::default(), &config.static_dir)).await?;
    Ok(())
}
