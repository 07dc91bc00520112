//! Server configuration from command-line flags and environment.

use crate::error::{Result, ServerError};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Render plain-text outlines into slide decks over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "slides-server")]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Host address to bind to
    #[arg(long, env = "SLIDES_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory of static assets (editor page, stylesheets, scripts)
    #[arg(long, env = "SLIDES_STATIC_DIR", default_value = ".")]
    pub static_dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServerConfig {
    /// Socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ServerError::InvalidAddress(addr))
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
