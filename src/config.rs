//! Server configuration loaded from the environment

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LOG_FILTER: &str = "info,activity_roster=debug,tower_http=info";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ROSTER_PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),

    #[error("Invalid bind address {0}")]
    InvalidAddress(String),
}

/// Runtime configuration for the roster server
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Optional JSON file with the initial activities
    pub seed_file: Option<PathBuf>,
    /// Directory served under /static
    pub static_dir: PathBuf,
    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let port = match env::var("ROSTER_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host: env::var("ROSTER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            seed_file: env::var("ROSTER_SEED_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            static_dir: env::var("ROSTER_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
            log_filter: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_file: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_string())),
        Ok(port) => Ok(port),
    }
}
