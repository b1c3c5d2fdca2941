//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{NotesError, Result};
use crate::storage::DEFAULT_DB_FILE;
use crate::summarize::SummarizerConfig;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration for the notes server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind the server to.
    pub host: String,
    /// Port to bind the server to.
    pub port: u16,
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Summarization provider settings.
    pub summarizer: SummarizerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            summarizer: SummarizerConfig::default(),
        }
    }
}

impl Config {
    /// Build configuration from `HOST`, `PORT`, `NOTES_DB_PATH` and the
    /// summarizer variables. A `.env` file in the working directory is
    /// loaded first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let port = match std::env::var("PORT") {
            Ok(p) => p
                .parse()
                .map_err(|_| NotesError::Configuration(format!("Invalid PORT: {p}")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            db_path: std::env::var("NOTES_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_FILE)),
            summarizer: SummarizerConfig::from_env(),
        })
    }

    /// Apply command-line overrides on top of the environment values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        db_path: Option<PathBuf>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(db_path) = db_path {
            self.db_path = db_path;
        }
        self
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| NotesError::Configuration(format!("Invalid address: {e}")))
    }
}
