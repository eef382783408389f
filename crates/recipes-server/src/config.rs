//! Server configuration read from environment variables.
//!
//! - `RECIPES_HOST`: bind host (default: "0.0.0.0")
//! - `RECIPES_PORT`: listen port (default: "8000")
//! - `RECIPES_SEED_PATH`: JSON seed file (default: "recipes.json")
//!
//! Log filtering is controlled separately through `RUST_LOG`.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_SEED_PATH: &str = "recipes.json";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid RECIPES_PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seed file loaded once at startup. A missing file is not an error.
    pub seed_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_path: PathBuf::from(DEFAULT_SEED_PATH),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("RECIPES_HOST") {
            config.host = host;
        }
        if let Some(value) = lookup("RECIPES_PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }
        if let Some(path) = lookup("RECIPES_SEED_PATH") {
            config.seed_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// The `host:port` string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
