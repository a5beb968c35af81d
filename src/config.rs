//! Configuration management and validation.
//!
//! Provides the service configuration structure and layered resolution:
//! built-in defaults, then environment variables, then CLI arguments.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::debug;

use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_DATA_DIR_NAME};
use crate::{Error, Result};

/// Environment variable overriding the observation data directory
pub const ENV_DATA_DIR: &str = "DAILY_TEMPS_DATA_DIR";

/// Environment variable overriding the HTTP bind address
pub const ENV_BIND_ADDR: &str = "DAILY_TEMPS_BIND";

/// Service configuration
///
/// The configuration is resolved once at startup and shared read-only with
/// every request handler. There is no runtime mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one observation file per station
    pub data_dir: PathBuf,

    /// Socket address for the HTTP listener
    pub bind_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .expect("default bind address is valid"),
        }
    }
}

impl Config {
    /// Resolve configuration from defaults, environment, and CLI overrides
    pub fn resolve(data_dir: Option<PathBuf>, bind_addr: Option<SocketAddr>) -> Result<Self> {
        let mut config = Config::default();

        // Environment layer
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var(ENV_BIND_ADDR) {
            config.bind_addr = addr.parse().map_err(|_| {
                Error::configuration(format!("Invalid {} value: '{}'", ENV_BIND_ADDR, addr))
            })?;
        }

        // CLI layer wins
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        if let Some(addr) = bind_addr {
            config.bind_addr = addr;
        }

        config.validate()?;
        debug!(
            "Configuration resolved: data_dir={}, bind_addr={}",
            config.data_dir.display(),
            config.bind_addr
        );
        Ok(config)
    }

    /// Validate the resolved configuration
    pub fn validate(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Data directory does not exist: {}",
                self.data_dir.display()
            )));
        }
        Ok(())
    }
}

/// Platform data directory for observation files, falling back to ./data
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|base| base.join(DEFAULT_DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_with_cli_overrides() {
        let dir = TempDir::new().unwrap();
        let addr: SocketAddr = "127.0.0.1:9100".parse().unwrap();

        let config = Config::resolve(Some(dir.path().to_path_buf()), Some(addr)).unwrap();

        assert_eq!(config.data_dir, dir.path());
        assert_eq!(config.bind_addr, addr);
    }

    #[test]
    fn test_validate_rejects_missing_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/nonexistent/daily-temps-data"),
            bind_addr: "127.0.0.1:8000".parse().unwrap(),
        };

        let result = config.validate();
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
