//! Server configuration
//!
//! Defaults overlaid by `POSTBOARD_*` environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "POSTBOARD";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_address: String,
    pub data_dir: PathBuf,
    /// Defaults to `<data_dir>/postboard.db`
    pub database_path: Option<String>,
    pub max_upload_bytes: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("bind_address", "0.0.0.0:8000")?
            .set_default("data_dir", "./data")?
            .set_default("max_upload_bytes", 10_i64 * 1024 * 1024)?
            .add_source(source)
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn database_path(&self) -> String {
        self.database_path.clone().unwrap_or_else(|| {
            self.data_dir
                .join("postboard.db")
                .to_string_lossy()
                .to_string()
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(env)),
        )
    }

    #[test]
    fn test_defaults() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(
            PathBuf::from(config.database_path()),
            PathBuf::from("./data").join("postboard.db")
        );
        assert!(config.socket_addr().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = load_from(&[
            ("POSTBOARD_BIND_ADDRESS", "127.0.0.1:9000"),
            ("POSTBOARD_DATABASE_PATH", "/tmp/custom.db"),
            ("POSTBOARD_MAX_UPLOAD_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().port(), 9000);
        assert_eq!(config.database_path(), "/tmp/custom.db");
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_bad_bind_address() {
        let config = load_from(&[("POSTBOARD_BIND_ADDRESS", "not-an-address")]).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
