use anyhow::{Context, Result};
use common::ClientConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "fintrack.toml";
const ENV_PREFIX: &str = "FINTRACK";

/// Effective host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    pub bind_address: String,
    /// Directory holding the compiled single-page app.
    pub dist_dir: PathBuf,
    pub api_base_url: String,
    pub currency: String,
    pub request_timeout_secs: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            dist_dir: PathBuf::from("dist"),
            api_base_url: client.api_base_url,
            currency: client.currency,
            request_timeout_secs: 30,
        }
    }
}

impl HostConfig {
    /// Layers the defaults, the optional config file and `FINTRACK_*`
    /// environment variables, in that order.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = HostConfig::default();

        let file_source = match file {
            Some(path) => {
                debug!("Reading configuration from {}", path.display());
                File::from(path).required(true)
            }
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: HostConfig = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("dist_dir", defaults.dist_dir.to_string_lossy().into_owned())?
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("currency", defaults.currency)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .add_source(file_source)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        info!("Configuration loaded (bind address {})", config.bind_address);
        Ok(config)
    }

    /// Applies command-line flags on top of the loaded configuration.
    pub fn with_overrides(
        mut self,
        bind_address: Option<String>,
        dist_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        if let Some(dist_dir) = dist_dir {
            self.dist_dir = dist_dir;
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            currency: self.currency.to_uppercase(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = HostConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.currency, "INR");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:9000\"\ncurrency = \"usd\"").unwrap();

        let config = HostConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.client_config().currency, "USD");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(HostConfig::load(Some(Path::new("/nonexistent/fintrack.toml"))).is_err());
    }

    #[test]
    fn test_cli_flags_win() {
        let config = HostConfig::default().with_overrides(Some("127.0.0.1:8081".into()), None);
        assert_eq!(config.bind_address, "127.0.0.1:8081");
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_client_config_trims_base_url() {
        let config = HostConfig {
            api_base_url: "https://api.example.com/api/".into(),
            ..HostConfig::default()
        };
        assert_eq!(config.client_config().api_base_url, "https://api.example.com/api");
    }
}
