//! Configuration management for the Courier relay service.

use std::{net::SocketAddr, path::PathBuf, str::FromStr, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use courier_slack::ClientConfig;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::credentials::{CredentialStore, EnvCredentials, MountedSecretCredentials};

const CONFIG_FILE: &str = "config.toml";

/// Which credential store resolves the webhook URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialSource {
    /// Read `SLACK_WEBHOOK_URL` from the process environment.
    Env,
    /// Read the `slack_webhook_url` secret from a mounted directory.
    File,
}

/// Complete service configuration with defaults, file, and environment
/// overrides.
///
/// Configuration is loaded in priority order:
/// 1. Environment variables (highest priority)
/// 2. Configuration file (`config.toml`)
/// 3. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server
    /// Server bind address.
    ///
    /// Environment variable: `HOST`
    #[serde(default = "default_host", alias = "HOST")]
    pub host: String,
    /// Server bind port.
    ///
    /// Environment variable: `PORT`
    #[serde(default = "default_port", alias = "PORT")]
    pub port: u16,
    /// Inbound HTTP request timeout in seconds.
    ///
    /// Environment variable: `REQUEST_TIMEOUT`
    #[serde(default = "default_request_timeout", alias = "REQUEST_TIMEOUT")]
    pub request_timeout: u64,

    // Relay
    /// HTTP request timeout for webhook posts in seconds.
    ///
    /// Environment variable: `DELIVERY_TIMEOUT_SECONDS`
    #[serde(default = "default_delivery_timeout", alias = "DELIVERY_TIMEOUT_SECONDS")]
    pub delivery_timeout_seconds: u64,
    /// Where the webhook URL is resolved from.
    ///
    /// Environment variable: `CREDENTIAL_SOURCE` (`env` or `file`)
    #[serde(default = "default_credential_source", alias = "CREDENTIAL_SOURCE")]
    pub credential_source: CredentialSource,
    /// Directory holding mounted secrets when `credential_source` is
    /// `file`.
    ///
    /// Environment variable: `SECRETS_DIR`
    #[serde(default = "default_secrets_dir", alias = "SECRETS_DIR")]
    pub secrets_dir: PathBuf,

    // Logging
    /// Log level configuration.
    ///
    /// Environment variable: `RUST_LOG`
    #[serde(default = "default_log_level", alias = "RUST_LOG")]
    pub rust_log: String,
}

impl Config {
    /// Load configuration from defaults, config file, and environment
    /// variable overrides.
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(""));

        let config: Self = figment.extract().context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to webhook client configuration.
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.delivery_timeout_seconds),
            user_agent: "Courier/1.0".to_string(),
        }
    }

    /// Builds the credential store selected by `credential_source`.
    pub fn credential_store(&self) -> Arc<dyn CredentialStore> {
        match self.credential_source {
            CredentialSource::Env => Arc::new(EnvCredentials::new()),
            CredentialSource::File => Arc::new(MountedSecretCredentials::new(&self.secrets_dir)),
        }
    }

    /// Parse server socket address from host and port configuration.
    pub fn parse_server_addr(&self) -> Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.host, self.port);
        SocketAddr::from_str(&addr_str).context("Invalid server address")
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }

        if self.request_timeout == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.delivery_timeout_seconds == 0 {
            anyhow::bail!("delivery_timeout_seconds must be greater than 0");
        }

        if self.credential_source == CredentialSource::File
            && self.secrets_dir.as_os_str().is_empty()
        {
            anyhow::bail!("secrets_dir must be set when credential_source is file");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            delivery_timeout_seconds: default_delivery_timeout(),
            credential_source: default_credential_source(),
            secrets_dir: default_secrets_dir(),
            rust_log: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_delivery_timeout() -> u64 {
    30
}

fn default_credential_source() -> CredentialSource {
    CredentialSource::Env
}

fn default_secrets_dir() -> PathBuf {
    PathBuf::from("/secrets")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.port, 8080);
        assert_eq!(config.credential_source, CredentialSource::Env);
    }

    #[test]
    fn invalid_config_validation_fails() {
        let mut config = Config::default();
        config.port = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.request_timeout = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.delivery_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.credential_source = CredentialSource::File;
        config.secrets_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn client_config_carries_delivery_timeout() {
        let mut config = Config::default();
        config.delivery_timeout_seconds = 12;

        let client_config = config.to_client_config();
        assert_eq!(client_config.timeout, Duration::from_secs(12));
        assert_eq!(client_config.user_agent, "Courier/1.0");
    }

    #[test]
    fn socket_address_parsing() {
        let mut config = Config::default();
        config.host = "127.0.0.1".to_string();
        config.port = 9000;

        let addr = config.parse_server_addr().expect("should parse socket address");

        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 9000);
    }

    #[test]
    fn credential_source_selects_store() {
        let mut config = Config::default();
        config.credential_source = CredentialSource::File;
        config.secrets_dir = PathBuf::from("/run/secrets");

        let store = config.credential_store();
        assert!(format!("{store:?}").contains("MountedSecretCredentials"));
    }
}
