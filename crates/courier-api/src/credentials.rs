//! Webhook credential resolution.
//!
//! The destination webhook URL is a secret resolved at request time
//! under the fixed logical name `slack_webhook_url`. Resolution is
//! deliberately uncached: rotating the secret takes effect on the next
//! request without a restart.

use std::{fmt, path::PathBuf};

use courier_core::{RelayError, Result};
use tracing::debug;

/// Logical name of the webhook-URL secret.
pub const WEBHOOK_SECRET_NAME: &str = "slack_webhook_url";

/// Environment variable consulted by [`EnvCredentials`].
pub const WEBHOOK_ENV_VAR: &str = "SLACK_WEBHOOK_URL";

/// Source of the destination webhook URL.
///
/// Implementations re-resolve on every call. Failure means the operator
/// has misconfigured the deployment, so callers classify it as an
/// internal error rather than a client fault.
pub trait CredentialStore: Send + Sync + fmt::Debug {
    /// Resolves the webhook URL.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::CredentialUnavailable` when the secret is
    /// absent, unreadable, or empty.
    fn webhook_url(&self) -> Result<String>;
}

/// Credential store backed by a process environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    /// Creates a store reading the default `SLACK_WEBHOOK_URL` variable.
    pub fn new() -> Self {
        Self { var: WEBHOOK_ENV_VAR.to_string() }
    }

    /// Creates a store reading a custom environment variable.
    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for EnvCredentials {
    fn webhook_url(&self) -> Result<String> {
        debug!(var = %self.var, "Resolving webhook URL from environment");

        match std::env::var(&self.var) {
            Ok(url) if !url.trim().is_empty() => Ok(url.trim().to_string()),
            Ok(_) => Err(RelayError::credential_unavailable(format!(
                "{} environment variable is empty",
                self.var
            ))),
            Err(_) => Err(RelayError::credential_unavailable(format!(
                "{} environment variable not set",
                self.var
            ))),
        }
    }
}

/// Credential store backed by a mounted secret file.
///
/// Secret stores mount each secret as a file named after its logical
/// name; this reads `<dir>/slack_webhook_url` on every call.
#[derive(Debug, Clone)]
pub struct MountedSecretCredentials {
    dir: PathBuf,
}

impl MountedSecretCredentials {
    /// Creates a store reading secrets from the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn secret_path(&self) -> PathBuf {
        self.dir.join(WEBHOOK_SECRET_NAME)
    }
}

impl CredentialStore for MountedSecretCredentials {
    fn webhook_url(&self) -> Result<String> {
        let path = self.secret_path();
        debug!(path = %path.display(), "Resolving webhook URL from mounted secret");

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            RelayError::credential_unavailable(format!(
                "failed to read secret {}: {e}",
                path.display()
            ))
        })?;

        let url = contents.trim();
        if url.is_empty() {
            return Err(RelayError::credential_unavailable(format!(
                "secret {} is empty",
                path.display()
            )));
        }

        Ok(url.to_string())
    }
}
