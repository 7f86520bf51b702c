//! Service account credentials and their resolution from CLI/env

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use std::fmt;

use crate::config::credentials;
use crate::error::{MixpanelError, Result};

/// Mixpanel service account (username + secret)
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceAccount {
    username: String,
    secret: String,
}

impl ServiceAccount {
    /// Build credentials, failing fast if either value is absent or empty
    pub fn new(username: Option<&str>, secret: Option<&str>) -> Result<Self> {
        let username = username.filter(|u| !u.is_empty()).ok_or_else(|| {
            MixpanelError::MissingCredentials("service account username is required".to_string())
        })?;
        let secret = secret.filter(|s| !s.is_empty()).ok_or_else(|| {
            MixpanelError::MissingCredentials("service account secret is required".to_string())
        })?;

        Ok(Self {
            username: username.to_string(),
            secret: secret.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `Authorization` header value (RFC 7617 Basic scheme)
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Credential resolution with fallback logic
#[derive(Default)]
pub struct CredentialsResolver;

impl CredentialsResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve credentials from multiple sources with fallback:
    /// 1. CLI arguments (if provided and non-empty)
    /// 2. MIXPANEL_SERVICE_ACCOUNT_USERNAME / MIXPANEL_SERVICE_ACCOUNT_SECRET
    ///
    /// Each value is resolved on its own, so a username flag can be combined
    /// with a secret from the environment.
    pub fn resolve(
        &self,
        cli_username: Option<&str>,
        cli_secret: Option<&str>,
    ) -> Result<ServiceAccount> {
        let username = Self::pick("username", cli_username, credentials::USERNAME_ENV_VAR);
        let secret = Self::pick("secret", cli_secret, credentials::SECRET_ENV_VAR);

        ServiceAccount::new(username.as_deref(), secret.as_deref()).map_err(|e| match e {
            MixpanelError::MissingCredentials(msg) => {
                MixpanelError::MissingCredentials(Self::not_found_message(&msg))
            }
            other => other,
        })
    }

    fn pick(label: &str, cli_value: Option<&str>, env_var: &str) -> Option<String> {
        if let Some(value) = cli_value.filter(|v| !v.is_empty()) {
            debug!("Using service account {} from CLI argument", label);
            return Some(value.to_string());
        }

        match std::env::var(env_var) {
            Ok(value) if !value.is_empty() => {
                debug!("Using service account {} from {}", label, env_var);
                Some(value)
            }
            _ => None,
        }
    }

    /// Generate helpful error message when a credential is missing
    fn not_found_message(reason: &str) -> String {
        format!(
            "{}. Provide the service account using one of:\n\
             \n\
             1. CLI arguments:     mixpanelctl --username <USER> --secret <SECRET>\n\
             2. Environment vars:  export {}=<USER>\n\
             \x20                     export {}=<SECRET>",
            reason,
            credentials::USERNAME_ENV_VAR,
            credentials::SECRET_ENV_VAR
        )
    }
}
