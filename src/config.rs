/// Configuration constants for the Mixpanel app API
pub mod api {
    /// Current user endpoint (organizations live under `results.organizations`)
    pub const ME: &str = "/api/app/me";

    /// Query string for the "me" endpoint; skipping workspace users is a lot faster
    pub const ME_QUERY: &str = "include_workspace_users=false";

    /// Timezone reference list
    pub const TIMEZONES: &str = "/api/app/timezones";

    /// Organizations collection (project creation hangs off an organization)
    pub const ORGANIZATIONS: &str = "/api/app/organizations";

    /// Project creation action under an organization
    pub const CREATE_PROJECT: &str = "create-project";

    /// Project settings prefix (metadata is read from here)
    pub const PROJECT_SETTINGS: &str = "/settings/project";

    /// Project update form endpoint
    pub const PROJECT_UPDATE: &str = "/projects/update";

    /// Envelope status reported by successful responses
    pub const STATUS_OK: &str = "ok";
}

/// Configuration constants for service account credentials
pub mod credentials {
    /// Environment variable holding the service account username
    pub const USERNAME_ENV_VAR: &str = "MIXPANEL_SERVICE_ACCOUNT_USERNAME";

    /// Environment variable holding the service account secret
    pub const SECRET_ENV_VAR: &str = "MIXPANEL_SERVICE_ACCOUNT_SECRET";
}

/// Data residency clusters.
///
/// Mixpanel has no discovery API for these; the ids are hardcoded in the
/// Mixpanel web frontend.
pub mod clusters {
    /// Hostname reported for projects stored in the EU cluster
    pub const EU_HOST: &str = "eu.mixpanel.com";

    /// Cluster id of the US data center
    pub const US_CLUSTER_ID: i64 = 1;

    /// Cluster id of the EU data center
    pub const EU_CLUSTER_ID: i64 = 5;
}

/// Retry policy defaults
pub mod retry {
    /// Maximum retry attempts after the initial request attempt
    pub const MAX_RETRIES: u32 = 3;

    /// Delay before the first retry
    pub const BASE_DELAY_MS: u64 = 500;

    /// Upper bound for a single backoff delay
    pub const MAX_DELAY_MS: u64 = 8_000;
}

/// Default values for the client and CLI
pub mod defaults {
    /// Default Mixpanel host
    pub const HOST: &str = "https://mixpanel.com";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default number of requests allowed in flight at once (0 = unlimited)
    pub const CONCURRENT_REQUESTS: usize = 4;

    /// Absolute timeout of a single request attempt
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_are_absolute() {
        for path in [
            api::ME,
            api::TIMEZONES,
            api::ORGANIZATIONS,
            api::PROJECT_SETTINGS,
            api::PROJECT_UPDATE,
        ] {
            assert!(path.starts_with('/'), "{} should start with '/'", path);
            assert!(!path.ends_with('/'), "{} should not end with '/'", path);
        }
    }

    #[test]
    fn test_default_host_is_valid() {
        assert!(defaults::HOST.starts_with("https://"));
        assert!(!defaults::HOST.ends_with('/'));
    }

    #[test]
    fn test_cluster_ids_are_distinct() {
        assert_ne!(clusters::US_CLUSTER_ID, clusters::EU_CLUSTER_ID);
    }

    #[test]
    fn test_retry_delays_are_bounded() {
        assert!(retry::BASE_DELAY_MS <= retry::MAX_DELAY_MS);
    }
}
