//! Mixpanel HTTP client for API interactions

use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::config::defaults;
use crate::error::Result;
use crate::mixpanel::credentials::ServiceAccount;
use crate::mixpanel::gate::ConcurrencyGate;
use crate::mixpanel::retry::RetryPolicy;
use crate::mixpanel::transport::{ApiRequest, Transport};

/// Client construction options
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL every API path is appended to
    pub host: String,
    /// Requests allowed in flight at once (0 = unlimited)
    pub concurrent_requests: usize,
    pub retry: RetryPolicy,
    /// Absolute timeout of a single attempt
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            concurrent_requests: defaults::CONCURRENT_REQUESTS,
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Mixpanel API client
///
/// Cheap to clone; clones share one transport and therefore one
/// concurrency gate.
#[derive(Clone)]
pub struct MixpanelClient {
    transport: Arc<Transport>,
    cancel: CancellationToken,
}

impl MixpanelClient {
    /// Create a client from raw credential values and a concurrency bound
    pub fn new(
        username: Option<&str>,
        secret: Option<&str>,
        concurrent_requests: usize,
    ) -> Result<Self> {
        let account = ServiceAccount::new(username, secret)?;
        Self::with_options(
            &account,
            ClientOptions {
                concurrent_requests,
                ..ClientOptions::default()
            },
        )
    }

    /// Create a client with explicit options
    pub fn with_options(account: &ServiceAccount, options: ClientOptions) -> Result<Self> {
        debug!(
            "Creating Mixpanel client for {} (user: {}, concurrency: {}, retries: {})",
            options.host,
            account.username(),
            options.concurrent_requests,
            options.retry.max_retries
        );

        let transport = Transport::new(
            options.host,
            account.authorization_header(),
            options.concurrent_requests,
            options.retry,
            options.timeout,
        )?;

        Ok(Self {
            transport: Arc::new(transport),
            cancel: CancellationToken::new(),
        })
    }

    /// Handle whose requests abort with `Cancelled` once `token` fires.
    ///
    /// The returned client shares the transport and gate with `self`.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            cancel: token,
        }
    }

    /// Base URL of the API
    pub fn host(&self) -> &str {
        self.transport.host()
    }

    pub fn gate(&self) -> &ConcurrencyGate {
        self.transport.gate()
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        self.transport.retry_policy()
    }

    /// Send a request through the shared transport
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<Vec<u8>> {
        self.transport.send(&request, &self.cancel).await
    }
}

#[cfg(test)]
impl MixpanelClient {
    /// Create a test client against a mock server, with retries disabled
    pub fn test_client(base_url: &str) -> Self {
        Self::test_client_with(base_url, defaults::CONCURRENT_REQUESTS)
    }

    pub fn test_client_with(base_url: &str, concurrent_requests: usize) -> Self {
        Self::build_test_client(base_url, concurrent_requests, RetryPolicy::disabled())
    }

    /// Create a test client with the given retry policy
    pub fn test_client_with_retry(base_url: &str, retry: RetryPolicy) -> Self {
        Self::build_test_client(base_url, defaults::CONCURRENT_REQUESTS, retry)
    }

    fn build_test_client(base_url: &str, concurrent_requests: usize, retry: RetryPolicy) -> Self {
        let account = ServiceAccount::new(Some("test-user"), Some("test-secret"))
            .expect("static test credentials are valid");
        Self::with_options(
            &account,
            ClientOptions {
                host: base_url.to_string(),
                concurrent_requests,
                retry,
                timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            },
        )
        .expect("test client builds")
    }
}
