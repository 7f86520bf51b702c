//! HTTP transport: auth header, concurrency gate, retry and status checks

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, REFERER};
use reqwest::{Client, Method};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::error::{MixpanelError, Result};
use crate::mixpanel::gate::ConcurrencyGate;
use crate::mixpanel::retry::RetryPolicy;

/// Body of an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Sent as `application/x-www-form-urlencoded`
    Form(Vec<(&'static str, String)>),
}

/// A request relative to the client's host
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
    /// Send `Referer: <host>` (required by the legacy project update form)
    pub referer: bool,
    /// Safe to resend after a transient failure
    pub idempotent: bool,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: RequestBody::Empty,
            referer: false,
            idempotent: true,
        }
    }

    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: RequestBody::Json(body),
            referer: false,
            idempotent: false,
        }
    }

    pub fn post_form(path: impl Into<String>, fields: Vec<(&'static str, String)>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: RequestBody::Form(fields),
            referer: false,
            idempotent: false,
        }
    }

    pub fn with_referer(mut self) -> Self {
        self.referer = true;
        self
    }

    /// Mark a POST as safe to retry (it sets absolute values)
    pub fn idempotent(mut self) -> Self {
        self.idempotent = true;
        self
    }
}

/// Encode form fields (`a=1&b=two%20words`)
pub fn encode_form(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Low-level transport owned by a client
pub struct Transport {
    client: Client,
    host: String,
    auth_header: String,
    gate: ConcurrencyGate,
    retry: RetryPolicy,
}

impl Transport {
    pub fn new(
        host: String,
        auth_header: String,
        concurrent_requests: usize,
        retry: RetryPolicy,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(concurrent_requests.max(1))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            // Absolute timeout applies to each attempt, not to the retry loop
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| MixpanelError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            auth_header,
            gate: ConcurrencyGate::new(concurrent_requests),
            retry,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn gate(&self) -> &ConcurrencyGate {
        &self.gate
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Send a request and return the raw body of a 2xx response.
    ///
    /// One gate slot is held across all attempts so that retries are
    /// throttled like first attempts. The slot is released on every exit path.
    /// Requests not marked idempotent are sent exactly once.
    pub async fn send(&self, request: &ApiRequest, cancel: &CancellationToken) -> Result<Vec<u8>> {
        let _permit = self.gate.acquire(cancel).await?;

        let mut attempt = 0;
        loop {
            match self.send_once(request).await {
                Ok(body) => return Ok(body),
                Err(e) if request.idempotent && self.retry.should_retry(attempt, &e) => {
                    let delay = self.retry.delay(attempt);
                    warn!(
                        "{} {} failed (attempt {}/{}): {}; retrying in {:?}",
                        request.method,
                        request.path,
                        attempt + 1,
                        self.retry.max_retries + 1,
                        e,
                        delay
                    );
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return Err(MixpanelError::Cancelled),
                        _ = tokio::time::sleep(delay) => {}
                    }
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(&self, request: &ApiRequest) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.host, request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(AUTHORIZATION, &self.auth_header);

        if request.referer {
            builder = builder.header(REFERER, &self.host);
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(fields) => builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encode_form(fields)),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(MixpanelError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        debug!("{} {} -> {} ({} bytes)", request.method, url, status, body.len());
        Ok(body.to_vec())
    }
}
