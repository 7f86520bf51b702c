//! Retry/backoff policy for transient transport failures

use std::time::Duration;

use crate::config::retry;
use crate::error::MixpanelError;

/// Exponential backoff with a bounded number of attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt (0 disables retrying)
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: retry::MAX_RETRIES,
            base_delay: Duration::from_millis(retry::BASE_DELAY_MS),
            max_delay: Duration::from_millis(retry::MAX_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Policy that sends every request exactly once
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Whether a failed attempt may be repeated.
    ///
    /// Network failures and 5xx responses are transient. 4xx responses,
    /// decode failures and cancellation are not.
    pub fn is_retryable(error: &MixpanelError) -> bool {
        match error {
            MixpanelError::Http(_) => true,
            MixpanelError::Api { status, .. } => (500..600).contains(status),
            _ => false,
        }
    }

    /// Whether another attempt is allowed after `attempt` (0-based) failed
    pub fn should_retry(&self, attempt: u32, error: &MixpanelError) -> bool {
        attempt < self.max_retries && Self::is_retryable(error)
    }

    /// Backoff before retry number `attempt + 1`
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.min(30));
        self.base_delay
            .saturating_mul(factor)
            .min(self.max_delay)
    }
}
