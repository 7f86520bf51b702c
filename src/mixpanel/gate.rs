//! Concurrency gate bounding the number of requests in flight

use log::trace;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_util::sync::CancellationToken;

use crate::error::{MixpanelError, Result};

/// Counting semaphore shared by all clones of a client.
///
/// A capacity of 0 disables the gate entirely.
#[derive(Debug, Clone)]
pub struct ConcurrencyGate {
    semaphore: Option<Arc<Semaphore>>,
    capacity: usize,
}

/// Slot held for the duration of one logical request; released on drop
#[derive(Debug)]
pub struct GatePermit {
    _permit: Option<OwnedSemaphorePermit>,
}

impl ConcurrencyGate {
    pub fn new(capacity: usize) -> Self {
        let semaphore = (capacity > 0).then(|| Arc::new(Semaphore::new(capacity)));
        Self {
            semaphore,
            capacity,
        }
    }

    /// Configured capacity (0 = unlimited)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots right now, `None` when the gate is disabled
    pub fn available(&self) -> Option<usize> {
        self.semaphore.as_ref().map(|s| s.available_permits())
    }

    /// Wait for a free slot, or fail with `Cancelled` if the token fires first.
    ///
    /// An abandoned acquisition never consumes a permit.
    pub async fn acquire(&self, cancel: &CancellationToken) -> Result<GatePermit> {
        let Some(semaphore) = &self.semaphore else {
            if cancel.is_cancelled() {
                return Err(MixpanelError::Cancelled);
            }
            return Ok(GatePermit { _permit: None });
        };

        trace!(
            "Waiting for request slot ({} of {} free)",
            semaphore.available_permits(),
            self.capacity
        );

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(MixpanelError::Cancelled),
            permit = Arc::clone(semaphore).acquire_owned() => {
                let permit = permit
                    .map_err(|_| MixpanelError::Config("request gate closed".to_string()))?;
                Ok(GatePermit {
                    _permit: Some(permit),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_disabled_gate_never_blocks() {
        let gate = ConcurrencyGate::new(0);
        let cancel = CancellationToken::new();
        let _a = gate.acquire(&cancel).await.unwrap();
        let _b = gate.acquire(&cancel).await.unwrap();
        assert_eq!(gate.available(), None);
        assert_eq!(gate.capacity(), 0);
    }

    #[tokio::test]
    async fn test_permit_released_on_drop() {
        let gate = ConcurrencyGate::new(2);
        let cancel = CancellationToken::new();
        {
            let _permit = gate.acquire(&cancel).await.unwrap();
            assert_eq!(gate.available(), Some(1));
        }
        assert_eq!(gate.available(), Some(2));
    }

    #[tokio::test]
    async fn test_cancel_while_waiting_does_not_leak() {
        let gate = ConcurrencyGate::new(1);
        let cancel = CancellationToken::new();
        let held = gate.acquire(&cancel).await.unwrap();

        let waiter_token = CancellationToken::new();
        let canceller = waiter_token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result = gate.acquire(&waiter_token).await;
        assert!(matches!(result, Err(MixpanelError::Cancelled)));

        drop(held);
        assert_eq!(gate.available(), Some(1));
        let _again = gate.acquire(&cancel).await.unwrap();
    }

    #[tokio::test]
    async fn test_already_cancelled_token_fails_even_with_free_slot() {
        let gate = ConcurrencyGate::new(1);
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(matches!(
            gate.acquire(&cancel).await,
            Err(MixpanelError::Cancelled)
        ));
        assert_eq!(gate.available(), Some(1));
    }

    #[tokio::test]
    async fn test_clones_share_capacity() {
        let gate = ConcurrencyGate::new(1);
        let clone = gate.clone();
        let cancel = CancellationToken::new();
        let _permit = gate.acquire(&cancel).await.unwrap();
        assert_eq!(clone.available(), Some(0));
    }
}
