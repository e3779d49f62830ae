//! Cancellable request handles and terminal request outcomes.

use tokio::sync::oneshot;
use tokio::task::AbortHandle;

/// Terminal outcome of one asynchronous API request.
///
/// Exactly one outcome is delivered per issued request: never zero,
/// never more than one.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The request completed and the response body decoded.
    Success(T),
    /// The request failed at the transport layer, the server answered
    /// with an error status, or the body did not decode.
    Failed(anyhow::Error),
    /// The request was cancelled before it completed.
    Cancelled,
}

impl<T> Outcome<T> {
    /// Returns the payload of a successful request, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failed(_) | Self::Cancelled => None,
        }
    }

    /// True if the request was cancelled before completion.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Handle to one in-flight API request.
///
/// The request runs on the tokio runtime independently of the handle.
/// Dropping the handle detaches the request: it keeps running and its
/// outcome is discarded. Cancelling races against completion; whichever
/// wins determines the delivered outcome.
#[derive(Debug)]
pub struct RequestHandle<T> {
    /// Receives the terminal outcome from the request task.
    outcome_rx: oneshot::Receiver<Outcome<T>>,
    /// Aborts the request task.
    abort: AbortHandle,
}

impl<T> RequestHandle<T> {
    /// Wires a handle to a spawned request task.
    pub(crate) const fn new(outcome_rx: oneshot::Receiver<Outcome<T>>, abort: AbortHandle) -> Self {
        Self { outcome_rx, abort }
    }

    /// Cancels the in-flight request.
    ///
    /// If the request already completed, this is a no-op and the
    /// completed outcome is still delivered.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// True once the request task has completed or been aborted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }

    /// Waits for the terminal outcome of the request.
    pub async fn outcome(self) -> Outcome<T> {
        match self.outcome_rx.await {
            Ok(outcome) => outcome,
            // The task was aborted before it could report: cancellation won.
            Err(_) => {
                tracing::warn!("request was cancelled");
                Outcome::Cancelled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    /// Handle whose task is already finished, for wiring tests.
    fn dummy_abort_handle() -> AbortHandle {
        tokio::spawn(async {}).abort_handle()
    }

    #[tokio::test]
    async fn test_outcome_delivers_sent_value() {
        // Arrange
        let (tx, rx) = oneshot::channel();
        let handle = RequestHandle::new(rx, dummy_abort_handle());
        tx.send(Outcome::Success(42_u32)).unwrap();

        // Act
        let outcome = handle.outcome().await;

        // Assert
        assert_eq!(outcome.success(), Some(42));
    }

    #[tokio::test]
    async fn test_dropped_sender_maps_to_cancelled() {
        // Arrange
        let (tx, rx) = oneshot::channel::<Outcome<u32>>();
        let handle = RequestHandle::new(rx, dummy_abort_handle());
        drop(tx);

        // Act
        let outcome = handle.outcome().await;

        // Assert
        assert!(outcome.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_after_completion_still_delivers() {
        // Arrange
        let (tx, rx) = oneshot::channel();
        let handle = RequestHandle::new(rx, dummy_abort_handle());
        tx.send(Outcome::Success(7_u32)).unwrap();

        // Act: completion already won; cancel must not clobber it.
        handle.cancel();
        let outcome = handle.outcome().await;

        // Assert
        assert_eq!(outcome.success(), Some(7));
    }

    #[tokio::test]
    async fn test_outcome_success_accessor() {
        // Arrange
        let failed: Outcome<u32> = Outcome::Failed(anyhow::anyhow!("boom"));
        let cancelled: Outcome<u32> = Outcome::Cancelled;

        // Act & Assert
        assert_eq!(failed.success(), None);
        assert!(cancelled.is_cancelled());
    }
}
