//! # Call Context
//!
//! Deadline and cancellation carried by a caller into the workflow and down to
//! the remote availability check.
//!
//! A context may hold a deadline, a [`CancellationToken`], both or neither
//! (`background`). [`CallContext::run`] races any future against whichever of
//! the two fires first, so waiting on a slow peer stops as soon as the caller
//! gives up.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why a [`CallContext`] stopped a call.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ContextDone {
    #[error("deadline exceeded")]
    DeadlineExceeded,
    #[error("cancelled by caller")]
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
    cancel: Option<CancellationToken>,
}

impl CallContext {
    /// A context that never expires and cannot be cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// Tightens the deadline to at most `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Tightens the deadline to `deadline`. An earlier deadline already on
    /// the context is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Fails if the context is already done.
    pub fn check(&self) -> Result<(), ContextDone> {
        if self.cancel.as_ref().is_some_and(|token| token.is_cancelled()) {
            return Err(ContextDone::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| deadline <= Instant::now()) {
            return Err(ContextDone::DeadlineExceeded);
        }
        Ok(())
    }

    /// Drives `fut` until it completes or the context is done, whichever
    /// comes first. `fut` is dropped when the context wins.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, ContextDone>
    where
        F: Future,
    {
        self.check()?;

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };
        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            output = fut => Ok(output),
            _ = deadline => Err(ContextDone::DeadlineExceeded),
            _ = cancelled => Err(ContextDone::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_background_runs_to_completion() {
        let ctx = CallContext::background();
        assert!(ctx.deadline().is_none());
        assert_eq!(ctx.run(async { 7 }).await, Ok(7));
    }

    #[tokio::test]
    async fn test_deadline_stops_slow_future() {
        let ctx = CallContext::background().with_timeout(Duration::from_millis(20));
        let started = std::time::Instant::now();
        let result = ctx
            .run(tokio::time::sleep(Duration::from_secs(5)))
            .await;
        assert_eq!(result, Err(ContextDone::DeadlineExceeded));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_expired_context_fails_before_polling() {
        let ctx = CallContext::background().with_deadline(Instant::now());
        let result = ctx.run(async { panic!("must not be polled") }).await;
        assert_eq!(result, Err(ContextDone::DeadlineExceeded));
        assert_eq!(ctx.remaining(), Some(Duration::ZERO));
    }

    #[tokio::test]
    async fn test_cancellation_stops_pending_future() {
        let token = CancellationToken::new();
        let ctx = CallContext::background().with_cancellation(token.clone());

        let handle = tokio::spawn(async move {
            ctx.run(std::future::pending::<()>()).await
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        token.cancel();

        assert_eq!(handle.await.unwrap(), Err(ContextDone::Cancelled));
    }

    #[test]
    fn test_with_deadline_keeps_earliest() {
        let now = Instant::now();
        let ctx = CallContext::background()
            .with_deadline(now + Duration::from_secs(1))
            .with_deadline(now + Duration::from_secs(10));
        assert_eq!(ctx.deadline(), Some(now + Duration::from_secs(1)));
    }
}
