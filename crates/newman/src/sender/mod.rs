//! Transport contract.
//!
//! Every provider implements [`EmailSender`]. The plain send runs to
//! completion; the context-aware send is bounded by a [`SendContext`]
//! carrying an optional deadline and a cancellation token.

mod mock;

pub use mock::{MockConfig, MockSender};

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::message::EmailMessage;

/// An email transport.
///
/// Implementations must be safe to share across tasks. Failures worth
/// retrying should be returned as [`Error::Retryable`].
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends `message`.
    ///
    /// # Errors
    ///
    /// Returns a validation, transport or retryable error.
    async fn send_email(&self, message: &EmailMessage) -> Result<()>;

    /// Sends `message`, giving up when `ctx` is cancelled or its deadline
    /// passes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] or [`Error::DeadlineExceeded`] if the
    /// context ends first, otherwise whatever [`EmailSender::send_email`]
    /// returns.
    async fn send_email_with_context(
        &self,
        ctx: &SendContext,
        message: &EmailMessage,
    ) -> Result<()> {
        ctx.run(self.send_email(message)).await
    }
}

/// Deadline and cancellation scope for a send.
#[derive(Debug, Clone, Default)]
pub struct SendContext {
    deadline: Option<Instant>,
    token: CancellationToken,
}

impl SendContext {
    /// A context that never expires and is never cancelled unless
    /// [`SendContext::cancel`] is called.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires after `timeout`.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline_at(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`.
    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::background().deadline_at(deadline)
    }

    /// A context cancelled through `token`.
    #[must_use]
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            deadline: None,
            token,
        }
    }

    /// Sets or tightens the deadline. A later deadline never replaces an
    /// earlier one.
    #[must_use]
    pub fn deadline_at(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |d| d.min(deadline)));
        self
    }

    /// Cancels this context and every clone of it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns true once the context has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the cancellation token.
    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Fails if the context is already cancelled or past its deadline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] or [`Error::DeadlineExceeded`].
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(Error::DeadlineExceeded);
        }
        Ok(())
    }

    /// Runs `fut` until it completes or the context ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] or [`Error::DeadlineExceeded`] if the
    /// context ends first, otherwise the future's own result.
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.check()?;

        let deadline = async {
            match self.deadline {
                Some(d) => tokio::time::sleep_until(d).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(Error::Cancelled),
            () = deadline => Err(Error::DeadlineExceeded),
            result = fut => result,
        }
    }
}
