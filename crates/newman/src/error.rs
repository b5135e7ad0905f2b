//! Error types for message validation and sending.

use std::error::Error as StdError;

/// Boxed error produced by a transport backend.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by message validation and transports.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required message field is missing or has no valid value.
    #[error("{field} is required")]
    MissingRequiredField {
        /// Name of the missing field.
        field: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure the caller may retry.
    #[error(transparent)]
    Retryable(#[from] RetryableError),

    /// Permanent failure reported by a transport.
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The send was cancelled through its context.
    #[error("Send cancelled")]
    Cancelled,

    /// The send did not complete before its context deadline.
    #[error("Send deadline exceeded")]
    DeadlineExceeded,
}

impl Error {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Wraps a transport failure as retryable.
    #[must_use]
    pub fn retryable(reason: impl Into<BoxError>) -> Self {
        Self::Retryable(RetryableError::new(reason))
    }

    /// Wraps a transport failure as permanent.
    #[must_use]
    pub fn transport(reason: impl Into<BoxError>) -> Self {
        Self::Transport(reason.into())
    }

    /// Returns true if the failed send may be retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Retryable(_) | Self::DeadlineExceeded)
    }
}

/// Marks a failure as safe to retry (rate limiting, transient network errors).
///
/// Displays exactly as its reason.
#[derive(Debug, thiserror::Error)]
#[error("{reason}")]
pub struct RetryableError {
    #[source]
    reason: BoxError,
}

impl RetryableError {
    /// Wraps `reason`.
    #[must_use]
    pub fn new(reason: impl Into<BoxError>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the wrapped failure.
    #[must_use]
    pub fn reason(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.reason.as_ref()
    }
}

/// Returns true if `err`, or any error in its source chain, is retryable.
#[must_use]
pub fn is_retryable(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.is::<RetryableError>() || e.downcast_ref::<Error>().is_some_and(Error::is_retryable) {
            return true;
        }
        current = e.source();
    }
    false
}
