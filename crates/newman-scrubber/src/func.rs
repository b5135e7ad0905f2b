//! Closure adapter.

use std::fmt;

use crate::Scrubber;

/// Adapts a plain function or closure into a [`Scrubber`].
///
/// ```
/// use newman_scrubber::{Scrubber, ScrubberFn};
///
/// let snake = ScrubberFn::new(|s: &str| s.trim().to_lowercase().replace(' ', "_"));
/// assert_eq!(snake.scrub("  Some Text  "), "some_text");
/// ```
pub struct ScrubberFn<F>(F);

impl<F> ScrubberFn<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    /// Wraps `f`.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Scrubber for ScrubberFn<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn scrub(&self, content: &str) -> String {
        (self.0)(content)
    }
}

impl<F> fmt::Debug for ScrubberFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrubberFn").finish_non_exhaustive()
    }
}
