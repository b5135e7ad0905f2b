//! Identity scrubber.

use crate::Scrubber;

/// Scrubber that performs no sanitization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonScrubber;

impl Scrubber for NonScrubber {
    fn scrub(&self, content: &str) -> String {
        content.to_string()
    }
}
