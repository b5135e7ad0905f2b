//! # newman-scrubber
//!
//! Content scrubbers applied to outgoing email at read time.
//!
//! A [`Scrubber`] is a total `&str -> String` transform. Three policies ship
//! with the crate:
//!
//! - [`NonScrubber`]: returns the input unchanged
//! - [`TextScrubber`]: trims surrounding whitespace, then HTML-escapes
//! - [`HtmlScrubber`]: strips unsafe tags and attributes from HTML
//!
//! Closures can be used as scrubbers through [`ScrubberFn`].
//!
//! ## Quick Start
//!
//! ```
//! use newman_scrubber::{Scrubber, default_html_scrubber, default_text_scrubber};
//!
//! assert_eq!(default_text_scrubber().scrub("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
//! assert_eq!(
//!     default_html_scrubber().scrub("<script>alert(1)</script><b>ok</b>"),
//!     "<b>ok</b>"
//! );
//! ```
//!
//! The default instances are stateless statics and safe to share across
//! threads without synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod func;
mod html;
mod non;
mod text;

use std::fmt;

pub use func::ScrubberFn;
pub use html::HtmlScrubber;
pub use non::NonScrubber;
pub use text::TextScrubber;

/// Sanitizes a piece of content.
///
/// Implementations must never fail. A scrubber that can hit an internal error
/// has to absorb it and return a safe value.
pub trait Scrubber: fmt::Debug + Send + Sync {
    /// Returns the scrubbed form of `content`.
    fn scrub(&self, content: &str) -> String;
}

/// Process-wide identity scrubber.
pub static NON_SCRUBBER: NonScrubber = NonScrubber;

/// Process-wide plain text scrubber.
pub static DEFAULT_TEXT_SCRUBBER: TextScrubber = TextScrubber;

/// Process-wide HTML scrubber.
pub static DEFAULT_HTML_SCRUBBER: HtmlScrubber = HtmlScrubber;

/// Returns the identity scrubber.
#[must_use]
pub fn non_scrubber() -> &'static dyn Scrubber {
    &NON_SCRUBBER
}

/// Returns the scrubber used for subjects, plain text bodies and filenames.
#[must_use]
pub fn default_text_scrubber() -> &'static dyn Scrubber {
    &DEFAULT_TEXT_SCRUBBER
}

/// Returns the scrubber used for HTML bodies.
#[must_use]
pub fn default_html_scrubber() -> &'static dyn Scrubber {
    &DEFAULT_HTML_SCRUBBER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_distinct_policies() {
        let input = "<b>hi</b>";
        assert_eq!(non_scrubber().scrub(input), input);
        assert_eq!(default_text_scrubber().scrub(input), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(default_html_scrubber().scrub(input), input);
    }

    #[test]
    fn test_defaults_are_shareable() {
        fn assert_send_sync<T: Send + Sync + ?Sized>(_: &T) {}
        assert_send_sync(default_text_scrubber());
        assert_send_sync(default_html_scrubber());
        assert_send_sync(non_scrubber());
    }
}
