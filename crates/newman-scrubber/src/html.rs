//! HTML scrubber.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Scrubber;

static SANITIZER: LazyLock<ammonia::Builder<'static>> = LazyLock::new(|| {
    let mut builder = ammonia::Builder::default();
    builder.link_rel(Some("nofollow"));
    builder
});

// Sanitized output never nests anchors, so the first closing tag matches.
#[allow(clippy::unwrap_used)]
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<a(\s[^>]*)?>(.*?)</a>").unwrap());

/// Removes unsafe markup from HTML content.
///
/// Script and style elements are dropped along with their content, event
/// handler attributes and `javascript:` URLs are removed, and a safelist of
/// formatting tags (`b`, `i`, `u`, `a`, `div`, `p`, ...) is preserved. Links
/// get `rel="nofollow"`; anchors left without an `href` are unwrapped to
/// their text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlScrubber;

impl Scrubber for HtmlScrubber {
    fn scrub(&self, content: &str) -> String {
        let cleaned = SANITIZER.clean(content).to_string();
        ANCHOR_RE
            .replace_all(&cleaned, |caps: &Captures<'_>| {
                let attrs = caps.get(1).map_or("", |m| m.as_str());
                if attrs.contains(" href=") {
                    caps[0].to_string()
                } else {
                    caps[2].to_string()
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_script_content() {
        assert_eq!(
            HtmlScrubber.scrub("<script>alert(1)</script><b>ok</b>"),
            "<b>ok</b>"
        );
        assert_eq!(
            HtmlScrubber.scrub(r#"<div>Hello <script>alert("xss")</script> World</div>"#),
            "<div>Hello  World</div>"
        );
    }

    #[test]
    fn test_removes_event_handlers() {
        let result =
            HtmlScrubber.scrub(r#"<a onblur="alert(secret)" href="http://www.google.com">Google</a>"#);
        assert!(!result.contains("onblur"));
        assert!(result.contains(r#"href="http://www.google.com""#));
        assert!(result.contains(r#"rel="nofollow""#));
        assert!(result.contains(">Google</a>"));
    }

    #[test]
    fn test_removes_javascript_urls() {
        assert_eq!(
            HtmlScrubber.scrub(
                r#"<div><a href="javascript:alert('XSS1')" onmouseover="alert('XSS2')">XSS<a></div>"#,
            ),
            "<div>XSS</div>"
        );
        assert_eq!(
            HtmlScrubber.scrub(
                r#"<div><a href="javascript:alert('XSS1')" onmouseover="alert('XSS2')">XSS</a></div>"#,
            ),
            "<div>XSS</div>"
        );
    }

    #[test]
    fn test_unwraps_anchors_without_href() {
        assert_eq!(HtmlScrubber.scrub("<p><a>plain</a> text</p>"), "<p>plain text</p>");
        assert_eq!(HtmlScrubber.scrub("<a name=\"top\"></a><b>x</b>"), "<b>x</b>");
    }

    #[test]
    fn test_keeps_anchors_with_href() {
        let result = HtmlScrubber.scrub(r#"<p><a href="https://example.com">one</a> and <a>two</a></p>"#);
        assert!(result.contains(r#"href="https://example.com""#));
        assert!(result.contains(">one</a> and two</p>"));
    }

    #[test]
    fn test_drops_disallowed_attributes() {
        assert_eq!(
            HtmlScrubber.scrub(r#"<p href="http://www.google.com">Google</p>"#),
            "<p>Google</p>"
        );
    }

    #[test]
    fn test_keeps_safe_formatting() {
        let input = "<b>Bold</b> <i>Italic</i> <u>Underline</u>";
        assert_eq!(HtmlScrubber.scrub(input), input);
        assert_eq!(HtmlScrubber.scrub(""), "");
    }
}
