//! Plain text scrubber.

use crate::Scrubber;

/// Trims surrounding whitespace and escapes HTML special characters.
///
/// Escapes `<`, `>`, `&`, `"` and `'`, so the result is safe to embed in
/// HTML element content as well as quoted attribute values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextScrubber;

impl Scrubber for TextScrubber {
    fn scrub(&self, content: &str) -> String {
        html_escape::encode_quoted_attribute(content.trim()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        let result = TextScrubber.scrub(r#"Hello <world> & "everyone""#);
        assert!(result.starts_with("Hello &lt;world&gt; &amp; "));
        assert!(!result.contains('"'));
    }

    #[test]
    fn test_escape_tags() {
        assert_eq!(TextScrubber.scrub("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(TextScrubber.scrub(""), "");
        assert_eq!(TextScrubber.scrub("   "), "");
        assert_eq!(TextScrubber.scrub("\t plain text \n"), "plain text");
    }

    #[test]
    fn test_script_is_inert() {
        let result = TextScrubber.scrub(" <script>alert('xss')</script> ");
        assert!(result.starts_with("&lt;script&gt;alert("));
        assert!(result.ends_with(")&lt;/script&gt;"));
        assert!(!result.contains('\''));
    }
}
