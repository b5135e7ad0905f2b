//! MIME content type handling.

use std::fmt;

/// Character set declared on generated text parts.
pub const UTF_8: &str = "UTF-8";

/// MIME content type with parameters.
///
/// Parameters keep insertion order so that the rendered header is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Main type (e.g., "text", "image", "multipart").
    pub main_type: String,
    /// Subtype (e.g., "plain", "html", "jpeg").
    pub sub_type: String,
    /// Parameters (e.g., charset=UTF-8, boundary=xxx).
    pub parameters: Vec<(String, String)>,
}

impl ContentType {
    /// Creates a new content type.
    #[must_use]
    pub fn new(main_type: impl Into<String>, sub_type: impl Into<String>) -> Self {
        Self {
            main_type: main_type.into(),
            sub_type: sub_type.into(),
            parameters: Vec::new(),
        }
    }

    /// Creates a `text/plain; charset=UTF-8` content type.
    #[must_use]
    pub fn text_plain() -> Self {
        Self::new("text", "plain").with_parameter("charset", UTF_8)
    }

    /// Creates a `text/html; charset=UTF-8` content type.
    #[must_use]
    pub fn text_html() -> Self {
        Self::new("text", "html").with_parameter("charset", UTF_8)
    }

    /// Creates a multipart/mixed content type with boundary.
    #[must_use]
    pub fn multipart_mixed(boundary: impl Into<String>) -> Self {
        Self::new("multipart", "mixed").with_parameter("boundary", boundary)
    }

    /// Creates a multipart/alternative content type with boundary.
    #[must_use]
    pub fn multipart_alternative(boundary: impl Into<String>) -> Self {
        Self::new("multipart", "alternative").with_parameter("boundary", boundary)
    }

    /// Sets a parameter, replacing an existing value with the same key.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into().to_lowercase();
        let value = value.into();
        match self.parameters.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.parameters.push((key, value)),
        }
        self
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let main = &self.main_type;
        let sub = &self.sub_type;
        write!(f, "{main}/{sub}")?;

        for (key, value) in &self.parameters {
            // Quote value if it contains tspecials
            if value.contains(|c: char| c.is_whitespace() || "()<>@,;:\\\"/[]?=".contains(c)) {
                write!(f, "; {key}=\"{value}\"")?;
            } else {
                write!(f, "; {key}={value}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_new() {
        let ct = ContentType::new("text", "plain");
        assert_eq!(ct.main_type, "text");
        assert_eq!(ct.sub_type, "plain");
        assert!(ct.parameters.is_empty());
        assert_eq!(ct.to_string(), "text/plain");
    }

    #[test]
    fn test_text_parts_render_exactly() {
        assert_eq!(ContentType::text_plain().to_string(), "text/plain; charset=UTF-8");
        assert_eq!(ContentType::text_html().to_string(), "text/html; charset=UTF-8");
    }

    #[test]
    fn test_multipart_mixed() {
        let ct = ContentType::multipart_mixed("mixed-123");
        assert_eq!(
            ct.parameters,
            vec![("boundary".to_string(), "mixed-123".to_string())]
        );
        assert_eq!(ct.to_string(), "multipart/mixed; boundary=mixed-123");
    }

    #[test]
    fn test_multipart_alternative() {
        let ct = ContentType::multipart_alternative("alt-123");
        assert_eq!(ct.to_string(), "multipart/alternative; boundary=alt-123");
    }

    #[test]
    fn test_quotes_tspecials() {
        let ct = ContentType::multipart_mixed("----=_Part_123");
        assert_eq!(ct.to_string(), "multipart/mixed; boundary=\"----=_Part_123\"");
    }

    #[test]
    fn test_with_parameter_replaces() {
        let ct = ContentType::new("text", "plain")
            .with_parameter("charset", "iso-8859-1")
            .with_parameter("format", "flowed")
            .with_parameter("Charset", "utf-8");

        assert_eq!(ct.to_string(), "text/plain; charset=utf-8; format=flowed");
    }
}
