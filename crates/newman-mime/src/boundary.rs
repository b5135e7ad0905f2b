//! Multipart boundary tokens.

use std::fmt;
use uuid::Uuid;

/// A multipart boundary token.
///
/// Tokens are random and checked against the content they will delimit, so a
/// boundary never appears inside any of the parts it separates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boundary(String);

impl Boundary {
    /// Generates a boundary of the form `<prefix>-boundary-<hex>` that does
    /// not occur in any of `contents`.
    #[must_use]
    pub fn generate(prefix: &str, contents: &[&[u8]]) -> Self {
        loop {
            let token = format!("{prefix}-boundary-{}", Uuid::new_v4().simple());
            if !contents.iter().any(|c| contains(c, token.as_bytes())) {
                return Self(token);
            }
        }
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the delimiter line that opens a part (`--token`).
    #[must_use]
    pub fn opener(&self) -> String {
        format!("--{}", self.0)
    }

    /// Returns the delimiter line that closes a section (`--token--`).
    #[must_use]
    pub fn closer(&self) -> String {
        format!("--{}--", self.0)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    needle.len() <= haystack.len() && haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_shape() {
        let boundary = Boundary::generate("mixed", &[]);
        assert!(boundary.as_str().starts_with("mixed-boundary-"));
        assert_eq!(boundary.as_str().len(), "mixed-boundary-".len() + 32);
        assert_eq!(boundary.opener(), format!("--{boundary}"));
        assert_eq!(boundary.closer(), format!("--{boundary}--"));
    }

    #[test]
    fn test_boundaries_are_unique() {
        let a = Boundary::generate("alt", &[]);
        let b = Boundary::generate("alt", &[]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_boundary_not_in_content() {
        let content = b"alt-boundary- appears here but only as a prefix";
        let boundary = Boundary::generate("alt", &[content.as_slice()]);
        assert!(!contains(content, boundary.as_str().as_bytes()));
    }

    #[test]
    fn test_contains() {
        assert!(contains(b"hello world", b"lo w"));
        assert!(!contains(b"hello", b"hello world"));
        assert!(contains(b"abc", b""));
    }

    proptest::proptest! {
        #[test]
        fn prop_boundary_never_in_content(content in proptest::collection::vec(proptest::num::u8::ANY, 0..512)) {
            let boundary = Boundary::generate("mixed", &[content.as_slice()]);
            proptest::prop_assert!(!contains(&content, boundary.as_str().as_bytes()));
        }
    }
}
