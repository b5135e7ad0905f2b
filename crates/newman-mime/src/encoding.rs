//! Base64 transfer encoding.
//!
//! Output is a single unwrapped line using the standard alphabet with padding.
//! Empty input encodes to an empty string.

use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encodes data as Base64.
#[must_use]
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes Base64 data.
///
/// # Errors
///
/// Returns an error if the input is not valid Base64.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    STANDARD.decode(data).map_err(Into::into)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_encode_decode() {
        let data = b"Hello, World!";
        let encoded = encode_base64(data);
        assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");

        let decoded = decode_base64(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_base64_empty() {
        assert_eq!(encode_base64(b""), "");
        assert!(decode_base64("").unwrap().is_empty());
    }

    #[test]
    fn test_base64_invalid() {
        assert!(decode_base64("invalid_base64").is_err());
    }

    #[test]
    fn test_base64_is_single_line() {
        let encoded = encode_base64(&[0xAB; 300]);
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('\r'));
    }
}
