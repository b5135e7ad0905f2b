//! Email attachments.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use newman_mime::encoding::{decode_base64, encode_base64};
use newman_mime::mime_type;
use newman_scrubber::default_text_scrubber;
use serde::{Deserialize, Serialize};

use crate::wire::null_as_default;

/// Filename reported for a missing attachment.
pub const NIL_ATTACHMENT_NAME: &str = "nil_attachment";

/// A binary payload attached to a message.
///
/// The filename is stored as given and scrubbed only when read through
/// [`Attachment::filename`]. The JSON form is
/// `{"filename": string, "content": base64-string}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, deserialize_with = "null_as_default")]
    filename: String,
    #[serde(default, with = "base64_content")]
    content: Vec<u8>,
    #[serde(skip)]
    content_type: Option<String>,
    #[serde(skip)]
    file_path: Option<PathBuf>,
}

impl Attachment {
    /// Creates an attachment from a filename and its content.
    #[must_use]
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            content_type: None,
            file_path: None,
        }
    }

    /// Reads a file fully into memory and attaches it under its last path segment.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(filename, content).with_file_path(path))
    }

    /// Sets an explicit content type instead of deriving it from the filename.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Records the on-disk source for transports that stream from a path.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Replaces the filename.
    pub fn set_filename(&mut self, filename: impl Into<String>) -> &mut Self {
        self.filename = filename.into();
        self
    }

    /// Replaces the content.
    pub fn set_content(&mut self, content: impl Into<Vec<u8>>) -> &mut Self {
        self.content = content.into();
        self
    }

    /// Returns the filename scrubbed with the default text scrubber.
    ///
    /// Message-level scrubber overrides never apply to filenames.
    #[must_use]
    pub fn filename(&self) -> String {
        default_text_scrubber().scrub(&self.filename)
    }

    /// Returns the filename exactly as stored.
    #[must_use]
    pub fn raw_filename(&self) -> &str {
        &self.filename
    }

    /// Returns the explicit content type, or the one registered for the
    /// filename's extension (empty if unknown).
    #[must_use]
    pub fn content_type(&self) -> String {
        self.content_type
            .clone()
            .unwrap_or_else(|| mime_type(&self.filename()))
    }

    /// Returns the on-disk source, if any.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the Base64 encoding of the content. Empty content yields no bytes.
    #[must_use]
    pub fn base64_content(&self) -> Vec<u8> {
        self.base64_string_content().into_bytes()
    }

    /// Returns the Base64 encoding of the content as a string.
    #[must_use]
    pub fn base64_string_content(&self) -> String {
        if self.content.is_empty() {
            return String::new();
        }
        encode_base64(&self.content)
    }

    /// Returns the content verbatim.
    #[must_use]
    pub fn raw_content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Read access to an attachment that may be absent.
///
/// A missing attachment reads as [`NIL_ATTACHMENT_NAME`] with empty content.
pub trait OptionalAttachment {
    /// Scrubbed filename, or [`NIL_ATTACHMENT_NAME`].
    fn filename(&self) -> String;
    /// Base64 content, or no bytes.
    fn base64_content(&self) -> Vec<u8>;
    /// Base64 content as a string, or an empty string.
    fn base64_string_content(&self) -> String;
    /// Raw content, or no bytes.
    fn raw_content(&self) -> &[u8];
}

impl OptionalAttachment for Option<&Attachment> {
    fn filename(&self) -> String {
        self.map_or_else(|| NIL_ATTACHMENT_NAME.to_string(), Attachment::filename)
    }

    fn base64_content(&self) -> Vec<u8> {
        self.map(Attachment::base64_content).unwrap_or_default()
    }

    fn base64_string_content(&self) -> String {
        self.map(Attachment::base64_string_content).unwrap_or_default()
    }

    fn raw_content(&self) -> &[u8] {
        self.map(Attachment::raw_content).unwrap_or_default()
    }
}

mod base64_content {
    use super::{decode_base64, encode_base64};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(content: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_base64(content))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        decode_base64(&encoded).map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_attachment_getters() {
        let attachment = Attachment::new("test.txt", b"Hello, World!".to_vec());
        assert_eq!(attachment.filename(), "test.txt");
        assert_eq!(attachment.raw_content(), b"Hello, World!");
        assert_eq!(attachment.base64_string_content(), "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(attachment.base64_content(), b"SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(attachment.len(), 13);
        assert!(!attachment.is_empty());
        assert!(attachment.file_path().is_none());
    }

    #[test]
    fn test_empty_content() {
        let attachment = Attachment::new("empty.txt", Vec::<u8>::new());
        assert!(attachment.base64_content().is_empty());
        assert_eq!(attachment.base64_string_content(), "");
        assert!(attachment.raw_content().is_empty());
        assert!(attachment.is_empty());
    }

    #[test]
    fn test_filename_is_scrubbed_on_read_only() {
        let attachment = Attachment::new(" <script>.txt ", b"x".to_vec());
        assert_eq!(attachment.raw_filename(), " <script>.txt ");
        assert_eq!(attachment.filename(), "&lt;script&gt;.txt");
    }

    #[test]
    fn test_setters() {
        let mut attachment = Attachment::new("a.txt", b"one".to_vec());
        attachment.set_filename("b.pdf").set_content(b"two".to_vec());
        assert_eq!(attachment.filename(), "b.pdf");
        assert_eq!(attachment.raw_content(), b"two");
    }

    #[test]
    fn test_content_type() {
        assert_eq!(Attachment::new("doc.pdf", vec![1u8]).content_type(), "application/pdf");
        assert_eq!(
            Attachment::new("notes.TXT", vec![1u8]).content_type(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(Attachment::new("blob", vec![1u8]).content_type(), "");
        assert_eq!(
            Attachment::new("blob", vec![1u8])
                .with_content_type("application/octet-stream")
                .content_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"quarterly numbers").unwrap();

        let attachment = Attachment::from_file(&path).unwrap();
        assert_eq!(attachment.filename(), "report.txt");
        assert_eq!(attachment.raw_content(), b"quarterly numbers");
        assert_eq!(attachment.file_path(), Some(path.as_path()));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Attachment::from_file(dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_absent_attachment() {
        let absent: Option<&Attachment> = None;
        assert_eq!(absent.filename(), NIL_ATTACHMENT_NAME);
        assert!(absent.base64_content().is_empty());
        assert_eq!(absent.base64_string_content(), "");
        assert!(absent.raw_content().is_empty());

        let present = Attachment::new("a.txt", b"abc".to_vec());
        let some = Some(&present);
        assert_eq!(OptionalAttachment::filename(&some), "a.txt");
        assert_eq!(OptionalAttachment::raw_content(&some), b"abc");
        assert_eq!(OptionalAttachment::base64_string_content(&some), "YWJj");
    }

    #[test]
    fn test_json_round_trip_shape() {
        let attachment = Attachment::new("attachment1.txt", b"file content".to_vec())
            .with_content_type("text/plain");
        let json = serde_json::to_value(&attachment).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"filename": "attachment1.txt", "content": "ZmlsZSBjb250ZW50"})
        );

        let decoded: Attachment = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.raw_content(), b"file content");
        assert_eq!(decoded.content_type(), "text/plain; charset=utf-8");
    }

    #[test]
    fn test_json_decode_edge_cases() {
        let empty: Attachment = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.filename(), "");
        assert!(empty.raw_content().is_empty());

        let nulls: Attachment =
            serde_json::from_str(r#"{"filename": null, "content": null}"#).unwrap();
        assert_eq!(nulls.raw_filename(), "");
        assert!(nulls.raw_content().is_empty());

        assert!(serde_json::from_str::<Attachment>(r#"{"filename": "f.txt", "content": "invalid_base64"}"#).is_err());
        assert!(serde_json::from_str::<Attachment>(r#"{"filename": 123456789, "content": ""}"#).is_err());
    }
}
