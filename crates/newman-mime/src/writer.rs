//! Line-oriented MIME output.

use crate::boundary::Boundary;
use std::fmt;

/// Line terminator used for all generated output.
pub const CRLF: &str = "\r\n";

/// Content transfer encodings written by [`MimeWriter`] callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferEncoding {
    /// Base64 encoding.
    Base64,
}

impl fmt::Display for TransferEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64 => f.write_str("base64"),
        }
    }
}

/// Accumulates a MIME message as CRLF-terminated lines.
///
/// The writer does not track structure. Callers are responsible for opening
/// and closing sections in the right order.
#[derive(Debug, Default, Clone)]
pub struct MimeWriter {
    buf: Vec<u8>,
}

impl MimeWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a `Name: value` header line.
    pub fn header(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.line(&format!("{name}: {value}"))
    }

    /// Writes the empty line that ends a header block.
    pub fn blank_line(&mut self) -> &mut Self {
        self.buf.extend_from_slice(CRLF.as_bytes());
        self
    }

    /// Writes the delimiter that opens a part.
    pub fn open_part(&mut self, boundary: &Boundary) -> &mut Self {
        self.line(&boundary.opener())
    }

    /// Writes the delimiter that closes a multipart section.
    pub fn close_section(&mut self, boundary: &Boundary) -> &mut Self {
        self.line(&boundary.closer())
    }

    /// Writes a part body followed by a line terminator.
    pub fn body(&mut self, content: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(content);
        self.blank_line()
    }

    /// Consumes the writer and returns the accumulated bytes.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    fn line(&mut self, text: &str) -> &mut Self {
        self.buf.extend_from_slice(text.as_bytes());
        self.blank_line()
    }
}
