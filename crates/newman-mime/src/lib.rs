//! # newman-mime
//!
//! MIME generation toolkit for outgoing email.
//!
//! ## Features
//!
//! - **Content types**: `type/subtype; param=value` with ordered parameters
//! - **MIME type lookup**: file extension to registered MIME type
//! - **Boundaries**: collision-checked multipart boundary tokens
//! - **Writer**: CRLF-terminated header lines, part openers and section closers
//! - **Encoding**: standard Base64
//!
//! ## Quick Start
//!
//! ```
//! use newman_mime::{Boundary, ContentType, MimeWriter};
//!
//! let boundary = Boundary::generate("alt", &[b"Hello".as_slice()]);
//!
//! let mut writer = MimeWriter::new();
//! writer.header("Subject", "Hi");
//! writer.header("MIME-Version", "1.0");
//! writer.header(
//!     "Content-Type",
//!     ContentType::multipart_alternative(boundary.as_str()),
//! );
//! writer.blank_line();
//! writer.open_part(&boundary);
//! writer.header("Content-Type", ContentType::text_plain());
//! writer.blank_line();
//! writer.body(b"Hello");
//! writer.close_section(&boundary);
//!
//! let bytes = writer.finish();
//! assert!(bytes.ends_with(b"--\r\n"));
//! ```
//!
//! ### MIME type lookup
//!
//! ```
//! use newman_mime::mime_type;
//!
//! assert_eq!(mime_type("report.PDF"), "application/pdf");
//! assert_eq!(mime_type("notes.txt"), "text/plain; charset=utf-8");
//! assert_eq!(mime_type("README"), "");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod boundary;
mod content_type;
mod error;
mod mime_type;
mod writer;

pub mod encoding;

pub use boundary::Boundary;
pub use content_type::ContentType;
pub use error::{Error, Result};
pub use mime_type::{extension, mime_type};
pub use writer::{CRLF, MimeWriter, TransferEncoding};
