//! # newman
//!
//! Send email through interchangeable transports with one message model.
//!
//! This crate provides:
//! - **Message model** - [`EmailMessage`] with validate-on-read addresses and
//!   scrub-on-read content
//! - **Attachments** - in-memory payloads with size gating and MIME type lookup
//! - **Validation** - syntactic address checks and a send precondition gate
//! - **MIME encoding** - `multipart/alternative` bodies, optionally wrapped in
//!   `multipart/mixed` with base64 attachments
//! - **Transports** - the [`EmailSender`] contract, deadline and cancellation
//!   scoping via [`SendContext`], and retryable error classification
//! - **Mock transport** - [`MockSender`] records sends and can dump `.mim` files
//!
//! ## Quick Start
//!
//! ```
//! use newman::{EmailMessage, EmailSender, MockSender, validate_message};
//!
//! # tokio_test::block_on(async {
//! let message = EmailMessage::builder()
//!     .from("newman@usps.com")
//!     .to(["jerry@seinfeld.com", "not an address"])
//!     .subject("Hello")
//!     .text("Hello, Jerry.")
//!     .build();
//!
//! assert_eq!(message.to(), vec!["jerry@seinfeld.com"]);
//! validate_message(&message)?;
//!
//! let sender = MockSender::default();
//! sender.send_email(&message).await?;
//! assert_eq!(sender.sent().len(), 1);
//! # Ok::<(), newman::Error>(())
//! # }).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attachment;
mod builder;
mod error;
mod message;
mod mime;
pub mod sender;
mod validation;
mod wire;

pub use attachment::{Attachment, NIL_ATTACHMENT_NAME, OptionalAttachment};
pub use builder::MessageBuilder;
pub use error::{BoxError, Error, Result, RetryableError, is_retryable};
pub use message::{DEFAULT_MAX_ATTACHMENT_SIZE, EmailMessage, OptionalMessage, Tag, is_html};
pub use mime::build_mime_message;
pub use newman_mime::mime_type;
pub use newman_scrubber::{
    HtmlScrubber, NonScrubber, Scrubber, ScrubberFn, TextScrubber, default_html_scrubber,
    default_text_scrubber, non_scrubber,
};
pub use sender::{EmailSender, MockConfig, MockSender, SendContext};
pub use validation::{validate_address, validate_addresses, validate_message};
