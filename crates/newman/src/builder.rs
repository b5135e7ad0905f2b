//! Fluent construction of [`EmailMessage`].

use std::collections::HashMap;
use std::sync::Arc;

use newman_scrubber::Scrubber;

use crate::attachment::Attachment;
use crate::message::{EmailMessage, Tag, is_html};

/// Builder for [`EmailMessage`].
///
/// Every method consumes and returns the builder. Nothing is validated here;
/// use [`crate::validate_message`] on the built message.
///
/// ```
/// use newman::EmailMessage;
///
/// let message = EmailMessage::builder()
///     .from("newman@usps.com")
///     .to(["jerry@seinfeld.com"])
///     .subject("Hello")
///     .text("Hello, Jerry.")
///     .build();
///
/// assert_eq!(message.to(), vec!["jerry@seinfeld.com"]);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct MessageBuilder {
    message: EmailMessage,
    text_scrubber: Option<Arc<dyn Scrubber>>,
    html_scrubber: Option<Arc<dyn Scrubber>>,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBuilder {
    /// Creates an empty builder with the default attachment size limit.
    pub fn new() -> Self {
        Self {
            message: EmailMessage::default(),
            text_scrubber: None,
            html_scrubber: None,
        }
    }

    /// Sets the sender.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.message.from = from.into();
        self
    }

    /// Replaces the recipients.
    pub fn to<I, S>(mut self, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.message.to = to.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.message.subject = subject.into();
        self
    }

    /// Replaces the carbon copy recipients.
    pub fn cc<I, S>(mut self, cc: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.message.cc = cc.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the blind carbon copy recipients.
    pub fn bcc<I, S>(mut self, bcc: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.message.bcc = bcc.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the reply-to address.
    pub fn reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.message.reply_to = reply_to.into();
        self
    }

    /// Sets the HTML body.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.message.html = html.into();
        self
    }

    /// Sets the plain text body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.message.text = text.into();
        self
    }

    /// Sets whichever body matches the content: HTML if it looks like markup,
    /// plain text otherwise.
    pub fn body(self, body: impl Into<String>) -> Self {
        let body = body.into();
        if is_html(&body) {
            self.html(body)
        } else {
            self.text(body)
        }
    }

    /// Appends a tag.
    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.message.tags.push(Tag::new(name, value));
        self
    }

    /// Appends several tags.
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.message.tags.extend(tags);
        self
    }

    /// Appends an attachment.
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.message.attachments.push(attachment);
        self
    }

    /// Appends several attachments.
    pub fn attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.message.attachments.extend(attachments);
        self
    }

    /// Sets one header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.message.headers.insert(name.into(), value.into());
        self
    }

    /// Replaces all headers.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.message.headers = headers
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Merges a header map, overwriting existing names.
    pub fn header_map(mut self, headers: HashMap<String, String>) -> Self {
        self.message.headers.extend(headers);
        self
    }

    /// Sets the attachment size limit in bytes. Negative means unlimited.
    pub fn max_attachment_size(mut self, size: i64) -> Self {
        self.message.set_max_attachment_size(size);
        self
    }

    /// Overrides the subject and plain text scrubber.
    pub fn text_scrubber(mut self, scrubber: impl Scrubber + 'static) -> Self {
        self.text_scrubber = Some(Arc::new(scrubber));
        self
    }

    /// Overrides the HTML scrubber.
    pub fn html_scrubber(mut self, scrubber: impl Scrubber + 'static) -> Self {
        self.html_scrubber = Some(Arc::new(scrubber));
        self
    }

    /// Finishes the message.
    #[must_use]
    pub fn build(self) -> EmailMessage {
        let mut message = self.message;
        message.set_scrubbers(self.text_scrubber, self.html_scrubber);
        message
    }
}
