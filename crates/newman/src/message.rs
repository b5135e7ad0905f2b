//! Outbound email message model.
//!
//! Stored fields hold exactly what the caller provided. Every read accessor
//! derives a validated or scrubbed view on the fly and never writes back, so
//! swapping a scrubber changes what the next read returns without any
//! reprocessing.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use newman_scrubber::{Scrubber, default_html_scrubber, default_text_scrubber};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;
use crate::builder::MessageBuilder;
use crate::validation::{validate_address, validate_addresses};
use crate::wire::null_as_default;

/// Default attachment size limit (25 MiB).
pub const DEFAULT_MAX_ATTACHMENT_SIZE: i64 = 25 * 1024 * 1024;

#[allow(clippy::unwrap_used)]
static HTML_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?[a-z][\s\S]*>").unwrap());

/// Returns true if `content` contains something that looks like an HTML tag.
#[must_use]
pub fn is_html(content: &str) -> bool {
    HTML_RE.is_match(content)
}

/// Opaque name/value metadata passed through to transports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Tag value.
    pub value: String,
}

impl Tag {
    /// Creates a tag.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One outbound email.
///
/// The JSON form carries `from`, `to`, `cc`, `bcc`, `replyTo`, `subject`,
/// `text`, `html` and `attachments`. Empty `cc`, `bcc`, `replyTo`, `html`
/// and `attachments` are omitted. Decoding always resets the attachment
/// size limit to [`DEFAULT_MAX_ATTACHMENT_SIZE`] and clears custom scrubbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    /// Sender address as provided.
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    /// Recipient addresses as provided.
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: Vec<String>,
    /// Carbon copy addresses as provided.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    /// Blind carbon copy addresses as provided.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,
    /// Reply-to address as provided.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub reply_to: String,
    /// Subject as provided.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    /// Plain text body as provided.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// HTML body as provided.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub html: String,
    /// Attachments in insertion order.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Transport metadata.
    #[serde(skip)]
    pub tags: Vec<Tag>,
    /// Extra headers for transports that support them.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
    #[serde(skip, default = "default_max_attachment_size")]
    max_attachment_size: i64,
    #[serde(skip)]
    text_scrubber: Option<Arc<dyn Scrubber>>,
    #[serde(skip)]
    html_scrubber: Option<Arc<dyn Scrubber>>,
}

const fn default_max_attachment_size() -> i64 {
    DEFAULT_MAX_ATTACHMENT_SIZE
}

impl Default for EmailMessage {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            reply_to: String::new(),
            subject: String::new(),
            text: String::new(),
            html: String::new(),
            attachments: Vec::new(),
            tags: Vec::new(),
            headers: HashMap::new(),
            max_attachment_size: DEFAULT_MAX_ATTACHMENT_SIZE,
            text_scrubber: None,
            html_scrubber: None,
        }
    }
}

impl EmailMessage {
    /// Creates a message with a single body.
    ///
    /// The body becomes the HTML part if it looks like HTML and the plain
    /// text part otherwise.
    #[must_use]
    pub fn new<I, S>(from: impl Into<String>, to: I, subject: impl Into<String>, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = body.into();
        let mut message = Self {
            from: from.into(),
            to: to.into_iter().map(Into::into).collect(),
            subject: subject.into(),
            ..Self::default()
        };

        if is_html(&body) {
            message.html = body;
        } else {
            message.text = body;
        }

        message
    }

    /// Creates a message with every envelope and content field set.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn full(
        from: impl Into<String>,
        to: Vec<String>,
        subject: impl Into<String>,
        cc: Vec<String>,
        bcc: Vec<String>,
        reply_to: impl Into<String>,
        text: impl Into<String>,
        html: impl Into<String>,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            from: from.into(),
            to,
            cc,
            bcc,
            reply_to: reply_to.into(),
            subject: subject.into(),
            text: text.into(),
            html: html.into(),
            attachments,
            ..Self::default()
        }
    }

    /// Starts a [`MessageBuilder`].
    #[must_use]
    pub fn builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    /// Sets the sender address.
    pub fn set_from(&mut self, from: impl Into<String>) -> &mut Self {
        self.from = from.into();
        self
    }

    /// Replaces the recipient addresses.
    pub fn set_to<I, S>(&mut self, to: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to = to.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the carbon copy addresses.
    pub fn set_cc<I, S>(&mut self, cc: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cc = cc.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the blind carbon copy addresses.
    pub fn set_bcc<I, S>(&mut self, bcc: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bcc = bcc.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the reply-to address.
    pub fn set_reply_to(&mut self, reply_to: impl Into<String>) -> &mut Self {
        self.reply_to = reply_to.into();
        self
    }

    /// Sets the subject.
    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = subject.into();
        self
    }

    /// Sets the plain text body.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    /// Sets the HTML body.
    pub fn set_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.html = html.into();
        self
    }

    /// Replaces the attachments.
    pub fn set_attachments(&mut self, attachments: Vec<Attachment>) -> &mut Self {
        self.attachments = attachments;
        self
    }

    /// Sets the attachment size limit in bytes. Negative means unlimited.
    pub const fn set_max_attachment_size(&mut self, size: i64) -> &mut Self {
        self.max_attachment_size = size;
        self
    }

    /// Overrides the scrubber applied to the subject and plain text body.
    pub fn set_text_scrubber(&mut self, scrubber: impl Scrubber + 'static) -> &mut Self {
        self.text_scrubber = Some(Arc::new(scrubber));
        self
    }

    /// Overrides the scrubber applied to the HTML body.
    pub fn set_html_scrubber(&mut self, scrubber: impl Scrubber + 'static) -> &mut Self {
        self.html_scrubber = Some(Arc::new(scrubber));
        self
    }

    /// Restores the default scrubbers.
    pub fn clear_scrubbers(&mut self) -> &mut Self {
        self.text_scrubber = None;
        self.html_scrubber = None;
        self
    }

    /// Appends a recipient.
    pub fn add_to(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.to.push(recipient.into());
        self
    }

    /// Appends a carbon copy recipient.
    pub fn add_cc(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.cc.push(recipient.into());
        self
    }

    /// Appends a blind carbon copy recipient.
    pub fn add_bcc(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.bcc.push(recipient.into());
        self
    }

    /// Appends an attachment.
    pub fn add_attachment(&mut self, attachment: Attachment) -> &mut Self {
        self.attachments.push(attachment);
        self
    }

    /// Appends a tag.
    pub fn add_tag(&mut self, tag: Tag) -> &mut Self {
        self.tags.push(tag);
        self
    }

    /// Sets a header, replacing any previous value under the same name.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Validated sender address, or an empty string.
    #[must_use]
    pub fn from(&self) -> String {
        validate_address(&self.from)
    }

    /// Valid recipient addresses.
    #[must_use]
    pub fn to(&self) -> Vec<String> {
        validate_addresses(&self.to)
    }

    /// Valid carbon copy addresses.
    #[must_use]
    pub fn cc(&self) -> Vec<String> {
        validate_addresses(&self.cc)
    }

    /// Valid blind carbon copy addresses.
    #[must_use]
    pub fn bcc(&self) -> Vec<String> {
        validate_addresses(&self.bcc)
    }

    /// Validated reply-to address, or an empty string.
    #[must_use]
    pub fn reply_to(&self) -> String {
        validate_address(&self.reply_to)
    }

    /// Subject passed through the text scrubber.
    #[must_use]
    pub fn subject(&self) -> String {
        self.text_scrubber().scrub(&self.subject)
    }

    /// Plain text body passed through the text scrubber.
    #[must_use]
    pub fn text(&self) -> String {
        self.text_scrubber().scrub(&self.text)
    }

    /// HTML body passed through the HTML scrubber.
    #[must_use]
    pub fn html(&self) -> String {
        self.html_scrubber().scrub(&self.html)
    }

    /// Attachments within the size limit, in insertion order.
    ///
    /// Oversized attachments are skipped. A negative limit returns everything.
    #[must_use]
    pub fn attachments(&self) -> Vec<&Attachment> {
        match usize::try_from(self.max_attachment_size) {
            Ok(limit) => self.attachments.iter().filter(|a| a.len() <= limit).collect(),
            Err(_) => self.attachments.iter().collect(),
        }
    }

    /// Tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Extra headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Attachment size limit in bytes. Negative means unlimited.
    #[must_use]
    pub const fn max_attachment_size(&self) -> i64 {
        self.max_attachment_size
    }

    /// Scrubber in effect for the subject and plain text body.
    #[must_use]
    pub fn text_scrubber(&self) -> &dyn Scrubber {
        self.text_scrubber
            .as_deref()
            .unwrap_or_else(|| default_text_scrubber())
    }

    /// Scrubber in effect for the HTML body.
    #[must_use]
    pub fn html_scrubber(&self) -> &dyn Scrubber {
        self.html_scrubber
            .as_deref()
            .unwrap_or_else(|| default_html_scrubber())
    }

    pub(crate) fn set_scrubbers(
        &mut self,
        text: Option<Arc<dyn Scrubber>>,
        html: Option<Arc<dyn Scrubber>>,
    ) {
        self.text_scrubber = text;
        self.html_scrubber = html;
    }
}

/// Read access to a message that may be absent.
///
/// A missing message reads as an empty one.
pub trait OptionalMessage {
    /// Validated sender address.
    fn from(&self) -> String;
    /// Valid recipient addresses.
    fn to(&self) -> Vec<String>;
    /// Valid carbon copy addresses.
    fn cc(&self) -> Vec<String>;
    /// Valid blind carbon copy addresses.
    fn bcc(&self) -> Vec<String>;
    /// Validated reply-to address.
    fn reply_to(&self) -> String;
    /// Scrubbed subject.
    fn subject(&self) -> String;
    /// Scrubbed plain text body.
    fn text(&self) -> String;
    /// Scrubbed HTML body.
    fn html(&self) -> String;
    /// Attachments within the size limit.
    fn attachments(&self) -> Vec<&Attachment>;
}

impl OptionalMessage for Option<&EmailMessage> {
    fn from(&self) -> String {
        self.map(EmailMessage::from).unwrap_or_default()
    }

    fn to(&self) -> Vec<String> {
        self.map(EmailMessage::to).unwrap_or_default()
    }

    fn cc(&self) -> Vec<String> {
        self.map(EmailMessage::cc).unwrap_or_default()
    }

    fn bcc(&self) -> Vec<String> {
        self.map(EmailMessage::bcc).unwrap_or_default()
    }

    fn reply_to(&self) -> String {
        self.map(EmailMessage::reply_to).unwrap_or_default()
    }

    fn subject(&self) -> String {
        self.map(EmailMessage::subject).unwrap_or_default()
    }

    fn text(&self) -> String {
        self.map(EmailMessage::text).unwrap_or_default()
    }

    fn html(&self) -> String {
        self.map(EmailMessage::html).unwrap_or_default()
    }

    fn attachments(&self) -> Vec<&Attachment> {
        self.map(EmailMessage::attachments).unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::needless_collect,
    clippy::similar_names
)]
mod tests {
    use super::*;
    use newman_scrubber::{NonScrubber, ScrubberFn};

    fn sample() -> EmailMessage {
        EmailMessage::full(
            "newman@usps.com",
            vec!["jerry@seinfeld.com".into(), "invalid".into()],
            "Subject",
            vec!["cc@example.com".into()],
            vec!["bcc@example.com".into(), "bad@".into()],
            "replyto@example.com",
            "This is the email content.",
            "<p>This is the email content.</p>",
            vec![Attachment::new("attachment1.txt", b"file content".to_vec())],
        )
    }

    #[test]
    fn test_getters() {
        let message = sample();
        assert_eq!(message.from(), "newman@usps.com");
        assert_eq!(message.to(), vec!["jerry@seinfeld.com"]);
        assert_eq!(message.cc(), vec!["cc@example.com"]);
        assert_eq!(message.bcc(), vec!["bcc@example.com"]);
        assert_eq!(message.reply_to(), "replyto@example.com");
        assert_eq!(message.subject(), "Subject");
        assert_eq!(message.text(), "This is the email content.");
        assert_eq!(message.html(), "<p>This is the email content.</p>");
        assert_eq!(message.attachments().len(), 1);
        assert_eq!(message.max_attachment_size(), DEFAULT_MAX_ATTACHMENT_SIZE);
    }

    #[test]
    fn test_invalid_singletons_read_empty() {
        let mut message = EmailMessage::default();
        message.set_from("not an address").set_reply_to("user@host");
        assert_eq!(message.from(), "");
        assert_eq!(message.reply_to(), "");
        assert!(message.to().is_empty());
    }

    #[test]
    fn test_new_routes_body() {
        let text = EmailMessage::new("a@b.com", ["c@d.com"], "Hi", "plain body");
        assert_eq!(text.text, "plain body");
        assert!(text.html.is_empty());

        let html = EmailMessage::new("a@b.com", ["c@d.com"], "Hi", "<p>rich body</p>");
        assert_eq!(html.html, "<p>rich body</p>");
        assert!(html.text.is_empty());
    }

    #[test]
    fn test_is_html() {
        assert!(is_html("<p>x</p>"));
        assert!(is_html("text <BR> more"));
        assert!(is_html("</div>"));
        assert!(!is_html("a < b and c > d"));
        assert!(!is_html("plain"));
        assert!(!is_html(""));
    }

    #[test]
    fn test_setters_chain() {
        let mut message = EmailMessage::default();
        message
            .set_from("a@b.com")
            .set_to(["one@x.com"])
            .add_to("two@x.com")
            .set_cc(["cc@x.com"])
            .add_cc("cc2@x.com")
            .set_bcc(Vec::<String>::new())
            .add_bcc("bcc@x.com")
            .set_subject("Subject")
            .set_text("Text")
            .set_html("<b>Html</b>")
            .add_attachment(Attachment::new("a.txt", b"a".to_vec()))
            .add_tag(Tag::new("campaign", "launch"))
            .add_header("X-Trace", "1");

        assert_eq!(message.to(), vec!["one@x.com", "two@x.com"]);
        assert_eq!(message.cc(), vec!["cc@x.com", "cc2@x.com"]);
        assert_eq!(message.bcc(), vec!["bcc@x.com"]);
        assert_eq!(message.attachments().len(), 1);
        assert_eq!(message.tags(), &[Tag::new("campaign", "launch")]);
        assert_eq!(message.headers().get("X-Trace").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_reads_do_not_mutate() {
        let mut message = EmailMessage::default();
        message
            .set_from("  a@b.com  ")
            .set_subject(r#"<Subject> & "attack""#)
            .set_to(["  c@d.com", "junk"]);

        let subject = message.subject();
        assert!(subject.starts_with("&lt;Subject&gt; &amp; "));
        assert_eq!(message.subject, r#"<Subject> & "attack""#);
        assert_eq!(message.from(), "a@b.com");
        assert_eq!(message.from, "  a@b.com  ");
        assert_eq!(message.to(), vec!["c@d.com"]);
        assert_eq!(message.to, vec!["  c@d.com", "junk"]);
    }

    #[test]
    fn test_default_scrubbers() {
        let mut message = EmailMessage::default();
        message
            .set_text("<b>hi</b>")
            .set_html("<script>alert(1)</script><b>ok</b>");

        assert_eq!(message.text(), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(message.html(), "<b>ok</b>");
    }

    #[test]
    fn test_non_scrubbers_return_raw() {
        let mut message = EmailMessage::default();
        message
            .set_subject(" <i>raw</i> ")
            .set_text("<b>hi</b>")
            .set_html("<script>alert(1)</script>")
            .set_text_scrubber(NonScrubber)
            .set_html_scrubber(NonScrubber);

        assert_eq!(message.subject(), " <i>raw</i> ");
        assert_eq!(message.text(), "<b>hi</b>");
        assert_eq!(message.html(), "<script>alert(1)</script>");

        message.clear_scrubbers();
        assert_eq!(message.text(), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn test_custom_scrubbers() {
        let mut message = EmailMessage::default();
        message
            .set_subject("quiet")
            .set_html("<p>page</p>")
            .set_text_scrubber(ScrubberFn::new(str::to_uppercase))
            .set_html_scrubber(ScrubberFn::new(|s: &str| s.replace("page", "PAGE")));

        assert_eq!(message.subject(), "QUIET");
        assert_eq!(message.html(), "<p>PAGE</p>");
    }

    #[test]
    fn test_filename_ignores_message_scrubber() {
        let mut message = EmailMessage::default();
        message
            .set_text_scrubber(NonScrubber)
            .add_attachment(Attachment::new("<x>.txt", b"1".to_vec()));

        assert_eq!(message.attachments()[0].filename(), "&lt;x&gt;.txt");
    }

    #[test]
    fn test_attachment_size_gate() {
        let limit = 10_usize;
        let mut message = EmailMessage::default();
        message
            .add_attachment(Attachment::new("exact.bin", vec![0u8; limit]))
            .add_attachment(Attachment::new("over.bin", vec![0u8; limit + 1]))
            .add_attachment(Attachment::new("small.bin", vec![0u8; 1]))
            .set_max_attachment_size(10);

        let names: Vec<String> = message.attachments().iter().map(|a| a.filename()).collect();
        assert_eq!(names, vec!["exact.bin", "small.bin"]);

        message.set_max_attachment_size(-1);
        let names: Vec<String> = message.attachments().iter().map(|a| a.filename()).collect();
        assert_eq!(names, vec!["exact.bin", "over.bin", "small.bin"]);

        message.set_max_attachment_size(0);
        assert!(message.attachments().is_empty());
    }

    #[test]
    fn test_absent_message_reads_empty() {
        let absent: Option<&EmailMessage> = None;
        assert_eq!(absent.from(), "");
        assert!(absent.to().is_empty());
        assert!(absent.cc().is_empty());
        assert!(absent.bcc().is_empty());
        assert_eq!(absent.reply_to(), "");
        assert_eq!(absent.subject(), "");
        assert_eq!(absent.text(), "");
        assert_eq!(absent.html(), "");
        assert!(absent.attachments().is_empty());

        let message = sample();
        let present = Some(&message);
        assert_eq!(OptionalMessage::from(&present), "newman@usps.com");
        assert_eq!(OptionalMessage::to(&present), vec!["jerry@seinfeld.com"]);
    }

    #[test]
    fn test_json_encode() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": "newman@usps.com",
                "to": ["jerry@seinfeld.com", "invalid"],
                "cc": ["cc@example.com"],
                "bcc": ["bcc@example.com", "bad@"],
                "replyTo": "replyto@example.com",
                "subject": "Subject",
                "text": "This is the email content.",
                "html": "<p>This is the email content.</p>",
                "attachments": [{"filename": "attachment1.txt", "content": "ZmlsZSBjb250ZW50"}]
            })
        );
    }

    #[test]
    fn test_json_encode_omits_empty() {
        let message = EmailMessage::new("a@b.com", ["c@d.com"], "Hi", "Body");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"from": "a@b.com", "to": ["c@d.com"], "subject": "Hi", "text": "Body"})
        );
    }

    #[test]
    fn test_json_decode() {
        let json = r#"{
            "from": "newman@usps.com",
            "to": ["jerry@seinfeld.com"],
            "cc": ["cc@example.com"],
            "bcc": ["bcc@example.com"],
            "replyTo": "replyto@example.com",
            "subject": "Subject",
            "text": "This is the email content.",
            "html": "<p>This is the email content.</p>",
            "attachments": [{"filename": "attachment1.txt", "content": "ZmlsZSBjb250ZW50"}]
        }"#;

        let message: EmailMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.from(), "newman@usps.com");
        assert_eq!(message.to(), vec!["jerry@seinfeld.com"]);
        assert_eq!(message.cc(), vec!["cc@example.com"]);
        assert_eq!(message.bcc(), vec!["bcc@example.com"]);
        assert_eq!(message.reply_to(), "replyto@example.com");
        assert_eq!(message.html(), "<p>This is the email content.</p>");
        assert_eq!(message.attachments()[0].raw_content(), b"file content");
        assert_eq!(message.max_attachment_size(), DEFAULT_MAX_ATTACHMENT_SIZE);
    }

    #[test]
    fn test_json_decode_null_fields() {
        let json = r#"{
            "from": "newman@usps.com",
            "to": null,
            "cc": null,
            "bcc": null,
            "replyTo": null,
            "subject": null,
            "text": "Body",
            "html": null,
            "attachments": null
        }"#;

        let message: EmailMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.from(), "newman@usps.com");
        assert!(message.to.is_empty());
        assert!(message.cc.is_empty());
        assert!(message.bcc.is_empty());
        assert_eq!(message.reply_to, "");
        assert_eq!(message.subject, "");
        assert_eq!(message.text(), "Body");
        assert_eq!(message.html, "");
        assert!(message.attachments.is_empty());

        let json = r#"{"to": ["jerry@seinfeld.com"], "attachments": [{"filename": null, "content": null}]}"#;
        let message: EmailMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.to(), vec!["jerry@seinfeld.com"]);
        assert_eq!(message.attachments[0].raw_filename(), "");
        assert!(message.attachments[0].raw_content().is_empty());
    }

    #[test]
    fn test_json_decode_edge_cases() {
        let empty: EmailMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.from(), "");
        assert_eq!(empty.subject(), "");
        assert!(empty.attachments().is_empty());
        assert_eq!(empty.max_attachment_size(), DEFAULT_MAX_ATTACHMENT_SIZE);

        assert!(serde_json::from_str::<EmailMessage>(r#"{"to": "jerry@seinfeld.com"}"#).is_err());
        assert!(
            serde_json::from_str::<EmailMessage>(
                r#"{"attachments": [{"filename": "a.txt", "content": "invalid_base64"}]}"#
            )
            .is_err()
        );
    }
}
