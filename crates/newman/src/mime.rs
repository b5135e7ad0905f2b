//! MIME encoding of outgoing messages.

use newman_mime::{Boundary, ContentType, MimeWriter, TransferEncoding};

use crate::message::EmailMessage;

/// Renders `message` as a multipart MIME document.
///
/// All values are read through the message accessors, so addresses are
/// validated and bodies scrubbed. Bcc recipients are never written. The text
/// and HTML bodies go into a `multipart/alternative` section; when the
/// message has attachments within its size limit, that section is wrapped in
/// `multipart/mixed` with one base64 part per attachment.
///
/// ```
/// use newman::{EmailMessage, build_mime_message};
///
/// let message = EmailMessage::new("a@b.com", ["c@d.com"], "Hi", "Body");
/// let bytes = build_mime_message(&message);
/// let text = String::from_utf8(bytes).unwrap();
///
/// assert!(text.starts_with("From: a@b.com\r\nTo: c@d.com\r\nSubject: Hi\r\n"));
/// assert!(text.contains("multipart/alternative"));
/// ```
#[must_use]
pub fn build_mime_message(message: &EmailMessage) -> Vec<u8> {
    let text = message.text();
    let html = message.html();
    let attachments = message.attachments();
    let encoded: Vec<String> = attachments
        .iter()
        .map(|a| a.base64_string_content())
        .collect();

    let mut writer = MimeWriter::new();
    writer.header("From", message.from());

    let to = message.to();
    if !to.is_empty() {
        writer.header("To", to.join(","));
    }

    let cc = message.cc();
    if !cc.is_empty() {
        writer.header("Cc", cc.join(","));
    }

    let reply_to = message.reply_to();
    if !reply_to.is_empty() {
        writer.header("Reply-To", reply_to);
    }

    writer.header("Subject", message.subject());
    writer.header("MIME-Version", "1.0");

    let alt = Boundary::generate("alt", &[text.as_bytes(), html.as_bytes()]);

    let mixed = if encoded.is_empty() {
        None
    } else {
        let mut contents: Vec<&[u8]> = vec![text.as_bytes(), html.as_bytes(), alt.as_str().as_bytes()];
        contents.extend(encoded.iter().map(String::as_bytes));
        let mixed = Boundary::generate("mixed", &contents);

        writer.header("Content-Type", ContentType::multipart_mixed(mixed.as_str()));
        writer.blank_line();
        writer.open_part(&mixed);
        Some(mixed)
    };

    writer.header("Content-Type", ContentType::multipart_alternative(alt.as_str()));
    writer.blank_line();

    if !text.is_empty() {
        writer.open_part(&alt);
        writer.header("Content-Type", ContentType::text_plain());
        writer.blank_line();
        writer.body(text.as_bytes());
    }

    if !html.is_empty() {
        writer.open_part(&alt);
        writer.header("Content-Type", ContentType::text_html());
        writer.blank_line();
        writer.body(html.as_bytes());
    }

    writer.close_section(&alt);

    if let Some(mixed) = mixed {
        for (attachment, b64) in attachments.iter().zip(&encoded) {
            writer.open_part(&mixed);
            writer.header("Content-Type", attachment.content_type());
            writer.header("Content-Transfer-Encoding", TransferEncoding::Base64);
            writer.header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", attachment.filename()),
            );
            writer.blank_line();
            writer.body(b64.as_bytes());
        }
        writer.close_section(&mixed);
    }

    writer.finish()
}
