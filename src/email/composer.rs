/// Raw message composer using lettre crate
///
/// Builds the multipart/mixed message submitted through the raw-send path:
/// one body part (HTML or plain text, UTF-8) and one binary attachment part.
use crate::error::CloudpostError;
use crate::models::{MailAttachment, MailBody};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, Message, MultiPart, SinglePart};

fn to_mailbox(addr: &str) -> Result<Mailbox, CloudpostError> {
    addr.parse::<Mailbox>()
        .map_err(|e| CloudpostError::Compose(format!("Invalid email address '{}': {}", addr, e)))
}

fn parse_content_type(value: &str) -> Result<ContentType, CloudpostError> {
    ContentType::parse(value)
        .map_err(|e| CloudpostError::Compose(format!("Invalid content type '{}': {}", value, e)))
}

/// Assembles a complete RFC 5322 message and serializes it to wire bytes
///
/// The result has exactly two parts: the declared body with its charset, and
/// the attachment bytes tagged with the supplied filename and the content
/// type fixed by its [`crate::models::FileType`].
pub fn compose_raw_message(
    sender: &str,
    recipient: &str,
    subject: &str,
    body: &MailBody,
    attachment: &MailAttachment,
) -> Result<Vec<u8>, CloudpostError> {
    let body_part = SinglePart::builder()
        .header(parse_content_type(body.content_type())?)
        .body(body.as_str().to_string());

    let attachment_part = Attachment::new(attachment.filename.clone()).body(
        attachment.data.clone(),
        parse_content_type(attachment.file_type.content_type())?,
    );

    let message = Message::builder()
        .from(to_mailbox(sender)?)
        .to(to_mailbox(recipient)?)
        .subject(subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(body_part)
                .singlepart(attachment_part),
        )
        .map_err(|e| CloudpostError::Compose(format!("Failed to build multipart message: {}", e)))?;

    Ok(message.formatted())
}
