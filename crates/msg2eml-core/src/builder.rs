//! Recursive MIME tree building.
//!
//! One builder invocation turns one source message into a complete output
//! message. Attachments that are themselves messages are built depth-first
//! by recursing, then embedded as `message/rfc822` leaves; the hierarchy is
//! never flattened. The builder itself never fails: anomalies degrade in
//! place and are reported through the log sink.

use crate::log::{LogSink, indent};
use crate::resolve::resolve_headers;
use crate::sanitize::{guess_mime_type, sanitize_filename};
use crate::source::{AttachmentData, SourceAttachment, SourceMessage};
use msg2eml_mime::{ContentType, MimeMessage, Part};

/// Maximum nested-message depth the builder will descend into.
///
/// The source format is strictly descending so cycles are impossible, but a
/// corrupt or adversarial document could still nest absurdly deep; beyond
/// this the nested message is skipped with a structural warning.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Default filename for an embedded message without a subject.
const NESTED_MESSAGE_NAME: &str = "NestedMessage.eml";

/// Builds the output message for one source message.
///
/// `depth` is the nesting level, 0 for the top-level message. Recursion
/// happens once per nested-message attachment, pre-order, before sibling
/// attachments are processed.
pub fn build_message(src: &SourceMessage, depth: usize, sink: &mut dyn LogSink) -> MimeMessage {
    let pad = indent(depth);
    let subject = src.subject.as_deref().unwrap_or("N/A");
    sink.line(&format!("{pad}Building EML for message (subject: '{subject}')"));
    tracing::debug!(depth, subject, "building message");

    let headers = resolve_headers(src, depth, sink);
    let body = build_body(src);

    let mut attachments = Vec::new();
    for (index, attachment) in src.attachments.iter().enumerate() {
        if let Some(part) = build_attachment(attachment, index, depth, sink) {
            attachments.push(part);
        }
    }

    // Structural switch: without file parts the body leaf itself is the
    // root and its content type becomes the message's content type; with
    // file parts everything goes under multipart/mixed, body first.
    let root = if attachments.is_empty() {
        body
    } else {
        let mut children = Vec::with_capacity(attachments.len() + 1);
        children.push(body);
        children.append(&mut attachments);
        Part::mixed(children)
    };

    MimeMessage::new(headers, root)
}

/// Exactly one body part: plain and HTML together become an alternative,
/// a single one is used directly, neither yields an empty plain leaf.
fn build_body(src: &SourceMessage) -> Part {
    match (src.body.as_deref(), src.html_body.as_deref()) {
        (Some(plain), Some(html)) => {
            Part::alternative(vec![Part::text(plain), Part::html(html)])
        }
        (Some(plain), None) => Part::text(plain),
        (None, Some(html)) => Part::html(html),
        (None, None) => Part::text(""),
    }
}

/// Builds one attachment part, or `None` when the attachment is skipped.
fn build_attachment(
    attachment: &SourceAttachment,
    index: usize,
    depth: usize,
    sink: &mut dyn LogSink,
) -> Option<Part> {
    let pad = indent(depth + 1);
    let default_name = format!("attachment_{}", index + 1);
    let raw_name = attachment
        .long_filename
        .as_deref()
        .or(attachment.short_filename.as_deref())
        .unwrap_or(&default_name);
    let display_name = sanitize_filename(raw_name, &default_name);

    match attachment.data.as_ref() {
        Some(AttachmentData::Message(nested)) => {
            if depth >= MAX_NESTING_DEPTH {
                tracing::warn!(depth, "nested message exceeds depth limit, skipping");
                sink.line(&format!(
                    "{pad}WARNING: nested message '{display_name}' exceeds depth limit, skipping"
                ));
                return None;
            }
            sink.line(&format!(
                "{pad}-> Nested message: '{display_name}'. Recursively building EML..."
            ));
            let built = build_message(nested, depth + 1, sink);
            let stem = nested
                .subject
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("NestedMessage");
            let filename = sanitize_filename(&format!("{stem}.eml"), NESTED_MESSAGE_NAME);
            sink.line(&format!(
                "{pad}  Done building nested EML part: {filename}"
            ));
            Some(Part::message(built).with_attachment_disposition(&filename))
        }
        Some(AttachmentData::Bytes(data)) if !data.is_empty() => {
            sink.line(&format!("{pad}-> Regular attachment: '{display_name}'"));
            let type_source = attachment
                .long_filename
                .as_deref()
                .or(attachment.short_filename.as_deref())
                .unwrap_or("");
            let (main_type, sub_type) = guess_mime_type(type_source);

            // Text attachments that decode as UTF-8 stay readable; anything
            // else is carried as base64 binary
            let part = if main_type == "text"
                && let Ok(text) = std::str::from_utf8(data)
            {
                Part::text_with_subtype(sub_type, text)
            } else {
                let content_type =
                    ContentType::new(main_type, sub_type).with_parameter("name", &display_name);
                Part::binary(content_type, data.clone())
            };
            Some(part.with_attachment_disposition(&display_name))
        }
        // No payload, or an empty byte payload, carries nothing worth a part
        Some(AttachmentData::Bytes(_)) | None => {
            tracing::debug!(index, "attachment has no payload, skipping");
            None
        }
    }
}
