//! The output message tree.
//!
//! A message is a set of top-level headers plus a root [`Part`]. A part is
//! either a leaf (text or binary content, or a whole embedded message) or a
//! multipart container. `Content-Type` lives on the part as a structured
//! value and is only turned into a header at render time, so a message with
//! no attachments naturally carries its sole body part's type on the root
//! without any header copying.

use crate::content_type::ContentType;
use crate::header::Headers;

/// Content of a MIME part.
#[derive(Debug, Clone)]
pub enum PartBody {
    /// UTF-8 text content, encoded quoted-printable on the wire.
    Text(String),
    /// Raw binary content, encoded Base64 on the wire.
    Binary(Vec<u8>),
    /// Ordered child parts of a multipart container.
    Multipart(Vec<Part>),
    /// A complete embedded message (`message/rfc822`), rendered verbatim.
    Message(Box<MimeMessage>),
}

/// One node of the MIME tree.
#[derive(Debug, Clone)]
pub struct Part {
    /// Structured content type of this part.
    pub content_type: ContentType,
    /// Additional part headers (e.g. `Content-Disposition`).
    pub headers: Headers,
    /// Part content.
    pub body: PartBody,
}

impl Part {
    /// Creates a `text/plain` leaf.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::text_plain(),
            headers: Headers::new(),
            body: PartBody::Text(text.into()),
        }
    }

    /// Creates a `text/html` leaf.
    #[must_use]
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::text_html(),
            headers: Headers::new(),
            body: PartBody::Text(text.into()),
        }
    }

    /// Creates a `text/<subtype>` leaf.
    #[must_use]
    pub fn text_with_subtype(sub_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::text(sub_type),
            headers: Headers::new(),
            body: PartBody::Text(text.into()),
        }
    }

    /// Creates a binary leaf with the given content type.
    #[must_use]
    pub fn binary(content_type: ContentType, data: Vec<u8>) -> Self {
        Self {
            content_type,
            headers: Headers::new(),
            body: PartBody::Binary(data),
        }
    }

    /// Creates a `multipart/alternative` container.
    #[must_use]
    pub fn alternative(parts: Vec<Self>) -> Self {
        Self {
            content_type: ContentType::multipart_alternative(),
            headers: Headers::new(),
            body: PartBody::Multipart(parts),
        }
    }

    /// Creates a `multipart/mixed` container.
    #[must_use]
    pub fn mixed(parts: Vec<Self>) -> Self {
        Self {
            content_type: ContentType::multipart_mixed(),
            headers: Headers::new(),
            body: PartBody::Multipart(parts),
        }
    }

    /// Creates a `message/rfc822` leaf embedding a complete message.
    #[must_use]
    pub fn message(message: MimeMessage) -> Self {
        Self {
            content_type: ContentType::message_rfc822(),
            headers: Headers::new(),
            body: PartBody::Message(Box::new(message)),
        }
    }

    /// Marks this part as an attachment with the given filename.
    #[must_use]
    pub fn with_attachment_disposition(mut self, filename: &str) -> Self {
        self.headers.set(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        );
        self
    }

    /// Checks if this part is a multipart container.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        matches!(self.body, PartBody::Multipart(_))
    }

    /// Child parts of a multipart container, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.body {
            PartBody::Multipart(parts) => parts,
            _ => &[],
        }
    }
}

/// A complete message: top-level headers plus content tree.
#[derive(Debug, Clone)]
pub struct MimeMessage {
    /// Addressing and metadata headers.
    pub headers: Headers,
    /// The content tree.
    pub root: Part,
}

impl MimeMessage {
    /// Creates a message, guaranteeing exactly one `MIME-Version` header.
    ///
    /// Content headers are always derived from the root part at render
    /// time, so any `Content-*` entries in the supplied headers are
    /// stripped to avoid conflicting declarations.
    #[must_use]
    pub fn new(mut headers: Headers, root: Part) -> Self {
        headers.remove_with_prefix("content-");
        if !headers.contains("MIME-Version") {
            headers.add("MIME-Version", "1.0");
        }
        Self { headers, root }
    }

    /// Structured content type of the message, taken from the root part.
    #[must_use]
    pub fn content_type(&self) -> &ContentType {
        &self.root.content_type
    }
}
