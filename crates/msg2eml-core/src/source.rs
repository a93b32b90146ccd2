//! The source message object model.
//!
//! This is the input boundary of the converter: the host parser reads the
//! proprietary compound-document format and hands over one of these per
//! message. Every field that the source format may omit is an explicit
//! `Option`, so absence is always distinguishable from an empty value.

use chrono::{DateTime, FixedOffset};

/// Recipient class code: primary (`To`) addressing.
pub const CLASS_TO: u32 = 1;
/// Recipient class code: carbon copy (`Cc`).
pub const CLASS_CC: u32 = 2;
/// Recipient class code: blind carbon copy. Dropped from the output.
pub const CLASS_BCC: u32 = 3;

/// A structured sender: name and address, either of which may be missing.
#[derive(Debug, Clone, Default)]
pub struct StructuredSender {
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub address: Option<String>,
}

/// One recipient record.
#[derive(Debug, Clone, Default)]
pub struct SourceRecipient {
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub address: Option<String>,
    /// Recipient class code (see [`CLASS_TO`], [`CLASS_CC`], [`CLASS_BCC`]).
    pub class: u32,
}

/// A structured date recovered by the host parser.
///
/// The source format may instead (or additionally) carry a preformatted
/// date string; see [`SourceMessage::date_string`].
#[derive(Debug, Clone)]
pub enum ParsedDate {
    /// A structured timestamp.
    Timestamp(DateTime<FixedOffset>),
    /// A broken-down time tuple: year, month, day, hour, minute, second,
    /// possibly followed by further components the converter ignores.
    Components(Vec<i64>),
}

/// Payload of one attachment.
#[derive(Debug, Clone)]
pub enum AttachmentData {
    /// Raw bytes of a file attachment.
    Bytes(Vec<u8>),
    /// A nested message embedded in place of file data.
    Message(Box<SourceMessage>),
}

/// One attachment record.
#[derive(Debug, Clone, Default)]
pub struct SourceAttachment {
    /// Long (display) filename.
    pub long_filename: Option<String>,
    /// Short (8.3-style) filename.
    pub short_filename: Option<String>,
    /// Payload; `None` when the source document carried no data.
    pub data: Option<AttachmentData>,
}

/// One parsed source message.
#[derive(Debug, Clone, Default)]
pub struct SourceMessage {
    /// Subject line.
    pub subject: Option<String>,
    /// The "represented as" sender (sent on behalf of).
    pub represented_sender: Option<StructuredSender>,
    /// The actual sender.
    pub sender: Option<StructuredSender>,
    /// A single unparsed sender display string.
    pub sender_display: Option<String>,
    /// All recipients, in source order.
    pub recipients: Vec<SourceRecipient>,
    /// Plain-text body.
    pub body: Option<String>,
    /// HTML body.
    pub html_body: Option<String>,
    /// Structured message date, when the host parser recovered one.
    pub parsed_date: Option<ParsedDate>,
    /// Preformatted date string, used verbatim when no structured date
    /// yields a header.
    pub date_string: Option<String>,
    /// Message identifier.
    pub message_id: Option<String>,
    /// Attachments, in source order.
    pub attachments: Vec<SourceAttachment>,
}
