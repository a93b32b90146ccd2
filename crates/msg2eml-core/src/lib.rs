//! # msg2eml-core
//!
//! Conversion core turning parsed proprietary compound-document messages
//! into standards-compliant EML bytes, preserving the nested-message
//! hierarchy.
//!
//! Parsing the proprietary byte format is not this crate's job: the host
//! supplies a [`SourceParser`] that produces a [`SourceMessage`], and the
//! core resolves its headers, builds the MIME tree (recursing into nested
//! messages), and renders the result.
//!
//! ```
//! use msg2eml_core::{Conversion, MsgInput, SourceMessage, SourceParser, convert};
//!
//! struct FixtureParser;
//!
//! impl SourceParser for FixtureParser {
//!     fn parse(&self, _input: MsgInput<'_>) -> anyhow::Result<SourceMessage> {
//!         Ok(SourceMessage {
//!             subject: Some("Hello".into()),
//!             body: Some("Hello, World!".into()),
//!             ..Default::default()
//!         })
//!     }
//! }
//!
//! let mut log: Vec<String> = Vec::new();
//! let result = convert(
//!     &FixtureParser,
//!     MsgInput::Bytes(b"raw msg bytes"),
//!     "hello",
//!     &mut log,
//! );
//! let Conversion { eml, filename } = result.unwrap();
//! assert_eq!(filename, "hello.eml");
//! assert!(!eml.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod builder;
mod error;
mod log;
mod resolve;
mod sanitize;
mod source;

use std::path::Path;

pub use address::{Mailbox, parse_mailbox};
pub use builder::{MAX_NESTING_DEPTH, build_message};
pub use error::{Error, Result};
pub use log::{FnSink, LogSink, NullSink, TracingSink};
pub use resolve::resolve_headers;
pub use sanitize::{DEFAULT_ATTACHMENT_NAME, guess_mime_type, sanitize_filename};
pub use source::{
    AttachmentData, CLASS_BCC, CLASS_CC, CLASS_TO, ParsedDate, SourceAttachment, SourceMessage,
    SourceRecipient, StructuredSender,
};

/// Raw conversion input, handed through to the host parser untouched.
#[derive(Debug, Clone, Copy)]
pub enum MsgInput<'a> {
    /// The raw bytes of a compound document.
    Bytes(&'a [u8]),
    /// A filesystem path to a compound document.
    Path(&'a Path),
}

/// The external-parser seam: reads the proprietary compound-document
/// format into a [`SourceMessage`].
pub trait SourceParser {
    /// Parses one compound document.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is corrupt or not in the expected
    /// format; this aborts the whole conversion.
    fn parse(&self, input: MsgInput<'_>) -> anyhow::Result<SourceMessage>;
}

/// A successful conversion: the rendered EML bytes and a suggested
/// download filename.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The complete internet-message serialization.
    pub eml: Vec<u8>,
    /// Suggested filename, `sanitize(stem) + ".eml"`.
    pub filename: String,
}

/// Converts one compound document to EML, reporting failure as an error.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the host parser rejects the input and
/// [`Error::Render`] when the built message cannot be serialized. Anything
/// less than that degrades in place and is only logged.
pub fn try_convert(
    parser: &dyn SourceParser,
    input: MsgInput<'_>,
    stem: &str,
    sink: &mut dyn LogSink,
) -> Result<Conversion> {
    sink.line(&format!("Starting conversion of main MSG: '{stem}'"));

    let source = parser.parse(input).map_err(Error::Parse)?;
    let message = build_message(&source, 0, sink);
    let eml = msg2eml_mime::render(&message)?;

    let filename = format!("{}.eml", sanitize_filename(stem, DEFAULT_ATTACHMENT_NAME));
    sink.line(&format!(
        "Successfully converted MSG to EML bytes. Suggested filename: {filename}"
    ));
    Ok(Conversion { eml, filename })
}

/// Converts one compound document to EML.
///
/// Returns `None` on failure; the reason is delivered through the log sink
/// and `tracing`, never as a panic or a silent empty success.
pub fn convert(
    parser: &dyn SourceParser,
    input: MsgInput<'_>,
    stem: &str,
    sink: &mut dyn LogSink,
) -> Option<Conversion> {
    match try_convert(parser, input, stem, sink) {
        Ok(conversion) => Some(conversion),
        Err(error @ Error::Parse(_)) => {
            tracing::error!(%error, "conversion failed");
            sink.line(&format!("Error reading main MSG file: {error}"));
            None
        }
        Err(error @ Error::Render(_)) => {
            tracing::error!(%error, "conversion failed");
            sink.line(&format!("Error serializing final EML object to bytes: {error}"));
            None
        }
    }
}
