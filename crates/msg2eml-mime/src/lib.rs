//! # msg2eml-mime
//!
//! MIME message generation for the msg2eml converter.
//!
//! This crate builds and serializes standards-compliant internet messages.
//! It never parses MIME; the converter only produces it.
//!
//! ## Building a message
//!
//! ```
//! use msg2eml_mime::{Headers, MimeMessage, Part, render};
//!
//! let mut headers = Headers::new();
//! headers.add("From", "sender@example.com");
//! headers.add("Subject", "Test");
//!
//! let root = Part::mixed(vec![
//!     Part::text("Please find the attachment."),
//!     Part::binary(msg2eml_mime::ContentType::octet_stream(), vec![0x00, 0x01])
//!         .with_attachment_disposition("data.bin"),
//! ]);
//!
//! let message = MimeMessage::new(headers, root);
//! let bytes = render(&message)?;
//! assert!(bytes.starts_with(b"From: sender@example.com\r\n"));
//! # Ok::<(), msg2eml_mime::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod content_type;
mod error;
mod header;
mod part;
mod render;

pub mod encoding;

pub use content_type::ContentType;
pub use error::{Error, Result};
pub use header::Headers;
pub use part::{MimeMessage, Part, PartBody};
pub use render::render;
