//! Wire rendering of a [`MimeMessage`] to RFC 5322 bytes.

use crate::encoding::{encode_base64_wrapped, encode_quoted_printable};
use crate::error::{Error, Result};
use crate::header::Headers;
use crate::part::{MimeMessage, Part, PartBody};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static BOUNDARY_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generates a boundary value unique within this process.
///
/// The leading `=_` cannot appear in quoted-printable output, so a boundary
/// can never collide with encoded body content.
fn next_boundary() -> String {
    let seq = BOUNDARY_SEQ.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let pid = std::process::id();
    format!("=_{pid:x}_{nanos:08x}_{seq:04}")
}

/// Renders a complete message to bytes.
///
/// # Errors
///
/// Returns an error if a header name or value is not representable on the
/// wire (embedded CR/LF or a colon in a name).
pub fn render(message: &MimeMessage) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_headers(&mut out, &message.headers)?;
    write_part(&mut out, &message.root)?;
    Ok(out)
}

fn write_headers(out: &mut Vec<u8>, headers: &Headers) -> Result<()> {
    for (name, value) in headers.iter() {
        write_header(out, name, value)?;
    }
    Ok(())
}

fn write_header(out: &mut Vec<u8>, name: &str, value: &str) -> Result<()> {
    if name.is_empty() || name.contains(':') || name.contains(|c: char| c.is_ascii_control()) {
        return Err(Error::InvalidHeaderName(name.to_string()));
    }
    if value.contains('\r') || value.contains('\n') {
        return Err(Error::InvalidHeaderValue(name.to_string()));
    }
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(b": ");
    out.extend_from_slice(value.as_bytes());
    out.extend_from_slice(b"\r\n");
    Ok(())
}

/// Writes the content headers and body of one part, containers recursively.
fn write_part(out: &mut Vec<u8>, part: &Part) -> Result<()> {
    match &part.body {
        PartBody::Multipart(children) => {
            let boundary = next_boundary();
            let content_type = part
                .content_type
                .clone()
                .with_parameter("boundary", &boundary);
            write_header(out, "Content-Type", &content_type.to_string())?;
            write_headers(out, &part.headers)?;
            out.extend_from_slice(b"\r\n");

            for child in children {
                out.extend_from_slice(b"--");
                out.extend_from_slice(boundary.as_bytes());
                out.extend_from_slice(b"\r\n");
                write_part(out, child)?;
                out.extend_from_slice(b"\r\n");
            }
            out.extend_from_slice(b"--");
            out.extend_from_slice(boundary.as_bytes());
            out.extend_from_slice(b"--\r\n");
        }
        PartBody::Text(text) => {
            write_header(out, "Content-Type", &part.content_type.to_string())?;
            write_header(out, "Content-Transfer-Encoding", "quoted-printable")?;
            write_headers(out, &part.headers)?;
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(encode_quoted_printable(text).as_bytes());
        }
        PartBody::Binary(data) => {
            write_header(out, "Content-Type", &part.content_type.to_string())?;
            write_header(out, "Content-Transfer-Encoding", "base64")?;
            write_headers(out, &part.headers)?;
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(encode_base64_wrapped(data).as_bytes());
        }
        PartBody::Message(inner) => {
            // RFC 2046: message/rfc822 content must not be base64 encoded
            write_header(out, "Content-Type", &part.content_type.to_string())?;
            write_headers(out, &part.headers)?;
            out.extend_from_slice(b"\r\n");
            let rendered = render(inner)?;
            out.extend_from_slice(&rendered);
        }
    }
    Ok(())
}
