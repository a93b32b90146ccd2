//! MIME encoding utilities.
//!
//! Base64, Quoted-Printable and RFC 2047 header encoding. This crate only
//! generates messages, so no decoders live here.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt::Write as _;

/// Maximum line length for encoded body content.
const MAX_LINE_LENGTH: usize = 76;

/// Encodes data as a single Base64 line.
#[must_use]
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Encodes data as Base64 wrapped at 76 columns with CRLF line breaks,
/// suitable for a message body.
#[must_use]
pub fn encode_base64_wrapped(data: &[u8]) -> String {
    let encoded = STANDARD.encode(data);
    let mut result = String::with_capacity(encoded.len() + encoded.len() / MAX_LINE_LENGTH * 2 + 2);
    let bytes = encoded.as_bytes();

    for chunk in bytes.chunks(MAX_LINE_LENGTH) {
        // Base64 output is always ASCII
        result.push_str(std::str::from_utf8(chunk).unwrap_or_default());
        result.push_str("\r\n");
    }

    result
}

/// Encodes text using Quoted-Printable encoding (RFC 2045).
///
/// Encodes bytes that are not printable ASCII or would interfere with
/// transmission, inserting soft line breaks at 76 columns.
#[must_use]
pub fn encode_quoted_printable(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut result = String::new();
    let mut line_length = 0;

    for (index, byte) in bytes.iter().enumerate() {
        if line_length >= MAX_LINE_LENGTH - 3 {
            result.push_str("=\r\n");
            line_length = 0;
        }

        match byte {
            // Printable ASCII except '='
            b'!'..=b'<' | b'>'..=b'~' => {
                result.push(*byte as char);
                line_length += 1;
            }
            // Space must be encoded when it would land at a line end,
            // either against the 76-column limit or because the next byte
            // starts a new line of the source text (RFC 2045 rule 3)
            b' ' => {
                let before_break =
                    matches!(bytes.get(index + 1), None | Some(b'\n') | Some(b'\r'));
                if before_break || line_length >= MAX_LINE_LENGTH - 1 {
                    result.push_str("=20");
                    line_length += 3;
                } else {
                    result.push(' ');
                    line_length += 1;
                }
            }
            // Preserve line structure of the original text
            b'\n' => {
                result.push_str("\r\n");
                line_length = 0;
            }
            b'\r' => {}
            _ => {
                result.push('=');
                let _ = write!(result, "{byte:02X}");
                line_length += 3;
            }
        }
    }

    result
}

/// Encodes a header value using RFC 2047 B-encoding when needed.
///
/// Format: `=?charset?B?encoded-text?=`. Printable ASCII passes through
/// unchanged unless it could be mistaken for an encoded word itself.
#[must_use]
pub fn encode_rfc2047(text: &str, charset: &str) -> String {
    let printable_ascii = text
        .chars()
        .all(|c| c.is_ascii() && !c.is_ascii_control());
    if printable_ascii && !text.contains("=?") {
        return text.to_string();
    }

    let encoded = encode_base64(text.as_bytes());
    format!("=?{charset}?B?{encoded}?=")
}
