//! Header resolution.
//!
//! Source messages routinely carry incomplete or ambiguous addressing
//! fields. Each field is resolved through an ordered chain of strategies;
//! the first one that yields a usable value wins, and every failed attempt
//! is reported through the log sink rather than aborting the conversion.

use crate::address::{Mailbox, parse_mailbox};
use crate::log::{LogSink, indent};
use crate::source::{CLASS_CC, CLASS_TO, ParsedDate, SourceMessage, SourceRecipient};
use chrono::{Local, TimeZone};
use msg2eml_mime::Headers;

/// Resolves all addressing and metadata headers for one source message.
///
/// Headers that cannot be resolved are omitted, never invented.
pub fn resolve_headers(src: &SourceMessage, depth: usize, sink: &mut dyn LogSink) -> Headers {
    let mut headers = Headers::new();
    let pad = indent(depth);

    if let Some(subject) = src.subject.as_deref() {
        headers.add("Subject", Headers::encode_value(subject));
    }

    match resolve_sender(src) {
        Some(mailbox) if mailbox.has_valid_address() => {
            headers.add("From", mailbox.format());
        }
        Some(mailbox) => {
            tracing::warn!("sender resolved to a display name without address");
            sink.line(&format!(
                "{pad}  WARNING: no address found for sender '{}'",
                mailbox.name.as_deref().unwrap_or_default()
            ));
            headers.add("From", mailbox.format());
        }
        None => {}
    }

    let (to, cc) = classify_recipients(&src.recipients);
    if !to.is_empty() {
        headers.add("To", to.join(", "));
    }
    if !cc.is_empty() {
        headers.add("Cc", cc.join(", "));
    }

    if let Some(date) = resolve_date(src, depth, sink) {
        headers.add("Date", date);
    }

    if let Some(message_id) = src.message_id.as_deref() {
        headers.add("Message-ID", message_id);
    }

    headers
}

fn valid_address(address: &str) -> bool {
    !address.is_empty() && address.contains('@')
}

/// Sender strategy chain: represented sender, then actual sender, then the
/// unparsed display string, then a recipient whose name matches a recovered
/// display name. A name without any address still yields a mailbox so the
/// caller can emit a name-only `From` with a warning.
fn resolve_sender(src: &SourceMessage) -> Option<Mailbox> {
    let mut fallback_name: Option<String> = None;

    for candidate in [src.represented_sender.as_ref(), src.sender.as_ref()] {
        let Some(sender) = candidate else { continue };
        let name = sender.name.clone().filter(|n| !n.trim().is_empty());
        if let Some(address) = sender.address.as_deref()
            && valid_address(address)
        {
            return Some(Mailbox::new(name, address));
        }
        if fallback_name.is_none() {
            fallback_name = name;
        }
    }

    if let Some(display) = src.sender_display.as_deref()
        && let Some(mailbox) = parse_mailbox(display)
    {
        if mailbox.has_valid_address() {
            return Some(mailbox);
        }
        if fallback_name.is_none() {
            fallback_name = mailbox.name;
        }
    }

    let name = fallback_name?;
    let needle = name.trim().to_lowercase();
    for recipient in &src.recipients {
        if recipient
            .name
            .as_deref()
            .is_some_and(|n| n.trim().to_lowercase() == needle)
            && let Some(address) = recipient.address.as_deref()
            && valid_address(address)
        {
            return Some(Mailbox::new(Some(name), address));
        }
    }

    Some(Mailbox::new(Some(name), ""))
}

/// Splits recipients into formatted `To` and `Cc` entries.
///
/// Recipients without a usable address are skipped; blind-copy and unknown
/// class codes are dropped.
fn classify_recipients(recipients: &[SourceRecipient]) -> (Vec<String>, Vec<String>) {
    let mut to = Vec::new();
    let mut cc = Vec::new();

    for recipient in recipients {
        let Some(address) = recipient.address.as_deref() else {
            continue;
        };
        if !valid_address(address) {
            continue;
        }
        let name = recipient.name.clone().filter(|n| !n.trim().is_empty());
        let formatted = Mailbox::new(name, address).format();
        match recipient.class {
            CLASS_TO => to.push(formatted),
            CLASS_CC => cc.push(formatted),
            _ => {}
        }
    }

    (to, cc)
}

/// Date strategy chain: structured timestamp, then broken-down components
/// interpreted as local time, then the preformatted string verbatim.
fn resolve_date(src: &SourceMessage, depth: usize, sink: &mut dyn LogSink) -> Option<String> {
    let pad = indent(depth);

    match src.parsed_date.as_ref() {
        Some(ParsedDate::Timestamp(timestamp)) => return Some(timestamp.to_rfc2822()),
        Some(ParsedDate::Components(parts)) => {
            match date_from_components(parts) {
                Some(date) => return Some(date),
                None => {
                    tracing::warn!(components = ?parts, "unusable broken-down date");
                    sink.line(&format!(
                        "{pad}  WARNING: could not convert date components {parts:?} to a valid Date header"
                    ));
                }
            }
        }
        None => {}
    }

    src.date_string.clone()
}

/// Interprets at least 6 numeric components (year, month, day, hour,
/// minute, second) as a local time. Trailing components are ignored.
fn date_from_components(parts: &[i64]) -> Option<String> {
    if parts.len() < 6 {
        return None;
    }
    let year = i32::try_from(parts[0]).ok()?;
    let month = u32::try_from(parts[1]).ok()?;
    let day = u32::try_from(parts[2]).ok()?;
    let hour = u32::try_from(parts[3]).ok()?;
    let minute = u32::try_from(parts[4]).ok()?;
    let second = u32::try_from(parts[5]).ok()?;

    Local
        .with_ymd_and_hms(year, month, day, hour, minute, second)
        .earliest()
        .map(|dt| dt.to_rfc2822())
}
