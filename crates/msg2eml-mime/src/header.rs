//! MIME header handling.
//!
//! Headers keep insertion order, which matters for readable output:
//! addressing headers stay where the builder put them instead of being
//! shuffled alphabetically.

use crate::encoding::encode_rfc2047;
use std::fmt;

/// Collection of email headers, insertion-ordered.
///
/// Lookups are ASCII-case-insensitive; the stored name casing is whatever
/// the caller supplied, which is what gets rendered.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Creates a new empty header collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a header value, keeping any existing values for the name.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Sets a header value, replacing any existing values.
    ///
    /// The new value takes the position of the first existing entry, or is
    /// appended if the header was not present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let mut replaced = false;
        self.entries.retain_mut(|(n, v)| {
            if n.eq_ignore_ascii_case(&name) {
                if replaced {
                    return false;
                }
                *v = value.clone();
                replaced = true;
            }
            true
        });
        if !replaced {
            self.entries.push((name, value));
        }
    }

    /// Gets the first value for a header.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Checks whether a header is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes all values for a header.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
    }

    /// Removes every header whose name starts with the given prefix
    /// (ASCII-case-insensitive). Used to strip `Content-*` declarations
    /// before lifting a body part's type onto a message root.
    pub fn remove_with_prefix(&mut self, prefix: &str) {
        self.entries.retain(|(n, _)| {
            n.get(..prefix.len())
                .is_none_or(|p| !p.eq_ignore_ascii_case(prefix))
        });
    }

    /// Returns an iterator over all headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of header entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encodes a header value using RFC 2047 if it contains non-ASCII.
    #[must_use]
    pub fn encode_value(value: &str) -> String {
        encode_rfc2047(value, "utf-8")
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.entries {
            write!(f, "{name}: {value}\r\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_add_get() {
        let mut headers = Headers::new();
        headers.add("Subject", "Weekly report");
        assert_eq!(headers.get("Subject"), Some("Weekly report"));
        assert_eq!(headers.get("subject"), Some("Weekly report"));
        assert_eq!(headers.get("From"), None);
    }

    #[test]
    fn test_headers_set_replaces_in_place() {
        let mut headers = Headers::new();
        headers.add("To", "alice@example.com");
        headers.add("Cc", "bob@example.com");
        headers.set("to", "carol@example.com");

        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(
            entries,
            vec![("To", "carol@example.com"), ("Cc", "bob@example.com")]
        );
    }

    #[test]
    fn test_headers_remove() {
        let mut headers = Headers::new();
        headers.add("Message-ID", "<abc@example.com>");
        headers.remove("message-id");
        assert!(!headers.contains("Message-ID"));
    }

    #[test]
    fn test_remove_with_prefix() {
        let mut headers = Headers::new();
        headers.add("From", "a@example.com");
        headers.add("Content-Type", "text/plain");
        headers.add("Content-Transfer-Encoding", "7bit");
        headers.remove_with_prefix("content-");

        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(entries, vec![("From", "a@example.com")]);
    }

    #[test]
    fn test_display_preserves_order() {
        let mut headers = Headers::new();
        headers.add("From", "a@example.com");
        headers.add("To", "b@example.com");
        assert_eq!(
            headers.to_string(),
            "From: a@example.com\r\nTo: b@example.com\r\n"
        );
    }

    #[test]
    fn test_encode_value_ascii_passthrough() {
        assert_eq!(Headers::encode_value("plain subject"), "plain subject");
    }

    #[test]
    fn test_encode_value_non_ascii() {
        let encoded = Headers::encode_value("Héllo");
        assert!(encoded.starts_with("=?utf-8?B?"));
        assert!(encoded.ends_with("?="));
    }
}
