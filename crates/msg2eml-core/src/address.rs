//! RFC 5322 mailbox parsing and formatting.
//!
//! Just enough address handling for header resolution: pull a name/address
//! pair out of a display string, and format one back into a name-addr.

/// A parsed mailbox: optional display name plus address.
///
/// The address may be empty when only a display name could be recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    /// Display name.
    pub name: Option<String>,
    /// Email address (`local@domain`), possibly empty.
    pub address: String,
}

impl Mailbox {
    /// Creates a mailbox from name and address.
    #[must_use]
    pub fn new(name: Option<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.filter(|n| !n.trim().is_empty()),
            address: address.into(),
        }
    }

    /// Whether the address looks deliverable (non-empty, contains `@`).
    #[must_use]
    pub fn has_valid_address(&self) -> bool {
        !self.address.is_empty() && self.address.contains('@')
    }

    /// Formats as an RFC 5322 name-addr / addr-spec.
    #[must_use]
    pub fn format(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => {
                if name.contains(|c: char| "()<>@,;:\\\".[]".contains(c)) {
                    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
                    format!("\"{escaped}\" <{}>", self.address)
                } else {
                    format!("{name} <{}>", self.address)
                }
            }
            _ => self.address.clone(),
        }
    }
}

/// Parses a display string into a mailbox.
///
/// Handles `Name <local@domain>`, `"Name" <local@domain>`, `<local@domain>`,
/// a bare `local@domain`, and a bare display name (address left empty).
/// Returns `None` for blank input.
#[must_use]
pub fn parse_mailbox(input: &str) -> Option<Mailbox> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(open) = input.rfind('<') {
        let close = input[open..].find('>').map(|i| open + i)?;
        let address = input[open + 1..close].trim().to_string();
        let name = input[..open].trim().trim_matches('"').trim().to_string();
        let name = if name.is_empty() { None } else { Some(name) };
        return Some(Mailbox::new(name, address));
    }

    if input.contains('@') && !input.contains(char::is_whitespace) {
        return Some(Mailbox::new(None, input));
    }

    // Only a display name
    Some(Mailbox::new(Some(input.trim_matches('"').to_string()), ""))
}
