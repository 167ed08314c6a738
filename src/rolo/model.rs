use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single contact field value with a per-field visibility flag.
/// Private fields are hidden by listings and `view`; `viewall` shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub value: String,
    pub private: bool,
}

impl Detail {
    pub fn public(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            private: false,
        }
    }

    pub fn private(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            private: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag(pub String);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone: Detail,
    pub email: Detail,
    pub address: Detail,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(name: String, phone: Detail, email: Detail, address: Detail, tags: Vec<Tag>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            email,
            address,
            tags,
            created_at: Utc::now(),
        }
    }

    /// One-line rendering with private fields omitted.
    pub fn to_line_hide_private(&self) -> String {
        self.render(false)
    }

    /// One-line rendering including private fields, marked `{private}`.
    pub fn to_line_show_all(&self) -> String {
        self.render(true)
    }

    fn render(&self, show_private: bool) -> String {
        let mut out = self.name.clone();
        for (label, detail) in [
            ("Phone", &self.phone),
            ("Email", &self.email),
            ("Address", &self.address),
        ] {
            if !detail.private {
                out.push_str(&format!(" {}: {}", label, detail.value));
            } else if show_private {
                out.push_str(&format!(" {{private}} {}: {}", label, detail.value));
            }
        }
        if !self.tags.is_empty() {
            out.push_str(" Tags: ");
            for tag in &self.tags {
                out.push_str(&tag.to_string());
            }
        }
        out
    }
}

/// Name: non-empty, alphanumeric words separated by spaces.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

/// Phone: non-empty, digits only.
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit())
}

/// Email: `local@domain`, both halves non-empty, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Address: any non-empty text.
pub fn is_valid_address(address: &str) -> bool {
    !address.trim().is_empty()
}

/// Tag: non-empty, alphanumeric.
pub fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric())
}

/// The full in-memory contact collection, the unit of persistence.
/// Insertion order is preserved; names are unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.contacts.iter().any(|c| c.name == name)
    }

    /// Appends a contact. Returns `false` (and leaves the book unchanged)
    /// when a contact with the same name already exists.
    pub fn add(&mut self, contact: Contact) -> bool {
        if self.contains_name(&contact.name) {
            return false;
        }
        self.contacts.push(contact);
        true
    }

    /// Removes the contact with the given id, returning it if present.
    pub fn remove_by_id(&mut self, id: Uuid) -> Option<Contact> {
        let pos = self.contacts.iter().position(|c| c.id == id)?;
        Some(self.contacts.remove(pos))
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
