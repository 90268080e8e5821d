//! Tagged selectors for the record's editable fields.

use std::fmt;
use std::str::FromStr;

use super::{FieldError, FieldResult};

/// A key inside the `otherFields` contact sub-object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Address,
    Email,
    Phone,
}

impl ContactField {
    /// Every contact field, in the order the form shows them.
    pub const ALL: [ContactField; 3] =
        [ContactField::Address, ContactField::Email, ContactField::Phone];

    /// The wire key inside `otherFields`.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Address => "address",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
        }
    }

    fn from_key(key: &str) -> FieldResult<Self> {
        match key {
            "address" => Ok(ContactField::Address),
            "email" => Ok(ContactField::Email),
            "phone" => Ok(ContactField::Phone),
            _ => Err(FieldError::UnknownContactField(key.to_string())),
        }
    }
}

/// Addresses one editable field of the record.
///
/// Built directly, or parsed from the field-name strings a form produces:
/// plain top-level names (`name`, `age`, `gender`), the dotted submit shape
/// (`otherFields.email`) and the bracketed input shape (`otherFields[email]`).
/// Anything else is rejected at construction rather than sliced blindly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSelector {
    Name,
    Age,
    Gender,
    Contact(ContactField),
}

impl FromStr for FieldSelector {
    type Err = FieldError;

    fn from_str(s: &str) -> FieldResult<Self> {
        match s {
            "name" => return Ok(FieldSelector::Name),
            "age" => return Ok(FieldSelector::Age),
            "gender" => return Ok(FieldSelector::Gender),
            _ => {}
        }

        if let Some(rest) = s.strip_prefix("otherFields") {
            let key = if let Some(key) = rest.strip_prefix('.') {
                key
            } else if let Some(key) = rest.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
                key
            } else {
                return Err(FieldError::MalformedName(s.to_string()));
            };
            if key.is_empty() {
                return Err(FieldError::MalformedName(s.to_string()));
            }
            return ContactField::from_key(key).map(FieldSelector::Contact);
        }

        Err(FieldError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSelector::Name => f.write_str("name"),
            FieldSelector::Age => f.write_str("age"),
            FieldSelector::Gender => f.write_str("gender"),
            FieldSelector::Contact(field) => write!(f, "otherFields.{}", field.key()),
        }
    }
}
