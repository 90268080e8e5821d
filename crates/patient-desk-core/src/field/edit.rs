//! Typed edits applied to the draft record.

use super::{ContactField, FieldError, FieldResult, FieldSelector};
use crate::models::Gender;

/// A single change to one field of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Age(u32),
    Gender(Gender),
    Contact(ContactField, String),
}

impl FieldEdit {
    /// The selector this edit targets.
    pub fn selector(&self) -> FieldSelector {
        match self {
            FieldEdit::Name(_) => FieldSelector::Name,
            FieldEdit::Age(_) => FieldSelector::Age,
            FieldEdit::Gender(_) => FieldSelector::Gender,
            FieldEdit::Contact(field, _) => FieldSelector::Contact(*field),
        }
    }

    /// Build a typed edit from a selector and the raw input value.
    ///
    /// Age and gender inputs are validated here; name and contact fields are
    /// free text and accepted as-is.
    pub fn from_input(selector: FieldSelector, value: &str) -> FieldResult<Self> {
        match selector {
            FieldSelector::Name => Ok(FieldEdit::Name(value.to_string())),
            FieldSelector::Age => value
                .trim()
                .parse::<u32>()
                .map(FieldEdit::Age)
                .map_err(|_| FieldError::InvalidAge(value.to_string())),
            FieldSelector::Gender => Gender::parse(value)
                .map(FieldEdit::Gender)
                .ok_or_else(|| FieldError::InvalidGender(value.to_string())),
            FieldSelector::Contact(field) => Ok(FieldEdit::Contact(field, value.to_string())),
        }
    }
}
