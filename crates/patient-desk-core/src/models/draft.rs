//! Client-local draft of a patient record.

use serde::{Deserialize, Serialize};

use super::patient::{ContactDetails, Gender, PatientRecord};
use crate::field::{ContactField, FieldEdit, FieldSelector};

/// The locally edited, not-yet-confirmed copy of a record.
///
/// Seeded from the last successful load, with missing contact details
/// normalized to empty strings so `contact` is always present. The draft may
/// diverge from the server record until a per-field submit succeeds, at which
/// point only that field is presumed reconciled; there is no re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DraftRecord {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact: ContactDetails,
}

impl DraftRecord {
    /// Seed a draft from a freshly loaded record.
    pub fn from_record(record: &PatientRecord) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age,
            gender: record.gender,
            contact: record.contact_or_default(),
        }
    }

    /// Replace exactly the field the edit targets; every sibling keeps its value.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(name) => self.name = name,
            FieldEdit::Age(age) => self.age = age,
            FieldEdit::Gender(gender) => self.gender = gender,
            FieldEdit::Contact(field, value) => *self.contact_mut(field) = value,
        }
    }

    /// The current value of one contact field.
    pub fn contact_value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Address => &self.contact.address,
            ContactField::Email => &self.contact.email,
            ContactField::Phone => &self.contact.phone,
        }
    }

    /// Render the current value of any field for display.
    pub fn value_of(&self, selector: FieldSelector) -> String {
        match selector {
            FieldSelector::Name => self.name.clone(),
            FieldSelector::Age => self.age.to_string(),
            FieldSelector::Gender => self.gender.to_string(),
            FieldSelector::Contact(field) => self.contact_value(field).to_string(),
        }
    }

    fn contact_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Address => &mut self.contact.address,
            ContactField::Email => &mut self.contact.email,
            ContactField::Phone => &mut self.contact.phone,
        }
    }
}
