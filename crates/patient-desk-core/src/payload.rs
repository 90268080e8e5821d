//! Partial-update bodies for the patient service.

use serde::{Deserialize, Serialize};

use crate::field::FieldSelector;
use crate::models::{ContactDetails, DraftRecord, Gender};

/// The body of a single-field `PUT`.
///
/// Serializes to exactly the wire shape the service expects: one top-level
/// key for a plain field, or the whole `otherFields` object for a contact
/// field. The service replaces the nested object wholesale rather than
/// merging keys, so a contact payload always carries every contact key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum UpdatePayload {
    Name(String),
    Age(u32),
    Gender(Gender),
    OtherFields(ContactDetails),
}

impl UpdatePayload {
    /// Build the payload for one field from the current draft.
    pub fn for_field(selector: FieldSelector, draft: &DraftRecord) -> Self {
        match selector {
            FieldSelector::Name => UpdatePayload::Name(draft.name.clone()),
            FieldSelector::Age => UpdatePayload::Age(draft.age),
            FieldSelector::Gender => UpdatePayload::Gender(draft.gender),
            FieldSelector::Contact(_) => UpdatePayload::OtherFields(draft.contact.clone()),
        }
    }

    /// Serialize to the JSON body sent to the service.
    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The top-level wire key this payload carries.
    pub fn field_name(&self) -> &'static str {
        match self {
            UpdatePayload::Name(_) => "name",
            UpdatePayload::Age(_) => "age",
            UpdatePayload::Gender(_) => "gender",
            UpdatePayload::OtherFields(_) => "otherFields",
        }
    }
}
