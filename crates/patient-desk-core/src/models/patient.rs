//! Patient record models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gender exactly as the patient service records it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// The wire string for this gender.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Parse a wire string; `None` for anything the service would reject.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `otherFields` sub-object: free-text contact details.
///
/// Every key defaults to the empty string, matching what the form shows for
/// a patient the service has no contact details for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// A patient record as the patient service returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientRecord {
    /// Patient name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Contact details; absent when the service has never stored any
    #[serde(rename = "otherFields", default, skip_serializing_if = "Option::is_none")]
    pub other_fields: Option<ContactDetails>,
}

impl PatientRecord {
    /// Contact details, normalized to empty strings when absent.
    pub fn contact_or_default(&self) -> ContactDetails {
        self.other_fields.clone().unwrap_or_default()
    }
}
