//! Dashboard session: one patient identifier, one draft, per-field submits.

use patient_desk_core::{
    ContactField, DraftRecord, FieldEdit, FieldSelector, PatientRecord, UpdatePayload,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::service::{ApiError, PatientService};

/// Session errors.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no patient identifier set")]
    NoPatient,

    #[error("no record loaded")]
    NotLoaded,

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// One editable row of the dashboard form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub label: &'static str,
    pub selector: FieldSelector,
    pub value: String,
}

/// The editable rows, in display order.
const FORM_FIELDS: [(&str, FieldSelector); 6] = [
    ("NAME", FieldSelector::Name),
    ("AGE", FieldSelector::Age),
    ("GENDER", FieldSelector::Gender),
    ("ADDRESS", FieldSelector::Contact(ContactField::Address)),
    ("EMAIL", FieldSelector::Contact(ContactField::Email)),
    ("PHONE", FieldSelector::Contact(ContactField::Phone)),
];

/// Drives one patient's record: load it, edit a local draft, push one field
/// at a time back to the service.
///
/// The session is synchronous and exclusively owned, so a load response can
/// only ever apply to the identifier the session currently points at, and
/// submits cannot interleave with edits.
pub struct DashboardSession {
    service: Box<dyn PatientService>,
    uid: Option<String>,
    record: Option<PatientRecord>,
    draft: Option<DraftRecord>,
}

impl DashboardSession {
    /// Create a session over the given patient service.
    pub fn new(service: Box<dyn PatientService>) -> Self {
        Self {
            service,
            uid: None,
            record: None,
            draft: None,
        }
    }

    /// Point the session at a patient identifier supplied by the host.
    ///
    /// Clears any previously loaded record and draft, so state from an
    /// earlier identifier can never show through. An empty identifier
    /// unsets the patient.
    pub fn set_patient(&mut self, uid: &str) {
        self.uid = if uid.is_empty() {
            None
        } else {
            Some(uid.to_string())
        };
        self.record = None;
        self.draft = None;
    }

    /// The identifier the session currently points at.
    pub fn patient_uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    /// The last successfully loaded record.
    pub fn record(&self) -> Option<&PatientRecord> {
        self.record.as_ref()
    }

    /// The current draft.
    pub fn draft(&self) -> Option<&DraftRecord> {
        self.draft.as_ref()
    }

    /// Fetch the record for the current identifier and seed the draft from
    /// it, normalizing missing contact details to empty strings.
    ///
    /// On failure the previous record and draft are left untouched.
    pub fn load(&mut self) -> SessionResult<()> {
        let uid = self.uid.as_deref().ok_or(SessionError::NoPatient)?;

        let record = match self.service.fetch(uid) {
            Ok(record) => record,
            Err(e) => {
                warn!(uid = %uid, error = %e, "patient load failed");
                return Err(e.into());
            }
        };

        info!(uid = %uid, "patient loaded");
        self.draft = Some(DraftRecord::from_record(&record));
        self.record = Some(record);
        Ok(())
    }

    /// Apply one edit to the draft.
    pub fn edit(&mut self, edit: FieldEdit) -> SessionResult<()> {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.apply(edit);
                Ok(())
            }
            None => Err(SessionError::NotLoaded),
        }
    }

    /// Push the draft's current value for one field to the service.
    ///
    /// The draft itself is never touched by a submit, successful or not;
    /// it stays the user's local view either way.
    pub fn submit(&self, selector: FieldSelector) -> SessionResult<()> {
        let uid = self.uid.as_deref().ok_or(SessionError::NoPatient)?;
        let draft = self.draft.as_ref().ok_or(SessionError::NotLoaded)?;

        let payload = UpdatePayload::for_field(selector, draft);
        if let Err(e) = self.service.update(uid, &payload) {
            warn!(uid = %uid, field = %selector, error = %e, "patient update failed");
            return Err(e.into());
        }

        info!(uid = %uid, field = %selector, "patient updated");
        Ok(())
    }

    /// The editable form rows in display order; empty until a load succeeds.
    pub fn rows(&self) -> Vec<FormRow> {
        match self.draft.as_ref() {
            Some(draft) => FORM_FIELDS
                .iter()
                .map(|&(label, selector)| FormRow {
                    label,
                    selector,
                    value: draft.value_of(selector),
                })
                .collect(),
            None => Vec::new(),
        }
    }
}
