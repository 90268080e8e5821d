//! Patient-Desk API Library
//!
//! HTTP access to the remote patient service, plus the dashboard session a
//! host application drives: load a record by identifier, edit a local draft
//! field by field, and push one field at a time back to the service.
//!
//! # Architecture
//!
//! ```text
//! Host application (identifier, keystrokes, per-field UPDATE actions)
//!        │ FFI
//!        ▼
//!   PatientDesk ──► DashboardSession ──► PatientService (trait)
//!                                             │
//!                                   HttpPatientService (reqwest)
//!                                             │
//!                           GET/PUT https://…/api/patients/:uid
//! ```
//!
//! # Modules
//!
//! - [`service`]: the `PatientService` trait, error taxonomy, and the mock
//! - [`http`]: blocking `reqwest` implementation of the service
//! - [`session`]: the dashboard session and its form rows

pub mod http;
pub mod service;
pub mod session;

// Re-export commonly used types
pub use http::HttpPatientService;
pub use service::{ApiError, ApiResult, MockPatientService, PatientService};
pub use session::{DashboardSession, FormRow, SessionError, SessionResult};

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use patient_desk_core::{DraftRecord, FieldEdit, FieldError, FieldSelector};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PatientDeskError {
    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Session error: {0}")]
    SessionError(String),
}

impl From<ApiError> for PatientDeskError {
    fn from(e: ApiError) -> Self {
        PatientDeskError::ServiceError(e.to_string())
    }
}

impl From<FieldError> for PatientDeskError {
    fn from(e: FieldError) -> Self {
        PatientDeskError::InvalidField(e.to_string())
    }
}

impl From<SessionError> for PatientDeskError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Api(api) => PatientDeskError::ServiceError(api.to_string()),
            other => PatientDeskError::SessionError(other.to_string()),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for PatientDeskError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PatientDeskError::SessionError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open a dashboard backed by the patient service at `base_url`.
#[uniffi::export]
pub fn open_dashboard(
    base_url: String,
    timeout_secs: u64,
) -> Result<Arc<PatientDesk>, PatientDeskError> {
    let service = HttpPatientService::new(&base_url, timeout_secs)?;
    Ok(PatientDesk::with_service(Box::new(service)))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe session wrapper for FFI.
#[derive(uniffi::Object)]
pub struct PatientDesk {
    session: Mutex<DashboardSession>,
}

impl PatientDesk {
    /// Build a dashboard over any service implementation (used by tests and
    /// Rust hosts; FFI hosts go through [`open_dashboard`]).
    pub fn with_service(service: Box<dyn PatientService>) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(DashboardSession::new(service)),
        })
    }
}

#[uniffi::export]
impl PatientDesk {
    /// Point the dashboard at a patient identifier supplied by the host.
    pub fn set_patient(&self, uid: String) -> Result<(), PatientDeskError> {
        let mut session = self.session.lock()?;
        session.set_patient(&uid);
        Ok(())
    }

    /// Load the record for the current identifier and return the fresh draft.
    pub fn load_patient(&self) -> Result<FfiPatientRecord, PatientDeskError> {
        let mut session = self.session.lock()?;
        session.load()?;
        let draft = session
            .draft()
            .ok_or_else(|| PatientDeskError::SessionError("no record loaded".into()))?;
        Ok(draft.into())
    }

    /// Apply one edit to the draft.
    ///
    /// `name` accepts the form field-name shapes: `name`, `age`, `gender`,
    /// `otherFields[email]` and `otherFields.email`.
    pub fn edit_field(&self, name: String, value: String) -> Result<(), PatientDeskError> {
        let selector = FieldSelector::from_str(&name)?;
        let edit = FieldEdit::from_input(selector, &value)?;
        let mut session = self.session.lock()?;
        session.edit(edit)?;
        Ok(())
    }

    /// Push the draft's current value for one field to the service.
    pub fn submit_field(&self, field: String) -> Result<(), PatientDeskError> {
        let selector = FieldSelector::from_str(&field)?;
        let session = self.session.lock()?;
        session.submit(selector)?;
        Ok(())
    }

    /// The editable form rows in display order; empty until a load succeeds.
    pub fn form_rows(&self) -> Result<Vec<FfiFormRow>, PatientDeskError> {
        let session = self.session.lock()?;
        Ok(session.rows().into_iter().map(|r| r.into()).collect())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe flattened draft record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientRecord {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl From<&DraftRecord> for FfiPatientRecord {
    fn from(draft: &DraftRecord) -> Self {
        Self {
            name: draft.name.clone(),
            age: draft.age,
            gender: draft.gender.to_string(),
            address: draft.contact.address.clone(),
            email: draft.contact.email.clone(),
            phone: draft.contact.phone.clone(),
        }
    }
}

/// FFI-safe form row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFormRow {
    pub label: String,
    pub field: String,
    pub value: String,
}

impl From<FormRow> for FfiFormRow {
    fn from(row: FormRow) -> Self {
        Self {
            label: row.label.to_string(),
            field: row.selector.to_string(),
            value: row.value,
        }
    }
}
