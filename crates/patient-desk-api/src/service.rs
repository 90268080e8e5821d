//! Patient service interface and test double.

use std::sync::{Arc, Mutex};

use patient_desk_core::{PatientRecord, UpdatePayload};
use thiserror::Error;

/// Patient service errors.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Read-one / update-one access to the remote patient service.
pub trait PatientService: Send + Sync {
    /// Fetch the record for `uid`.
    fn fetch(&self, uid: &str) -> ApiResult<PatientRecord>;

    /// Push a single-field partial update for `uid`.
    fn update(&self, uid: &str, payload: &UpdatePayload) -> ApiResult<()>;
}

/// A shared service handle is itself a service.
impl<S: PatientService> PatientService for Arc<S> {
    fn fetch(&self, uid: &str) -> ApiResult<PatientRecord> {
        (**self).fetch(uid)
    }

    fn update(&self, uid: &str, payload: &UpdatePayload) -> ApiResult<()> {
        (**self).update(uid, payload)
    }
}

/// In-memory patient service for testing: serves a configurable record and
/// records every update body it receives.
pub struct MockPatientService {
    record: Mutex<Option<PatientRecord>>,
    update_status: u16,
    updates: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockPatientService {
    pub fn new() -> Self {
        Self {
            record: Mutex::new(None),
            update_status: 200,
            updates: Mutex::new(Vec::new()),
        }
    }

    /// Serve this record for every fetch.
    pub fn with_record(self, record: PatientRecord) -> Self {
        *self.record.lock().expect("mock lock poisoned") = Some(record);
        self
    }

    /// Respond to every update with this HTTP status.
    pub fn with_update_status(mut self, status: u16) -> Self {
        self.update_status = status;
        self
    }

    /// Make every subsequent fetch fail with a 404.
    pub fn clear_record(&self) {
        *self.record.lock().expect("mock lock poisoned") = None;
    }

    /// The `(uid, body)` pairs received so far.
    pub fn updates(&self) -> Vec<(String, serde_json::Value)> {
        self.updates.lock().expect("mock lock poisoned").clone()
    }
}

impl Default for MockPatientService {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientService for MockPatientService {
    fn fetch(&self, uid: &str) -> ApiResult<PatientRecord> {
        self.record
            .lock()
            .expect("mock lock poisoned")
            .clone()
            .ok_or_else(|| ApiError::Server {
                status: 404,
                body: format!("no patient {}", uid),
            })
    }

    fn update(&self, uid: &str, payload: &UpdatePayload) -> ApiResult<()> {
        let body = serde_json::to_value(payload)?;
        self.updates
            .lock()
            .expect("mock lock poisoned")
            .push((uid.to_string(), body));

        match self.update_status {
            200..=299 => Ok(()),
            status => Err(ApiError::Server {
                status,
                body: String::new(),
            }),
        }
    }
}
