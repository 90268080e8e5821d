//! Blocking HTTP client for the patient service.

use std::time::Duration;

use patient_desk_core::{PatientRecord, UpdatePayload};
use tracing::info;

use crate::service::{ApiError, ApiResult, PatientService};

/// HTTP client for the remote patient service.
pub struct HttpPatientService {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpPatientService {
    /// Create a client for the service at `base_url`.
    ///
    /// `base_url` should be like `https://records.example.org` (a trailing
    /// slash is tolerated and trimmed).
    pub fn new(base_url: &str, timeout_secs: u64) -> ApiResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn patient_url(&self, uid: &str) -> String {
        format!("{}/api/patients/{}", self.base_url, uid)
    }
}

impl PatientService for HttpPatientService {
    fn fetch(&self, uid: &str) -> ApiResult<PatientRecord> {
        let url = self.patient_url(uid);
        info!(url = %url, "fetching patient record");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let record: PatientRecord = response.json()?;
        info!(url = %url, "patient record loaded");
        Ok(record)
    }

    fn update(&self, uid: &str, payload: &UpdatePayload) -> ApiResult<()> {
        let url = self.patient_url(uid);
        info!(url = %url, field = payload.field_name(), "updating patient field");

        let response = self.client.put(&url).json(payload).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        info!(url = %url, field = payload.field_name(), "patient field updated");
        Ok(())
    }
}
