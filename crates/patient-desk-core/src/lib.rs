//! Patient-Desk Core Library
//!
//! Client-side model of an editable patient record: the wire types exchanged
//! with the remote patient service, a local draft the host edits one field at
//! a time, and the partial-update payloads pushed back per field.
//!
//! # Architecture
//!
//! ```text
//! uid ──► load ──► DraftRecord ◄── FieldEdit (host input)
//!                       │
//!                       │ FieldSelector (submit one field)
//!                       ▼
//!                 UpdatePayload ──► PUT /api/patients/:uid
//! ```
//!
//! # Core Principle
//!
//! **The draft is the user's view.** It is seeded once per load, mutated by
//! every edit, and never cleared by a submit, whether or not the server
//! acknowledged the update.
//!
//! # Modules
//!
//! - [`models`]: wire and draft record types
//! - [`field`]: tagged field selectors and typed edits
//! - [`payload`]: single-field partial-update bodies

pub mod field;
pub mod models;
pub mod payload;

// Re-export commonly used types
pub use field::{ContactField, FieldEdit, FieldError, FieldResult, FieldSelector};
pub use models::{ContactDetails, DraftRecord, Gender, PatientRecord};
pub use payload::UpdatePayload;
