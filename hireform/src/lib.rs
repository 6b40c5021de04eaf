//! # hireform
//!
//! A job application form with conditional, data-dependent validation.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient access.

/// Error types, settings, and logging.
pub use hireform_core as core;

/// Field registry, visibility, validation, submission, and rendering.
pub use hireform_forms as forms;

pub use hireform_core::{FormError, FormResult, Settings, ValidationError, ValidationMode};
pub use hireform_forms::{
    FieldName, FieldValue, FormEvent, FormPhase, JobApplicationForm, SubmitOutcome,
    SubmittedRecord,
};

/// Third-party re-exports for user convenience.
pub use serde_json;
pub use tracing;
