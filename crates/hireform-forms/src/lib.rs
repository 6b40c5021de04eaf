//! # hireform-forms
//!
//! The job application form: a static field registry, validators, a
//! visibility engine deriving which conditional fields apply from the
//! `position` answer, an event-driven form state machine, the submitted
//! record, and HTML rendering.
//!
//! ```
//! use hireform_forms::{FieldName, FormEvent, JobApplicationForm};
//!
//! let mut form = JobApplicationForm::new();
//! form.handle(FormEvent::input(FieldName::Position, "Developer")).unwrap();
//! assert!(form.is_visible(FieldName::RelevantExperience));
//! assert!(!form.submit().is_accepted());
//! ```

pub mod fields;
pub mod form;
pub mod registry;
pub mod render;
pub mod state;
pub mod submission;
pub mod validation;
pub mod validators;
pub mod value;
pub mod visibility;

pub use fields::{FieldDefinition, FieldName, InputKind};
pub use form::{FormEvent, FormPhase, JobApplicationForm, SubmitOutcome};
pub use state::FormState;
pub use submission::SubmittedRecord;
pub use validation::ValidationErrors;
pub use value::FieldValue;
pub use visibility::Position;
