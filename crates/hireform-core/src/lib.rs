//! # hireform-core
//!
//! Error types, settings, and logging shared by the hireform crates.
//!
//! ## Modules
//!
//! - [`error`] - Validation and form error types
//! - [`settings`] - Form settings and validation modes
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{FormError, FormResult, ValidationError};
pub use settings::{Settings, ValidationMode};
