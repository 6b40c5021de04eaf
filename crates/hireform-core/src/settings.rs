//! Settings for hireform.
//!
//! [`Settings`] holds everything a form instance can be configured with:
//! the logging setup, the [`ValidationMode`] deciding when a field's error
//! becomes visible, and the indentation of the rendered submission record.
//! See [`settings_loader`](crate::settings_loader) for loading from files
//! and the environment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// When a field's validation error is surfaced to the user.
///
/// Validation itself always runs on every change; the mode only decides
/// which interaction unlocks display of the result. Fields covered by a
/// submit attempt re-validate on change regardless of mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Errors appear only after the first submit attempt.
    #[default]
    OnSubmit,
    /// Errors appear once the field's value has changed.
    OnChange,
    /// Errors are recomputed each time the field loses focus.
    OnBlur,
    /// Errors appear after the first blur, then track every change.
    OnTouched,
}

impl ValidationMode {
    /// Returns the snake-case name used in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnSubmit => "on_submit",
            Self::OnChange => "on_change",
            Self::OnBlur => "on_blur",
            Self::OnTouched => "on_touched",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on_submit" | "onsubmit" => Ok(Self::OnSubmit),
            "on_change" | "onchange" => Ok(Self::OnChange),
            "on_blur" | "onblur" => Ok(Self::OnBlur),
            "on_touched" | "ontouched" => Ok(Self::OnTouched),
            other => Err(FormError::ConfigurationError(format!(
                "Unknown validation mode '{other}'"
            ))),
        }
    }
}

/// The complete set of form settings.
///
/// # Examples
///
/// ```
/// use hireform_core::settings::{Settings, ValidationMode};
///
/// let settings = Settings::default();
/// assert_eq!(settings.validation_mode, ValidationMode::OnSubmit);
/// assert_eq!(settings.summary_indent, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// An `EnvFilter` directive such as "info" or "hireform_forms=debug".
    pub log_level: String,

    // ── Form behavior ────────────────────────────────────────────────

    /// When validation errors become visible.
    pub validation_mode: ValidationMode,
    /// Number of spaces used to indent the rendered submission record.
    pub summary_indent: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            validation_mode: ValidationMode::OnSubmit,
            summary_indent: 2,
        }
    }
}
