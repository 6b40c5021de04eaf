//! Validators: a rule plus the message shown when the rule rejects a value.
//!
//! Only [`Rule::Required`] and [`Rule::MinSelected`] judge an empty value;
//! the other rules pass on empty input and leave the verdict to `Required`.

use regex::Regex;

use hireform_core::ValidationError;

use crate::value::FieldValue;

/// The predicate half of a [`Validator`].
#[derive(Debug, Clone)]
pub enum Rule {
    /// The value must be present and non-empty.
    Required,
    /// Non-empty text must match the whole pattern.
    Pattern(Regex),
    /// A non-empty value must read as a number no smaller than the bound.
    Min(f64),
    /// A multi-select must hold at least this many members.
    MinSelected(usize),
}

/// A rule and its error message.
#[derive(Debug, Clone)]
pub struct Validator {
    /// The predicate.
    pub rule: Rule,
    /// The message reported when the predicate fails.
    pub message: String,
}

impl Validator {
    /// Creates a `Required` validator.
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            rule: Rule::Required,
            message: message.into(),
        }
    }

    /// Creates a `Pattern` validator from a compiled regex.
    pub fn pattern(regex: Regex, message: impl Into<String>) -> Self {
        Self {
            rule: Rule::Pattern(regex),
            message: message.into(),
        }
    }

    /// Creates a `Min` validator.
    pub fn min(bound: f64, message: impl Into<String>) -> Self {
        Self {
            rule: Rule::Min(bound),
            message: message.into(),
        }
    }

    /// Creates a `MinSelected` validator.
    pub fn min_selected(count: usize, message: impl Into<String>) -> Self {
        Self {
            rule: Rule::MinSelected(count),
            message: message.into(),
        }
    }

    /// Returns the error code reported by this validator.
    pub const fn code(&self) -> &'static str {
        match self.rule {
            Rule::Required => "required",
            Rule::Pattern(_) => "pattern",
            Rule::Min(_) => "min",
            Rule::MinSelected(_) => "validate",
        }
    }

    /// Checks `value` (where `None` means unset) against this validator.
    pub fn validate(&self, value: Option<&FieldValue>) -> Result<(), ValidationError> {
        let empty = value.map_or(true, FieldValue::is_empty);
        let passes = match &self.rule {
            Rule::Required => !empty,
            Rule::Pattern(regex) => {
                empty
                    || value.is_some_and(|v| match v {
                        FieldValue::Multi(_) => false,
                        other => regex.is_match(&other.to_string()),
                    })
            }
            Rule::Min(bound) => {
                empty || value.and_then(FieldValue::as_number).is_some_and(|n| n >= *bound)
            }
            Rule::MinSelected(count) => {
                value.and_then(FieldValue::as_multi).map_or(0, <[String]>::len) >= *count
            }
        };

        if passes {
            Ok(())
        } else {
            let err = ValidationError::new(self.message.clone(), self.code());
            Err(match &self.rule {
                Rule::Min(bound) => err.with_param("min", bound.to_string()),
                Rule::MinSelected(count) => err.with_param("min_selected", count.to_string()),
                _ => err,
            })
        }
    }
}

/// Runs validators in order and returns the first failure.
pub fn first_failure(
    validators: &[Validator],
    value: Option<&FieldValue>,
) -> Option<ValidationError> {
    validators.iter().find_map(|v| v.validate(value).err())
}
