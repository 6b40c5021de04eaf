//! Validation pipeline for the job application form.
//!
//! Within one field validators short-circuit: the first failure is the
//! field's error. Across fields errors accumulate, so one pass reports
//! every failing visible field at once. Hidden fields are never judged.

use std::collections::HashMap;

use hireform_core::ValidationError;

use crate::fields::{FieldDefinition, FieldName};
use crate::state::FormState;
use crate::validators::first_failure;
use crate::visibility;

/// Field name to the first failing validator's error.
///
/// A field absent from the map is valid. Iteration follows declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: HashMap<FieldName, ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error for a field, replacing any previous one.
    pub fn insert(&mut self, field: FieldName, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// Returns the error of a field.
    pub fn get(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Returns the error message of a field.
    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    /// Returns `true` if the field has an error.
    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    /// Keeps only the errors of fields matching the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(FieldName) -> bool) {
        self.errors.retain(|field, _| keep(*field));
    }

    /// Returns `true` if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with an error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over errors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &ValidationError)> + '_ {
        FieldName::ALL
            .into_iter()
            .filter_map(move |field| self.errors.get(&field).map(|e| (field, e)))
    }

    /// Returns the failing fields in declaration order.
    pub fn fields(&self) -> Vec<FieldName> {
        self.iter().map(|(field, _)| field).collect()
    }
}

/// Validates one field against its full declared rule set.
///
/// This ignores visibility; use [`validate_visible`] for submission checks.
pub fn validate_field(def: &FieldDefinition, state: &FormState) -> Option<ValidationError> {
    first_failure(&def.validators, state.get(def.name))
}

/// Validates every currently visible field.
pub fn validate_visible(state: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (field, validators) in visibility::active_rules(state) {
        if let Some(error) = first_failure(validators, state.get(field)) {
            errors.insert(field, error);
        }
    }
    errors
}
