//! The record captured by a successful submission.

use serde::ser::{Serialize, SerializeMap, Serializer};

use hireform_core::{FormError, FormResult};

use crate::fields::FieldName;
use crate::state::FormState;
use crate::value::FieldValue;

/// An immutable snapshot of every set field at the moment of a successful submit.
///
/// Hidden fields keep whatever value they held; unset fields are omitted.
/// Entries are in declaration order, which is also the key order of the
/// serialized record.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedRecord {
    entries: Vec<(FieldName, FieldValue)>,
}

impl SubmittedRecord {
    /// Captures the current state.
    pub fn capture(state: &FormState) -> Self {
        Self {
            entries: state.iter().map(|(field, value)| (field, value.clone())).collect(),
        }
    }

    /// Returns the captured value of a field.
    pub fn get(&self, field: FieldName) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find_map(|(name, value)| (*name == field).then_some(value))
    }

    /// Iterates over captured entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> + '_ {
        self.entries.iter().map(|(field, value)| (*field, value))
    }

    /// Returns the number of captured fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the record as pretty JSON with `indent` spaces per level.
    pub fn to_pretty_json(&self, indent: usize) -> FormResult<String> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| FormError::SerializationError(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| FormError::SerializationError(e.to_string()))
    }

    /// Converts the record into a `serde_json::Value`.
    pub fn to_json_value(&self) -> FormResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| FormError::SerializationError(e.to_string()))
    }
}

impl Serialize for SubmittedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}
