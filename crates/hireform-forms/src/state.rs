//! The mutable value store of one form instance.

use std::collections::HashMap;

use crate::fields::FieldName;
use crate::value::FieldValue;

/// Field name to current value. Unset fields are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: HashMap<FieldName, FieldValue>,
}

impl FormState {
    /// Creates an empty state with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field, or `None` if unset.
    pub fn get(&self, field: FieldName) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Returns the value of a field if it holds text.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Stores a value, returning the previous one.
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Option<FieldValue> {
        self.values.insert(field, value)
    }

    /// Unsets a field, returning the previous value.
    pub fn clear(&mut self, field: FieldName) -> Option<FieldValue> {
        self.values.remove(&field)
    }

    /// Returns `true` if the field holds any value.
    pub fn is_set(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    /// Adds `option` to a set-valued field.
    ///
    /// Members are kept in the order of `choices` and never duplicated.
    /// Returns `true` if the selection changed.
    pub fn insert_choice(&mut self, field: FieldName, option: &str, choices: &[&str]) -> bool {
        let current = self.members(field);
        if current.iter().any(|m| m == option) {
            return false;
        }
        let next = choices
            .iter()
            .filter(|c| **c == option || current.iter().any(|m| m == **c))
            .map(|c| (*c).to_string())
            .collect();
        self.values.insert(field, FieldValue::Multi(next));
        true
    }

    /// Removes `option` from a set-valued field.
    ///
    /// The field stays set, possibly to an empty selection. Returns `true`
    /// if the selection changed.
    pub fn remove_choice(&mut self, field: FieldName, option: &str) -> bool {
        let mut current = self.members(field);
        let before = current.len();
        current.retain(|m| m != option);
        let changed = current.len() != before;
        self.values.insert(field, FieldValue::Multi(current));
        changed
    }

    /// Replaces a set-valued field with `members`, normalized to `choices` order.
    pub fn set_choices(&mut self, field: FieldName, members: &[String], choices: &[&str]) {
        let next = choices
            .iter()
            .filter(|c| members.iter().any(|m| m == **c))
            .map(|c| (*c).to_string())
            .collect();
        self.values.insert(field, FieldValue::Multi(next));
    }

    /// Iterates over set fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> + '_ {
        FieldName::ALL
            .into_iter()
            .filter_map(move |field| self.values.get(&field).map(|v| (field, v)))
    }

    /// Returns the number of set fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn members(&self, field: FieldName) -> Vec<String> {
        self.get(field)
            .and_then(FieldValue::as_multi)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }
}
