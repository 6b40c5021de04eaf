//! Field values held by the form state.
//!
//! A field is either unset (absent from [`FormState`](crate::state::FormState))
//! or holds one [`FieldValue`]: free text, a number, or the members of a
//! multi-select group.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Largest magnitude at which every whole `f64` is exactly representable.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// The current value of one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text from a text-like input, a textarea, or a select.
    Text(String),
    /// A number from a numeric input.
    Number(f64),
    /// The checked members of a checkbox group.
    Multi(Vec<String>),
}

impl FieldValue {
    /// Returns `true` for empty text, a NaN number, or an empty selection.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => n.is_nan(),
            Self::Multi(members) => members.is_empty(),
        }
    }

    /// Returns the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric reading of this value.
    ///
    /// Text is parsed after trimming, since numeric inputs deliver their raw
    /// text. Non-finite numbers and multi-select values have no numeric
    /// reading.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Returns the selected members if this is a `Multi` value.
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Self::Multi(members) => Some(members),
            _ => None,
        }
    }
}

/// Returns the number as an `i64` when it is whole and exactly representable.
#[allow(clippy::cast_possible_truncation)]
fn whole_number(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT_INT).then(|| n as i64)
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => match whole_number(*n) {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{n}"),
            },
            Self::Multi(members) => write!(f, "{}", members.join(",")),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) => match whole_number(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Self::Multi(members) => {
                let mut seq = serializer.serialize_seq(Some(members.len()))?;
                for member in members {
                    seq.serialize_element(member)?;
                }
                seq.end()
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(members: Vec<String>) -> Self {
        Self::Multi(members)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(members: Vec<&str>) -> Self {
        Self::Multi(members.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(FieldValue::from("").is_empty());
        assert!(!FieldValue::from("x").is_empty());
        assert!(FieldValue::Number(f64::NAN).is_empty());
        assert!(!FieldValue::from(0).is_empty());
        assert!(FieldValue::Multi(vec![]).is_empty());
        assert!(!FieldValue::from(vec!["CSS"]).is_empty());
    }

    #[test]
    fn test_as_number_parses_text() {
        assert_eq!(FieldValue::from(" 3 ").as_number(), Some(3.0));
        assert_eq!(FieldValue::from(2.5).as_number(), Some(2.5));
        assert_eq!(FieldValue::from("three").as_number(), None);
        assert_eq!(FieldValue::from(vec!["1"]).as_number(), None);
        assert_eq!(FieldValue::from("inf").as_number(), None);
        assert_eq!(FieldValue::from(f64::NEG_INFINITY).as_number(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from(2).to_string(), "2");
        assert_eq!(FieldValue::from(1.5).to_string(), "1.5");
        assert_eq!(FieldValue::from(vec!["JavaScript", "CSS"]).to_string(), "JavaScript,CSS");
    }

    #[test]
    fn test_serialize_shapes() {
        assert_eq!(serde_json::to_string(&FieldValue::from("Ada")).unwrap(), "\"Ada\"");
        assert_eq!(serde_json::to_string(&FieldValue::from(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&FieldValue::from(2.5)).unwrap(), "2.5");
        assert_eq!(
            serde_json::to_string(&FieldValue::from(vec!["CSS", "Python"])).unwrap(),
            r#"["CSS","Python"]"#
        );
    }
}
