//! Conditional visibility and the derived active rule set.
//!
//! Visibility is a pure function of the `position` answer:
//!
//! | Position | Conditional fields shown |
//! |---|---|
//! | Developer | `relevantExperience` |
//! | Designer | `relevantExperience`, `portfolioURL` |
//! | Manager | `managementExperience` |
//! | anything else | none |
//!
//! A hidden field has no active validators, so it can never block a
//! submission, whatever value it still holds.

use std::fmt;
use std::str::FromStr;

use hireform_core::FormError;

use crate::fields::FieldName;
use crate::registry;
use crate::state::FormState;
use crate::validators::Validator;

/// The fields whose visibility depends on `position`.
pub const CONDITIONAL_FIELDS: [FieldName; 3] = [
    FieldName::RelevantExperience,
    FieldName::PortfolioUrl,
    FieldName::ManagementExperience,
];

/// A recognized answer to the `position` select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    /// Returns the option value of this position.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }

    /// Returns the conditional fields this position reveals.
    pub const fn revealed_fields(self) -> &'static [FieldName] {
        match self {
            Self::Developer => &[FieldName::RelevantExperience],
            Self::Designer => &[FieldName::RelevantExperience, FieldName::PortfolioUrl],
            Self::Manager => &[FieldName::ManagementExperience],
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Developer" => Ok(Self::Developer),
            "Designer" => Ok(Self::Designer),
            "Manager" => Ok(Self::Manager),
            other => Err(FormError::InvalidChoice {
                field: FieldName::Position.as_str().to_string(),
                option: other.to_string(),
            }),
        }
    }
}

/// Reads the recognized position from the state, if any.
pub fn position(state: &FormState) -> Option<Position> {
    state
        .text(FieldName::Position)
        .and_then(|s| s.parse::<Position>().ok())
}

/// Returns `true` if the field's visibility depends on `position`.
pub fn is_conditional(field: FieldName) -> bool {
    CONDITIONAL_FIELDS.contains(&field)
}

/// Returns `true` if the field is currently rendered.
pub fn is_visible(field: FieldName, state: &FormState) -> bool {
    !is_conditional(field)
        || position(state).is_some_and(|p| p.revealed_fields().contains(&field))
}

/// Returns the currently rendered fields in declaration order.
pub fn visible_fields(state: &FormState) -> Vec<FieldName> {
    FieldName::ALL
        .into_iter()
        .filter(|field| is_visible(*field, state))
        .collect()
}

/// Derives the validators that apply to the current state.
///
/// Visible fields carry their full declared rule set; hidden fields carry
/// none and are omitted. Recompute this after every state change.
pub fn active_rules(state: &FormState) -> Vec<(FieldName, &'static [Validator])> {
    visible_fields(state)
        .into_iter()
        .map(|field| (field, registry::field(field).validators.as_slice()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_position(position: &str) -> FormState {
        let mut state = FormState::new();
        state.set(FieldName::Position, position.into());
        state
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("Designer".parse::<Position>().unwrap(), Position::Designer);
        assert!("designer".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_developer_reveals_experience() {
        let state = with_position("Developer");
        assert!(is_visible(FieldName::RelevantExperience, &state));
        assert!(!is_visible(FieldName::PortfolioUrl, &state));
        assert!(!is_visible(FieldName::ManagementExperience, &state));
    }

    #[test]
    fn test_designer_reveals_experience_and_portfolio() {
        let state = with_position("Designer");
        assert!(is_visible(FieldName::RelevantExperience, &state));
        assert!(is_visible(FieldName::PortfolioUrl, &state));
        assert!(!is_visible(FieldName::ManagementExperience, &state));
    }

    #[test]
    fn test_manager_reveals_management() {
        let state = with_position("Manager");
        let visible = visible_fields(&state);
        assert!(visible.contains(&FieldName::ManagementExperience));
        assert!(!visible.contains(&FieldName::RelevantExperience));
        assert_eq!(visible.len(), 7);
    }

    #[test]
    fn test_unrecognized_positions_reveal_nothing() {
        for position in ["", "Astronaut", "developer", " Manager"] {
            let state = with_position(position);
            for field in CONDITIONAL_FIELDS {
                assert!(!is_visible(field, &state), "{field} visible for {position:?}");
            }
        }
        let unset = FormState::new();
        assert_eq!(visible_fields(&unset).len(), 6);
    }

    #[test]
    fn test_active_rules_omit_hidden_fields() {
        let state = with_position("Developer");
        let rules = active_rules(&state);
        let fields: Vec<FieldName> = rules.iter().map(|(f, _)| *f).collect();
        assert!(fields.contains(&FieldName::RelevantExperience));
        assert!(!fields.contains(&FieldName::PortfolioUrl));
        let (_, experience_rules) = rules
            .iter()
            .find(|(f, _)| *f == FieldName::RelevantExperience)
            .unwrap();
        assert_eq!(experience_rules.len(), 2);
    }

    #[test]
    fn test_non_conditional_fields_always_visible() {
        let state = FormState::new();
        for field in FieldName::ALL {
            assert_eq!(is_visible(field, &state), !is_conditional(field));
        }
    }
}
