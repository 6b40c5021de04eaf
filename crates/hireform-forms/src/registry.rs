//! The field registry of the job application form.
//!
//! Declares every field once, in display order, with its input kind and
//! unconditional validators. Which validators are *active* depends on the
//! form state and is derived in [`visibility`](crate::visibility).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fields::{FieldDefinition, FieldName, InputKind};
use crate::validators::Validator;

/// Options of the `position` select.
pub const POSITIONS: &[&str] = &["Developer", "Designer", "Manager"];

/// Options of the `skills` checkbox group.
pub const SKILLS: &[&str] = &["JavaScript", "CSS", "Python"];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("valid regex")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    // The second character may be anything but a line terminator.
    Regex::new(r"^(https?|chrome)://[^\s$.?#][^\n\r\x{2028}\x{2029}][^\s]*$").expect("valid regex")
});

static FIELDS: Lazy<Vec<FieldDefinition>> = Lazy::new(|| {
    vec![
        FieldDefinition::new(FieldName::FullName, InputKind::Text)
            .label("Full Name")
            .validator(Validator::required("Full Name is required")),
        FieldDefinition::new(FieldName::Email, InputKind::Email)
            .label("Email")
            .validator(Validator::required("Email is required"))
            .validator(Validator::pattern(EMAIL_RE.clone(), "Invalid email format")),
        FieldDefinition::new(FieldName::PhoneNumber, InputKind::Tel)
            .label("Phone Number")
            .validator(Validator::required("Phone Number is required"))
            .validator(Validator::pattern(
                PHONE_RE.clone(),
                "Phone Number must be a valid number",
            )),
        FieldDefinition::new(FieldName::Position, InputKind::Select { choices: POSITIONS })
            .label("Applying for Position")
            .validator(Validator::required("Position is required")),
        FieldDefinition::new(FieldName::RelevantExperience, InputKind::Number)
            .label("Relevant Experience (years)")
            .validator(Validator::required("Relevant Experience is required"))
            .validator(Validator::min(1.0, "Experience must be greater than 0")),
        FieldDefinition::new(FieldName::PortfolioUrl, InputKind::Url)
            .label("Portfolio URL")
            .validator(Validator::required("Portfolio URL is required"))
            .validator(Validator::pattern(URL_RE.clone(), "Invalid URL format")),
        FieldDefinition::new(FieldName::ManagementExperience, InputKind::Textarea)
            .label("Management Experience")
            .validator(Validator::required("Management Experience is required")),
        FieldDefinition::new(FieldName::Skills, InputKind::CheckboxGroup { choices: SKILLS })
            .label("Additional Skills:")
            .validator(Validator::min_selected(
                1,
                "At least one skill must be selected",
            )),
        FieldDefinition::new(FieldName::PreferredInterviewTime, InputKind::DateTimeLocal)
            .label("Preferred Interview Time")
            .validator(Validator::required("Preferred Interview Time is required")),
    ]
});

/// Returns every field definition in declaration order.
pub fn fields() -> &'static [FieldDefinition] {
    &FIELDS
}

/// Returns the definition of one field.
pub fn field(name: FieldName) -> &'static FieldDefinition {
    // FIELDS is declared in FieldName::ALL order.
    &FIELDS[name as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    #[test]
    fn test_registry_order_matches_field_names() {
        let names: Vec<FieldName> = fields().iter().map(|f| f.name).collect();
        assert_eq!(names, FieldName::ALL.to_vec());
        for name in FieldName::ALL {
            assert_eq!(field(name).name, name);
        }
    }

    #[test]
    fn test_every_field_has_validators() {
        assert!(fields().iter().all(|f| !f.validators.is_empty()));
    }

    #[test]
    fn test_email_pattern() {
        let v = &field(FieldName::Email).validators[1];
        assert!(v.validate(Some(&FieldValue::from("ada@x.com"))).is_ok());
        assert!(v.validate(Some(&FieldValue::from("a.b+c@mail.example.org"))).is_ok());
        assert!(v.validate(Some(&FieldValue::from("ada@x"))).is_err());
        assert!(v.validate(Some(&FieldValue::from("ada@x.museum"))).is_err());
        assert!(v.validate(Some(&FieldValue::from("ada x@y.com"))).is_err());
    }

    #[test]
    fn test_url_pattern() {
        let v = &field(FieldName::PortfolioUrl).validators[1];
        assert!(v.validate(Some(&FieldValue::from("https://ada.dev"))).is_ok());
        assert!(v.validate(Some(&FieldValue::from("http://x.io/work"))).is_ok());
        assert!(v.validate(Some(&FieldValue::from("chrome://settings"))).is_ok());
        let err = v.validate(Some(&FieldValue::from("ftp://x"))).unwrap_err();
        assert_eq!(err.message, "Invalid URL format");
        assert!(v.validate(Some(&FieldValue::from("https://"))).is_err());
    }

    #[test]
    fn test_url_pattern_rejects_line_terminators() {
        let v = &field(FieldName::PortfolioUrl).validators[1];
        assert!(v.validate(Some(&FieldValue::from("http://ab"))).is_ok());
        assert!(v.validate(Some(&FieldValue::from("http://a\r"))).is_err());
        assert!(v.validate(Some(&FieldValue::from("http://a\n"))).is_err());
        assert!(v.validate(Some(&FieldValue::from("http://a\u{2028}"))).is_err());
    }

    #[test]
    fn test_choice_lists() {
        assert_eq!(field(FieldName::Position).kind.choices(), POSITIONS);
        assert_eq!(field(FieldName::Skills).kind.choices(), SKILLS);
    }
}
