//! Field names, input kinds, and field definitions.
//!
//! A [`FieldDefinition`] pairs a [`FieldName`] with the [`InputKind`] that
//! collects it and the ordered [`Validator`]s that judge its value. The
//! definitions themselves are static; see [`registry`](crate::registry).

use std::fmt;
use std::str::FromStr;

use hireform_core::FormError;

use crate::validators::Validator;
use crate::value::FieldValue;

/// The nine fields of the job application form, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    Skills,
    PreferredInterviewTime,
}

impl FieldName {
    /// Every field, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::FullName,
        Self::Email,
        Self::PhoneNumber,
        Self::Position,
        Self::RelevantExperience,
        Self::PortfolioUrl,
        Self::ManagementExperience,
        Self::Skills,
        Self::PreferredInterviewTime,
    ];

    /// Returns the wire name used in rendered markup and submitted records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Position => "position",
            Self::RelevantExperience => "relevantExperience",
            Self::PortfolioUrl => "portfolioURL",
            Self::ManagementExperience => "managementExperience",
            Self::Skills => "skills",
            Self::PreferredInterviewTime => "preferredInterviewTime",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// The input element that collects a field, with its fixed choices if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// `<input type="text">`.
    Text,
    /// `<input type="email">`.
    Email,
    /// `<input type="tel">`.
    Tel,
    /// `<select>` over a fixed list of options.
    Select {
        /// The selectable option values.
        choices: &'static [&'static str],
    },
    /// `<input type="number">`.
    Number,
    /// `<input type="url">`.
    Url,
    /// `<textarea>`.
    Textarea,
    /// A group of `<input type="checkbox">` contributing to one set-valued field.
    CheckboxGroup {
        /// The checkbox values, in display order.
        choices: &'static [&'static str],
    },
    /// `<input type="datetime-local">`.
    DateTimeLocal,
}

impl InputKind {
    /// Returns the HTML element or input type name for this kind.
    pub const fn html_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Select { .. } => "select",
            Self::Number => "number",
            Self::Url => "url",
            Self::Textarea => "textarea",
            Self::CheckboxGroup { .. } => "checkbox",
            Self::DateTimeLocal => "datetime-local",
        }
    }

    /// Returns the fixed choices of a select or checkbox group.
    pub const fn choices(self) -> &'static [&'static str] {
        match self {
            Self::Select { choices } | Self::CheckboxGroup { choices } => choices,
            _ => &[],
        }
    }

    /// Describes the value shape this kind accepts, for error messages.
    pub const fn expected(self) -> &'static str {
        match self {
            Self::Number => "a finite number or numeric text",
            Self::CheckboxGroup { .. } => "a selection of declared choices",
            _ => "text",
        }
    }

    /// Returns `true` if `value` has a shape this kind can hold.
    ///
    /// Selects accept any text: a value outside the declared options is
    /// representable and simply matches no option. Numbers must be finite.
    pub fn accepts(self, value: &FieldValue) -> bool {
        match (self, value) {
            (Self::Number, FieldValue::Number(n)) => n.is_finite(),
            (Self::Number, FieldValue::Text(_)) => true,
            (Self::CheckboxGroup { choices }, FieldValue::Multi(members)) => members
                .iter()
                .all(|member| choices.contains(&member.as_str())),
            (Self::CheckboxGroup { .. } | Self::Number, _) => false,
            (_, value) => matches!(value, FieldValue::Text(_)),
        }
    }
}

/// Complete definition of one form field.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// The field name.
    pub name: FieldName,
    /// The input element collecting this field.
    pub kind: InputKind,
    /// Placeholder or group label shown with the input.
    pub label: &'static str,
    /// Validators, evaluated in order; the first failure wins.
    pub validators: Vec<Validator>,
}

impl FieldDefinition {
    /// Creates a definition with no validators, labelled by its wire name.
    pub fn new(name: FieldName, kind: InputKind) -> Self {
        Self {
            name,
            kind,
            label: name.as_str(),
            validators: Vec::new(),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Appends a validator.
    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}
