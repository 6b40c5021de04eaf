//! HTML rendering of the form and its submission summary.
//!
//! Each visible field renders as a `form-group` holding its input element
//! and, when an error is surfaced, a `<p class="error">` directly below the
//! input. Hidden fields are not rendered at all.

use hireform_core::FormResult;

use crate::fields::{FieldDefinition, InputKind};
use crate::form::JobApplicationForm;
use crate::registry;
use crate::submission::SubmittedRecord;
use crate::value::FieldValue;

/// Renders the whole form, followed by the summary when a record exists.
pub fn render_form(form: &JobApplicationForm) -> FormResult<String> {
    let mut html = String::from(r#"<div class="form-container"><h1>Job Application Form</h1><form>"#);

    for field in form.visible_fields() {
        let def = registry::field(field);
        html.push_str(r#"<div class="form-group">"#);
        html.push_str(&render_input(def, form.value(field)));
        if let Some(message) = form.error(field) {
            html.push_str(&render_error(message));
        }
        html.push_str("</div>");
    }

    html.push_str(r#"<button type="submit">Submit</button></form>"#);
    if let Some(record) = form.record() {
        html.push_str(&render_summary(record, form.settings().summary_indent)?);
    }
    html.push_str("</div>");
    Ok(html)
}

/// Renders the input element of one field with its current value.
pub fn render_input(def: &FieldDefinition, value: Option<&FieldValue>) -> String {
    let name = def.name.as_str();
    let label = escape_html(def.label);
    let current = value.map(ToString::to_string).unwrap_or_default();

    match def.kind {
        InputKind::Select { choices } => {
            let mut options = format!(r#"<option value="">{label}</option>"#);
            for choice in choices {
                let selected = if *choice == current { " selected" } else { "" };
                options.push_str(&format!(
                    r#"<option value="{choice}"{selected}>{choice}</option>"#
                ));
            }
            format!(r#"<select name="{name}">{options}</select>"#)
        }
        InputKind::Textarea => format!(
            r#"<textarea name="{name}" placeholder="{label}">{}</textarea>"#,
            escape_html(&current)
        ),
        InputKind::CheckboxGroup { choices } => {
            let checked_members = value.and_then(FieldValue::as_multi).unwrap_or_default();
            let mut html = format!("<label>{label}</label><div>");
            for choice in choices {
                let checked = if checked_members.iter().any(|m| m == *choice) {
                    " checked"
                } else {
                    ""
                };
                html.push_str(&format!(
                    r#"<label><input type="checkbox" name="{name}" value="{choice}"{checked} /> {choice}</label>"#
                ));
            }
            html.push_str("</div>");
            html
        }
        kind => format!(
            r#"<input type="{}" name="{name}" placeholder="{label}" value="{}" />"#,
            kind.html_type(),
            escape_html(&current)
        ),
    }
}

/// Renders one inline error message.
pub fn render_error(message: &str) -> String {
    format!(r#"<p class="error">{}</p>"#, escape_html(message))
}

/// Renders the success block for a submitted record.
pub fn render_summary(record: &SubmittedRecord, indent: usize) -> FormResult<String> {
    let json = record.to_pretty_json(indent)?;
    Ok(format!(
        r#"<div class="form-summary"><h2>Form Submitted Successfully!</h2><pre>{}</pre></div>"#,
        escape_html(&json)
    ))
}

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their HTML entity equivalents.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
