//! Outbound payload sanitization

use super::form_state::FormFields;
use super::validation::trim_blank;

/// Characters stripped from every outbound value
pub const BLOCKED_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Remove blocked characters, then trim surrounding whitespace
pub fn sanitize_value(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|c| !BLOCKED_CHARS.contains(c))
        .collect();
    trim_blank(&kept).to_string()
}

/// Sanitize a full set of fields. The input is left untouched.
pub fn sanitize(fields: &FormFields) -> FormFields {
    FormFields {
        name: sanitize_value(&fields.name),
        email: sanitize_value(&fields.email),
        message: sanitize_value(&fields.message),
    }
}
