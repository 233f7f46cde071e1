//! Contact form validation
//!
//! Each field is checked independently. Required checks trim first, so
//! whitespace-only input counts as empty. A byte order mark counts as
//! whitespace. Length limits are measured in
//! characters on the raw value and, when exceeded, replace any earlier
//! message for that field.

use super::field::FieldName;
use super::form_state::FormFields;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Per-field error messages; a missing key means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Drop the error for one field, returning whether one was present
    pub fn clear_field(&mut self, field: FieldName) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Trim whitespace, including U+FEFF, from both ends
pub(super) fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Returns true if `email` looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate all contact fields
pub fn validate(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for field in FieldName::ALL {
        let value = fields.get(field);

        if trim_blank(value).is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        } else if field == FieldName::Email && !is_valid_email(value) {
            errors.insert(field, "Invalid email format");
        }

        if value.chars().count() > field.max_chars() {
            errors.insert(
                field,
                format!("{} must be under {} characters", field.label(), field.max_chars()),
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn errors_of(pairs: &[(FieldName, &str)]) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for (field, msg) in pairs {
            errors.insert(*field, *msg);
        }
        errors
    }

    #[test]
    fn test_valid_fields_have_no_errors() {
        let errors = validate(&FormFields::new("John", "john@example.com", "Hello there"));
        assert!(errors.is_valid());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_missing_name_only() {
        let errors = validate(&FormFields::new("", "a@b.com", "hi"));
        assert_eq!(errors, errors_of(&[(FieldName::Name, "Name is required")]));
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let errors = validate(&FormFields::new("   ", "\t", "\n \n"));
        assert_eq!(
            errors,
            errors_of(&[
                (FieldName::Name, "Name is required"),
                (FieldName::Email, "Email is required"),
                (FieldName::Message, "Message is required"),
            ])
        );
    }

    #[test]
    fn test_byte_order_mark_counts_as_empty() {
        let errors = validate(&FormFields::new("\u{FEFF}", "a@b.com", " \u{FEFF}\n"));
        assert_eq!(
            errors,
            errors_of(&[
                (FieldName::Name, "Name is required"),
                (FieldName::Message, "Message is required"),
            ])
        );
    }

    #[test]
    fn test_email_with_byte_order_mark_is_invalid() {
        assert!(!is_valid_email("\u{FEFF}a@b.com"));
        assert!(!is_valid_email("a@b\u{FEFF}.com"));
    }

    #[test]
    fn test_email_without_tld_is_invalid() {
        let errors = validate(&FormFields::new("Jo", "foo@bar", "hi"));
        assert_eq!(errors, errors_of(&[(FieldName::Email, "Invalid email format")]));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email(" a@b.com"));
    }

    #[test]
    fn test_name_too_long() {
        let errors = validate(&FormFields::new("x".repeat(101), "a@b.com", "hi"));
        assert_eq!(
            errors.get(FieldName::Name),
            Some("Name must be under 100 characters")
        );
    }

    #[test]
    fn test_name_at_limit_is_valid() {
        let errors = validate(&FormFields::new("x".repeat(100), "a@b.com", "hi"));
        assert!(errors.is_valid());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let errors = validate(&FormFields::new("é".repeat(100), "a@b.com", "hi"));
        assert!(errors.is_valid());
    }

    #[test]
    fn test_message_too_long() {
        let errors = validate(&FormFields::new("Jo", "a@b.com", "m".repeat(1001)));
        assert_eq!(
            errors.get(FieldName::Message),
            Some("Message must be under 1000 characters")
        );
    }

    #[test]
    fn test_length_error_replaces_format_error() {
        let long_email = format!("{}@nowhere", "a".repeat(120));
        let errors = validate(&FormFields::new("Jo", long_email, "hi"));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldName::Email),
            Some("Email must be under 100 characters")
        );
    }

    #[test]
    fn test_whitespace_only_over_limit_reports_length() {
        let errors = validate(&FormFields::new(" ".repeat(150), "a@b.com", "hi"));
        assert_eq!(
            errors.get(FieldName::Name),
            Some("Name must be under 100 characters")
        );
    }

    #[test]
    fn test_clear_field() {
        let mut errors = validate(&FormFields::default());
        assert_eq!(errors.len(), 3);
        assert!(errors.clear_field(FieldName::Email));
        assert!(!errors.clear_field(FieldName::Email));
        assert_eq!(errors.len(), 2);
        assert!(errors.get(FieldName::Email).is_none());
    }
}
