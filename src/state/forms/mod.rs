//! Form domain layer
//!
//! Field values, validation and outbound sanitization for the contact form.

mod field;
mod form_state;
mod sanitize;
mod validation;

pub use field::{FieldName, FormField};
pub use form_state::{ContactForm, Form, FormFields};
pub use sanitize::sanitize;
pub use validation::{validate, ValidationErrors};

#[cfg(test)]
pub use form_state::SEND_BUTTON_INDEX;
