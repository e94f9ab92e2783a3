//! Field validation
//!
//! Rules are checked in a fixed order and the first failure wins.

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::value_objects::{FieldValue, FormField};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const NOT_EMPTY_MESSAGE: &str = "This field cannot be empty";
pub const EMAIL_MESSAGE: &str = "Invalid email format";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 8 characters and contain a number";

const PASSWORD_MIN_CHARS: usize = 8;

/// Field validator domain service
pub struct FieldValidator;

impl FieldValidator {
    /// Validate a candidate value, returning the first failing rule's message.
    ///
    /// A field without any `validation_rules` always passes, even when it is
    /// marked required.
    pub fn validate(field: &FormField, value: Option<&FieldValue>) -> Option<String> {
        let rules = field.validation_rules.as_ref()?;
        let truthy = value.map(FieldValue::is_truthy).unwrap_or(false);
        let text = value.and_then(FieldValue::as_text);

        if field.required && !truthy {
            return Some(REQUIRED_MESSAGE.to_string());
        }
        if rules.not_empty.unwrap_or(false) && !truthy {
            return Some(NOT_EMPTY_MESSAGE.to_string());
        }

        let Some(text) = text else {
            return None;
        };
        let len = utf16_len(text);

        // Zero limits count as unset
        if let Some(min) = rules.min_length.filter(|&n| n > 0) {
            if len < min as usize {
                return Some(format!("Minimum length is {}", min));
            }
        }
        if let Some(max) = rules.max_length.filter(|&n| n > 0) {
            if len > max as usize {
                return Some(format!("Maximum length is {}", max));
            }
        }
        if rules.email.unwrap_or(false) && !is_email(text) {
            return Some(EMAIL_MESSAGE.to_string());
        }
        if rules.password.unwrap_or(false) && !is_password(text) {
            return Some(PASSWORD_MESSAGE.to_string());
        }
        None
    }
}

/// Length in UTF-16 code units, as browsers report it
fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

fn is_email(text: &str) -> bool {
    email_pattern().is_match(text)
}

/// At least eight UTF-16 code units on a single line, one of them an ASCII
/// digit
fn is_password(text: &str) -> bool {
    let single_line = !text
        .chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'));
    single_line
        && utf16_len(text) >= PASSWORD_MIN_CHARS
        && text.chars().any(|c| c.is_ascii_digit())
}
