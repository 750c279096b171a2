// src/shared/validation.rs
use std::collections::BTreeMap;

use email_address::EmailAddress;
use serde::Serialize;

/// Width of every email column.
pub const MAX_EMAIL_LEN: usize = 254;

/// Per-field validation messages, serialized as `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Hands back `value` only when no field failed.
    pub fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Trims and checks a required text field. Returns the trimmed value
    /// (possibly empty when an error was recorded).
    pub fn required_text(&mut self, field: &str, value: &str, max_len: usize) -> String {
        let value = value.trim();

        if value.is_empty() {
            self.add(field, "This field may not be blank.");
        } else if value.chars().count() > max_len {
            self.add(
                field,
                &format!("Ensure this field has no more than {max_len} characters."),
            );
        }

        value.to_string()
    }

    /// Optional text: blank collapses to `None`.
    pub fn optional_text(&mut self, field: &str, value: Option<&str>, max_len: usize) -> Option<String> {
        let value = value.map(str::trim).filter(|v| !v.is_empty())?;

        if value.chars().count() > max_len {
            self.add(
                field,
                &format!("Ensure this field has no more than {max_len} characters."),
            );
        }

        Some(value.to_string())
    }

    /// Required email, trimmed but otherwise kept as submitted.
    pub fn required_email(&mut self, field: &str, value: &str) -> String {
        let value = value.trim();

        if value.is_empty() {
            self.add(field, "This field may not be blank.");
        } else if value.chars().count() > MAX_EMAIL_LEN {
            self.add(
                field,
                &format!("Ensure this field has no more than {MAX_EMAIL_LEN} characters."),
            );
        } else if !EmailAddress::is_valid(value) {
            self.add(field, "Enter a valid email address.");
        }

        value.to_string()
    }

    pub fn optional_url(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let value = value.map(str::trim).filter(|v| !v.is_empty())?;

        if !(value.starts_with("http://") || value.starts_with("https://")) {
            self.add(field, "Enter a valid URL.");
        }

        Some(value.to_string())
    }

    pub fn in_range(&mut self, field: &str, value: i32, min: i32, max: i32) {
        if value < min || value > max {
            self.add(
                field,
                &format!("Ensure this value is between {min} and {max}."),
            );
        }
    }

    pub fn non_negative(&mut self, field: &str, value: i32) {
        if value < 0 {
            self.add(field, "Ensure this value is greater than or equal to 0.");
        }
    }
}
