//! # Form models
//!
//! Each create/update screen binds its inputs to a plain struct of strings.
//! Submitting runs the `validator` derive rules, then parses numbers and dates
//! and applies cross-field checks, and finally builds the API payload.
//! Failures come back as [`FieldErrors`] for inline display next to each
//! input. Server-side validation errors are merged into the same map with
//! [`FieldErrors::from_api`].

use std::collections::BTreeMap;
use std::str::FromStr;

use api::ApiError;
use chrono::NaiveDate;
use validator::{Validate, ValidationErrors};

mod login;
mod records;
mod user;

pub use login::{ForgotPasswordForm, LoginForm, ResetPasswordForm};
pub use records::{BedRoomForm, DocumentForm, DocumentTypeForm, DonationForm, EventForm, InventoryForm};
pub use user::UserForm;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field name → first message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message unless the field already has one.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field errors reported by the server, keys converted to snake_case.
    pub fn from_api(err: &ApiError) -> Self {
        let mut errors = Self::new();
        for (field, message) in err.field_errors() {
            errors.insert(&snake_case(&field), message);
        }
        errors
    }

    /// `Ok(value)` when no errors were recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Self::new();
        for (field, errs) in errors.field_errors() {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("Invalid {}", field.replace('_', " ")));
            fields.insert(&field, message);
        }
        fields
    }
}

/// Run the derive rules, collecting failures instead of returning early.
fn check(form: &impl Validate) -> FieldErrors {
    match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors.into(),
    }
}

/// Trimmed text, `None` when blank.
pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse an `<input type="date">` value. Blank is `None`.
fn parse_date(errors: &mut FieldErrors, field: &str, value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, "Enter a valid date");
            None
        }
    }
}

fn require_date(errors: &mut FieldErrors, field: &str, value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        errors.insert(field, "Date is required");
        return None;
    }
    parse_date(errors, field, value)
}

/// Parse a whole number, ignoring thousands separators.
fn parse_number<N: FromStr>(errors: &mut FieldErrors, field: &str, value: &str) -> Option<N> {
    let digits: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ' '))
        .collect();
    if digits.is_empty() {
        errors.insert(field, "This field is required");
        return None;
    }
    match digits.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.insert(field, "Enter a whole number");
            None
        }
    }
}

fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
