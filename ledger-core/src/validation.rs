//! Input validation helpers
//!
//! Form validation collects every failing field instead of stopping at the
//! first one, so the UI can show all messages at once.

use shared::error::{AppError, ErrorCode};
use std::fmt;
use thiserror::Error;

// ── Text length limits ──────────────────────────────────────────────

/// Party, quality and firm names
pub const MAX_NAME_LEN: usize = 200;

/// Remarks
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// A single failing form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field key (`"rate"`, `"customerName"`, ...)
    pub field: &'static str,
    pub code: ErrorCode,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors of one form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", summary(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    match errors {
        [] => "Validation failed".to_string(),
        [only] => only.message.clone(),
        [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, code: ErrorCode, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            code,
            message: message.into(),
        });
    }

    /// First message recorded for `field`
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(value)` when nothing failed
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors.to_string();
        let fields: serde_json::Map<String, serde_json::Value> = errors
            .errors
            .iter()
            .map(|e| (e.field.to_string(), e.message.clone().into()))
            .collect();
        let code = match errors.errors.as_slice() {
            [only] => only.code,
            _ => ErrorCode::ValidationFailed,
        };
        AppError::with_message(code, message).with_detail("fields", fields)
    }
}

// ── Field helpers ───────────────────────────────────────────────────

/// Required text: non-blank after trim and within the length limit.
/// Returns the trimmed value on success.
pub fn validate_required_text<'a>(
    errors: &mut ValidationErrors,
    value: &'a str,
    field: &'static str,
    label: &str,
    max_len: usize,
) -> Option<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, ErrorCode::RequiredField, format!("{label} is required"));
        return None;
    }
    if trimmed.len() > max_len {
        errors.push(
            field,
            ErrorCode::ValueOutOfRange,
            format!("{label} is too long ({} chars, max {max_len})", trimmed.len()),
        );
        return None;
    }
    Some(trimmed)
}

/// Optional text: blank becomes `None`, otherwise length-checked.
pub fn validate_optional_text(
    errors: &mut ValidationErrors,
    value: Option<&str>,
    field: &'static str,
    label: &str,
    max_len: usize,
) -> Option<String> {
    let trimmed = value.map(str::trim).filter(|v| !v.is_empty())?;
    if trimmed.len() > max_len {
        errors.push(
            field,
            ErrorCode::ValueOutOfRange,
            format!("{label} is too long ({} chars, max {max_len})", trimmed.len()),
        );
        return None;
    }
    Some(trimmed.to_string())
}

/// Required positive number typed into a text input
pub fn validate_positive_number(
    errors: &mut ValidationErrors,
    value: &str,
    field: &'static str,
    label: &str,
    code: ErrorCode,
) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, ErrorCode::RequiredField, format!("{label} is required"));
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if !n.is_finite() => {
            errors.push(field, code, format!("{label} must be a number"));
            None
        }
        Ok(n) if n <= 0.0 => {
            errors.push(field, code, format!("{label} must be greater than 0"));
            None
        }
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(field, code, format!("{label} must be a number"));
            None
        }
    }
}
