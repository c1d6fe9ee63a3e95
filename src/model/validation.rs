use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::draft::{FeedbackDraft, Field, Gender};

/// Lowest accepted age, inclusive.
pub const MIN_AGE: i64 = 10;
/// Highest accepted age, inclusive.
pub const MAX_AGE: i64 = 100;

/// Broad category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    OutOfRange,
}

/// Validation errors for feedback form fields.
///
/// The `Display` text is the message shown under the failing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full Name is required.")]
    FullNameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Invalid email.")]
    InvalidEmail,
    /// Empty, non-numeric and out-of-range ages share one message.
    #[error("Age must be 10–100.")]
    AgeOutOfRange,
    #[error("Please select a gender.")]
    GenderRequired,
}

impl ValidationError {
    /// Returns the field this error belongs to.
    pub fn field(self) -> Field {
        match self {
            Self::FullNameRequired => Field::FullName,
            Self::EmailRequired | Self::InvalidEmail => Field::Email,
            Self::AgeOutOfRange => Field::Age,
            Self::GenderRequired => Field::Gender,
        }
    }

    /// Returns the category of this error.
    pub fn kind(self) -> ErrorKind {
        match self {
            Self::FullNameRequired | Self::EmailRequired | Self::GenderRequired => {
                ErrorKind::Required
            }
            Self::InvalidEmail => ErrorKind::InvalidFormat,
            Self::AgeOutOfRange => ErrorKind::OutOfRange,
        }
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid hardcoded regex"));

/// Validates a full name: must contain something other than whitespace.
pub fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::FullNameRequired)
    } else {
        Ok(())
    }
}

/// Validates an email address.
///
/// Blank input is `Required`; otherwise the text must contain
/// `something@something.something` with no whitespace in each part.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        Err(ValidationError::EmailRequired)
    } else if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Parses and validates an age in `[MIN_AGE, MAX_AGE]`, returning it.
///
/// Only the leading integer counts, so `"30.5"` is read as 30.
pub fn validate_age(age: &str) -> Result<u8, ValidationError> {
    let parsed = parse_leading_int(age).ok_or(ValidationError::AgeOutOfRange)?;
    if !(MIN_AGE..=MAX_AGE).contains(&parsed) {
        return Err(ValidationError::AgeOutOfRange);
    }
    u8::try_from(parsed).map_err(|_| ValidationError::AgeOutOfRange)
}

/// Reads an optionally signed run of ASCII digits after leading whitespace,
/// ignoring whatever follows. Saturates instead of overflowing.
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let value = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

/// Validates a gender selection, returning the chosen option.
pub fn validate_gender(gender: &str) -> Result<Gender, ValidationError> {
    gender.parse()
}

/// Errors for the fields currently failing validation, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    /// Creates an empty error record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` against its field, replacing any previous one.
    pub fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error);
    }

    /// Returns the error for `field`, if it is failing.
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// Returns the user-facing message for `field`, if it is failing.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    /// Returns `true` if no field is failing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Removes every recorded error.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates over failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(&f, &e)| (f, e))
    }
}

/// Checks every field of `draft` and records each failure.
///
/// Fields are validated independently; one failure never hides another.
pub fn validate_draft(draft: &FeedbackDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Err(e) = validate_full_name(&draft.full_name) {
        errors.insert(e);
    }
    if let Err(e) = validate_email(&draft.email) {
        errors.insert(e);
    }
    if let Err(e) = validate_age(&draft.age) {
        errors.insert(e);
    }
    if let Err(e) = validate_gender(&draft.gender) {
        errors.insert(e);
    }
    errors
}
