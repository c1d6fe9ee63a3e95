use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::validation::ValidationError;

/// A named input of the feedback form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Age,
    Gender,
    Comments,
}

static ALL_FIELDS: &[Field] = &[
    Field::FullName,
    Field::Email,
    Field::Age,
    Field::Gender,
    Field::Comments,
];

impl Field {
    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Returns the query-string key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Comments => "comments",
        }
    }

    /// Returns the human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Comments => "Comments",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A selectable gender option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

static ALL_GENDERS: &[Gender] = &[Gender::Male, Gender::Female, Gender::Other];

impl Gender {
    /// Returns the option text, which is also the submitted value.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Returns all options in display order.
    pub fn all() -> &'static [Gender] {
        ALL_GENDERS
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::all()
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or(ValidationError::GenderRequired)
    }
}

#[mutants::skip]
impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The in-progress form values, kept as raw text until submission.
///
/// Serializes with the query-string keys in form order, so
/// `serde_urlencoded` produces `fullName=..&email=..&age=..&gender=..&comments=..`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDraft {
    pub full_name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    pub comments: String,
}

impl FeedbackDraft {
    /// Creates a draft with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Comments => &self.comments,
        }
    }

    /// Replaces the value of `field`, leaving every other field untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::Comments => &mut self.comments,
        };
        *slot = value.into();
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
