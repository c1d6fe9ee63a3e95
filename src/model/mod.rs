mod draft;
mod submission;
mod validation;

pub use draft::{FeedbackDraft, Field, Gender};
pub use submission::{COMMENTS_PLACEHOLDER, Submission};
pub use validation::{
    ErrorKind, FieldErrors, MAX_AGE, MIN_AGE, ValidationError, validate_age, validate_draft,
    validate_email, validate_full_name, validate_gender,
};
