//! URL-style locations, query-string encoding, and routing.
//!
//! A [`Location`] is a path plus an optional query string. Submitted values
//! travel from the form screen to the result screen only inside the query,
//! encoded as `application/x-www-form-urlencoded`.

mod error;
mod location;
mod router;

pub use error::NavigationError;
pub use location::{FORM_PATH, Location, RESULT_PATH, Route, decode_query, encode_query};
pub use router::{Navigator, Router};
