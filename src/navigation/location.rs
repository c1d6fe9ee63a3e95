use std::fmt;

use super::error::NavigationError;
use crate::model::{FeedbackDraft, Submission};

/// Path of the feedback form screen.
pub const FORM_PATH: &str = "/";
/// Path of the submission result screen.
pub const RESULT_PATH: &str = "/success";

/// A path with an optional query string, e.g. `/success?fullName=Jane`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Option<String>,
}

impl Location {
    /// Creates a location from its parts.
    pub fn new(path: impl Into<String>, query: Option<String>) -> Self {
        let path = path.into();
        let path = if path.is_empty() {
            FORM_PATH.to_string()
        } else {
            path
        };
        Self { path, query }
    }

    /// The root location, where the form lives.
    pub fn root() -> Self {
        Self::new(FORM_PATH, None)
    }

    /// Parses `path[?query]`. An empty path means the root.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('?') {
            Some((path, query)) => Self::new(path, Some(query.to_string())),
            None => Self::new(raw, None),
        }
    }

    /// Builds the result location carrying every draft value in its query.
    pub fn for_submission(draft: &FeedbackDraft) -> Result<Self, NavigationError> {
        Ok(Self::new(RESULT_PATH, Some(encode_query(draft)?)))
    }

    /// Returns the path component.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the raw (still encoded) query string, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.query {
            Some(query) => write!(f, "{}?{query}", self.path),
            None => f.write_str(&self.path),
        }
    }
}

/// Encodes a draft as a query string, one pair per field, none omitted.
pub fn encode_query(draft: &FeedbackDraft) -> Result<String, NavigationError> {
    Ok(serde_urlencoded::to_string(draft)?)
}

/// Decodes a query string into the values shown on the result screen.
pub fn decode_query(query: &str) -> Result<Submission, NavigationError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
    Ok(Submission::from_pairs(pairs))
}

/// The screen a location resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The feedback form; always starts from an empty draft.
    Form,
    /// The result screen with the values decoded from the query.
    Result(Submission),
}

impl Route {
    /// Resolves a location to the screen that should be mounted.
    pub fn resolve(location: &Location) -> Result<Self, NavigationError> {
        match location.path() {
            FORM_PATH => Ok(Route::Form),
            RESULT_PATH => {
                let submission = decode_query(location.query().unwrap_or(""))?;
                Ok(Route::Result(submission))
            }
            other => Err(NavigationError::UnknownPath(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::Field;

    fn jane() -> FeedbackDraft {
        FeedbackDraft {
            full_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            age: "30".into(),
            gender: "Female".into(),
            comments: String::new(),
        }
    }

    #[derive(Debug, Clone)]
    struct AnyDraft(FeedbackDraft);

    impl Arbitrary for AnyDraft {
        fn arbitrary(g: &mut Gen) -> Self {
            AnyDraft(FeedbackDraft {
                full_name: String::arbitrary(g),
                email: String::arbitrary(g),
                age: String::arbitrary(g),
                gender: String::arbitrary(g),
                comments: String::arbitrary(g),
            })
        }
    }

    mod location {
        use super::*;

        #[test]
        fn parse_path_and_query() {
            let location = Location::parse("/success?fullName=Jane");
            assert_eq!(location.path(), "/success");
            assert_eq!(location.query(), Some("fullName=Jane"));
        }

        #[test]
        fn parse_path_only() {
            let location = Location::parse("/success");
            assert_eq!(location.path(), "/success");
            assert_eq!(location.query(), None);
        }

        #[test]
        fn parse_empty_is_root() {
            assert_eq!(Location::parse(""), Location::root());
        }

        #[test]
        fn parse_bare_query_uses_root_path() {
            let location = Location::parse("?a=b");
            assert_eq!(location.path(), "/");
            assert_eq!(location.query(), Some("a=b"));
        }

        #[test]
        fn display_round_trips_parse() {
            for raw in ["/", "/success", "/success?age=30&gender=Male"] {
                assert_eq!(Location::parse(raw).to_string(), raw);
            }
        }

        #[test]
        fn for_submission_targets_result_path() {
            let location = Location::for_submission(&jane()).unwrap();
            assert_eq!(location.path(), RESULT_PATH);
            assert!(location.query().is_some());
        }
    }

    mod query {
        use super::*;

        #[test]
        fn encodes_all_five_keys_in_order() {
            let query = encode_query(&jane()).unwrap();
            insta::assert_snapshot!(
                query,
                @"fullName=Jane+Doe&email=jane%40x.com&age=30&gender=Female&comments="
            );
        }

        #[test]
        fn empty_draft_keeps_every_key() {
            let query = encode_query(&FeedbackDraft::new()).unwrap();
            assert_eq!(query, "fullName=&email=&age=&gender=&comments=");
        }

        #[test]
        fn reserved_characters_are_percent_encoded() {
            let mut draft = jane();
            draft.comments = "a&b=c?d#e+f/g".into();
            let query = encode_query(&draft).unwrap();
            assert!(query.ends_with("comments=a%26b%3Dc%3Fd%23e%2Bf%2Fg"), "{query}");
        }

        #[test]
        fn decode_missing_keys_are_absent() {
            let submission = decode_query("fullName=Jane").unwrap();
            assert_eq!(submission.full_name.as_deref(), Some("Jane"));
            assert_eq!(submission.email, None);
        }

        #[test]
        fn decode_plus_and_percent_sequences() {
            let submission = decode_query("comments=caf%C3%A9+au+lait").unwrap();
            assert_eq!(submission.comments.as_deref(), Some("café au lait"));
        }

        #[test]
        fn decode_empty_query() {
            assert_eq!(decode_query("").unwrap(), Submission::default());
        }

        #[test]
        fn multiline_comments_survive() {
            let mut draft = jane();
            draft.comments = "line one\nline two".into();
            let submission = decode_query(&encode_query(&draft).unwrap()).unwrap();
            assert_eq!(submission.comments.as_deref(), Some("line one\nline two"));
        }

        #[quickcheck]
        fn round_trip_is_lossless(draft: AnyDraft) -> bool {
            let draft = draft.0;
            let Ok(query) = encode_query(&draft) else {
                return false;
            };
            let Ok(submission) = decode_query(&query) else {
                return false;
            };
            Field::all()
                .iter()
                .all(|&f| submission.get(f) == Some(draft.get(f)))
        }
    }

    mod route {
        use super::*;

        #[test]
        fn root_resolves_to_form() {
            assert_eq!(Route::resolve(&Location::root()).unwrap(), Route::Form);
        }

        #[test]
        fn root_ignores_query() {
            let location = Location::parse("/?fullName=Jane");
            assert_eq!(Route::resolve(&location).unwrap(), Route::Form);
        }

        #[test]
        fn success_resolves_with_submission() {
            let location = Location::for_submission(&jane()).unwrap();
            match Route::resolve(&location).unwrap() {
                Route::Result(submission) => {
                    assert_eq!(submission.full_name.as_deref(), Some("Jane Doe"));
                    assert_eq!(submission.comments.as_deref(), Some(""));
                    assert_eq!(submission.display_value(Field::Comments), "N/A");
                }
                other => panic!("expected Result, got {other:?}"),
            }
        }

        #[test]
        fn success_without_query_has_nothing() {
            let location = Location::parse("/success");
            assert_eq!(
                Route::resolve(&location).unwrap(),
                Route::Result(Submission::default())
            );
        }

        #[test]
        fn unknown_path_is_an_error() {
            let err = Route::resolve(&Location::parse("/admin")).unwrap_err();
            assert!(matches!(err, NavigationError::UnknownPath(ref p) if p == "/admin"));
        }
    }
}
