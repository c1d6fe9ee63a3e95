use super::draft::Field;

/// Shown in place of empty or missing comments.
pub const COMMENTS_PLACEHOLDER: &str = "N/A";

/// The read-only values reconstructed from a result location's query string.
///
/// Each field is `None` when its parameter was absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Submission {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub comments: Option<String>,
}

impl Submission {
    /// Builds a submission from decoded key/value pairs.
    ///
    /// Unknown keys are ignored. When a key repeats, the first value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut submission = Self::default();
        for (key, value) in pairs {
            let Some(field) = Field::all().iter().copied().find(|f| f.key() == key.as_ref())
            else {
                continue;
            };
            let slot = submission.slot_mut(field);
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        submission
    }

    /// Returns the decoded value of `field`, if its parameter was present.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => self.full_name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Age => self.age.as_deref(),
            Field::Gender => self.gender.as_deref(),
            Field::Comments => self.comments.as_deref(),
        }
    }

    /// Returns the text to display for `field`.
    ///
    /// Comments fall back to [`COMMENTS_PLACEHOLDER`] when absent or empty;
    /// every other field renders as nothing when absent.
    pub fn display_value(&self, field: Field) -> &str {
        match (field, self.get(field)) {
            (Field::Comments, None | Some("")) => COMMENTS_PLACEHOLDER,
            (_, value) => value.unwrap_or(""),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::Comments => &mut self.comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_maps_known_keys() {
        let submission = Submission::from_pairs([
            ("fullName", "Jane Doe"),
            ("email", "jane@x.com"),
            ("age", "30"),
            ("gender", "Female"),
            ("comments", "Great"),
        ]);
        assert_eq!(submission.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(submission.email.as_deref(), Some("jane@x.com"));
        assert_eq!(submission.age.as_deref(), Some("30"));
        assert_eq!(submission.gender.as_deref(), Some("Female"));
        assert_eq!(submission.comments.as_deref(), Some("Great"));
    }

    #[test]
    fn from_pairs_ignores_unknown_keys() {
        let submission = Submission::from_pairs([("utm_source", "mail"), ("age", "44")]);
        assert_eq!(submission.age.as_deref(), Some("44"));
        assert_eq!(submission.full_name, None);
    }

    #[test]
    fn from_pairs_first_value_wins() {
        let submission =
            Submission::from_pairs([("email", "first@x.com"), ("email", "second@x.com")]);
        assert_eq!(submission.email.as_deref(), Some("first@x.com"));
    }

    #[test]
    fn empty_comments_display_placeholder() {
        let submission = Submission::from_pairs([("comments", "")]);
        assert_eq!(submission.display_value(Field::Comments), "N/A");
    }

    #[test]
    fn missing_comments_display_placeholder() {
        let submission = Submission::default();
        assert_eq!(submission.display_value(Field::Comments), "N/A");
    }

    #[test]
    fn missing_other_fields_display_nothing() {
        let submission = Submission::default();
        for &field in &[Field::FullName, Field::Email, Field::Age, Field::Gender] {
            assert_eq!(submission.display_value(field), "", "{field:?}");
        }
    }

    #[test]
    fn present_values_display_verbatim() {
        let submission = Submission::from_pairs([("fullName", "  Jane  "), ("comments", "ok")]);
        assert_eq!(submission.display_value(Field::FullName), "  Jane  ");
        assert_eq!(submission.display_value(Field::Comments), "ok");
    }
}
