//! Per-form error and touched state.

use indexmap::IndexMap;
use serde::Serialize;

/// Current error message per field.
///
/// A field without an entry has no error. Only the
/// [`FormController`](crate::FormController) mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    errors: IndexMap<String, String>,
}

impl FormErrors {
    /// The error of a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether a field has an error.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `(field, message)` pairs in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub(crate) fn remove(&mut self, field: &str) -> Option<String> {
        self.errors.shift_remove(field)
    }

    /// Stores `message` or clears the entry when there is none.
    pub(crate) fn apply(&mut self, field: &str, message: Option<String>) {
        match message {
            Some(message) => self.insert(field, message),
            None => {
                self.remove(field);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            errors: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Fields the user has interacted with (blurred at least once).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TouchedSet {
    touched: IndexMap<String, bool>,
}

impl TouchedSet {
    /// The touched flag of a field, if it was ever recorded.
    pub fn get(&self, field: &str) -> Option<bool> {
        self.touched.get(field).copied()
    }

    /// Whether the field has an entry.
    pub fn contains(&self, field: &str) -> bool {
        self.touched.contains_key(field)
    }

    /// Whether the field is marked touched.
    pub fn is_touched(&self, field: &str) -> bool {
        self.get(field).unwrap_or(false)
    }

    /// Number of recorded fields.
    pub fn len(&self) -> usize {
        self.touched.len()
    }

    /// Whether no field was recorded.
    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    /// `(field, touched)` pairs in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.touched.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub(crate) fn mark(&mut self, field: impl Into<String>) {
        self.touched.insert(field.into(), true);
    }

    pub(crate) fn clear(&mut self) {
        self.touched.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_sets_and_clears() {
        let mut errors = FormErrors::default();
        errors.apply("email", Some("Please enter a valid email address".into()));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));

        errors.apply("email", None);
        assert!(!errors.contains("email"));
        assert!(errors.is_empty());
    }

    #[test]
    fn errors_serialize_as_plain_object() {
        let errors: FormErrors = [("password", "password is required"), ("email", "bad")]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"password":"password is required","email":"bad"}"#
        );
    }

    #[test]
    fn touched_defaults_to_false() {
        let mut touched = TouchedSet::default();
        assert!(!touched.is_touched("name"));
        touched.mark("name");
        assert!(touched.is_touched("name"));
        assert_eq!(touched.iter().collect::<Vec<_>>(), [("name", true)]);
        touched.clear();
        assert_eq!(touched.len(), 0);
    }
}
