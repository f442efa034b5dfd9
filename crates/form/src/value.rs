//! Field values and the per-form value map.

use std::borrow::Cow;
use std::ops::Index;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The value held by one form field.
///
/// Deserializes from plain JSON: `null`, strings, numbers, booleans and
/// arrays of strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An explicit empty value.
    #[default]
    Null,
    /// Text input.
    Text(String),
    /// Numeric input.
    Number(f64),
    /// Checkbox / toggle input.
    Bool(bool),
    /// Multi-select input.
    List(Vec<String>),
}

impl FieldValue {
    /// `Null` or empty text. Missing values count as blank as well, see
    /// [`FieldValue::is_blank_or_missing`].
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Blank check that treats a missing value (`None`) as blank.
    pub fn is_blank_or_missing(value: Option<&Self>) -> bool {
        value.is_none_or(Self::is_blank)
    }

    /// Whether the value counts as "filled in": empty text, `null`, `false`,
    /// zero and `NaN` do not.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
            Self::List(_) => true,
        }
    }

    /// Returns the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number` value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String form used when comparing two fields.
    ///
    /// Integral numbers print without a fraction, lists are joined with `,`
    /// and `Null` prints as `null`.
    pub fn to_form_string(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed("null"),
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
            Self::List(items) => Cow::Owned(items.join(",")),
        }
    }

    /// String form of a possibly missing value; missing prints as `undefined`.
    pub fn coerce(value: Option<&Self>) -> Cow<'_, str> {
        value.map_or(Cow::Borrowed("undefined"), Self::to_form_string)
    }
}

fn format_number(n: f64) -> String {
    if n == 0.0 {
        // covers -0.0
        "0".to_owned()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else {
        // f64's Display already drops the trailing `.0` and prints `NaN`
        n.to_string()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// FORM VALUES
// ============================================================================

/// Current values of one form, keyed by field name.
///
/// Keeps insertion order so iteration matches the order fields were declared.
/// A field missing from the map is "undefined".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: IndexMap<String, FieldValue>,
}

impl FormValues {
    /// Create an empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by field name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Set a value for a field, returning the previous one.
    pub fn set(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.values.insert(field.into(), value.into())
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Remove a value, returning it if it existed.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.values.shift_remove(field)
    }

    /// Check whether a value exists for the given field.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Iterate over field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over `(field, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of values stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Try to get a value as text.
    #[must_use]
    pub fn get_text(&self, field: &str) -> Option<&str> {
        self.values.get(field)?.as_text()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Index<&str> for FormValues {
    type Output = FieldValue;

    fn index(&self, field: &str) -> &Self::Output {
        &self.values[field]
    }
}

/// Builds a [`FormValues`] from `field => value` pairs.
///
/// ```rust,ignore
/// let values = form_values! {
///     "email" => "a@b.com",
///     "age" => 42,
///     "newsletter" => true,
/// };
/// ```
#[macro_export]
macro_rules! form_values {
    () => { $crate::FormValues::new() };
    ($($field:expr => $value:expr),+ $(,)?) => {{
        let mut values = $crate::FormValues::new();
        $( values.set($field, $value); )+
        values
    }};
}
