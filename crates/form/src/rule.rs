//! Per-field rules and the rule set of a form.
//!
//! A [`FieldRule`] bundles the optional rule categories for one field. They
//! are always checked in the same order and the first failure wins:
//!
//! 1. `required`
//! 2. `email`
//! 3. `min_length`
//! 4. `max_length`
//! 5. `pattern`
//! 6. `min` / `max`
//! 7. `match`
//! 8. `custom`

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use wings_validator::foundation::{Validate, ValidationError};
use wings_validator::prelude::{Email, MatchesRegex, Max, MaxLength, Min, MinLength, WithMessage};

use crate::value::{FieldValue, FormValues};

/// Signature of a caller-supplied check: `(value, all_values) -> error`.
pub type CustomCheck =
    Arc<dyn Fn(Option<&FieldValue>, &FormValues) -> Option<String> + Send + Sync>;

const DEFAULT_EMAIL_MESSAGE: &str = "Please enter a valid email address";

// ============================================================================
// RULE PARTS
// ============================================================================

/// The `required` category: fails on missing, `null` or empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Required {
    message: Option<String>,
}

impl Required {
    /// The message reported for `field`.
    pub fn message_for(&self, field: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("{field} is required"))
    }
}

/// The `match` category: the field must equal another field of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchField {
    field: String,
    message: Option<String>,
}

impl MatchField {
    /// Name of the field this one must equal.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The message reported when the values differ.
    pub fn message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("Must match {}", self.field))
    }
}

// ============================================================================
// FIELD RULE
// ============================================================================

/// The validation contract for one field.
///
/// # Examples
///
/// ```rust,ignore
/// use wings_form::FieldRule;
///
/// let password = FieldRule::new().required().min_length(6);
/// let confirm = FieldRule::new()
///     .required_with("Please confirm your password")
///     .matches_with("password", "Passwords do not match");
/// ```
#[derive(Clone, Default)]
pub struct FieldRule {
    required: Option<Required>,
    email: Option<WithMessage<Email>>,
    min_length: Option<WithMessage<MinLength>>,
    max_length: Option<WithMessage<MaxLength>>,
    pattern: Option<WithMessage<MatchesRegex>>,
    min: Option<WithMessage<Min<f64>>>,
    max: Option<WithMessage<Max<f64>>>,
    matches: Option<MatchField>,
    custom: Option<CustomCheck>,
}

impl FieldRule {
    /// A rule with no categories; every value passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value must be present and non-empty.
    pub fn required(self) -> Self {
        self.required_as(None)
    }

    /// [`required`](Self::required) with a custom message.
    pub fn required_with(self, message: impl Into<String>) -> Self {
        self.required_as(Some(message.into()))
    }

    pub(crate) fn required_as(mut self, message: Option<String>) -> Self {
        self.required = Some(Required { message });
        self
    }

    /// Filled-in values must look like `local@domain.tld`.
    pub fn email(self) -> Self {
        self.email_as(None)
    }

    /// [`email`](Self::email) with a custom message.
    pub fn email_with(self, message: impl Into<String>) -> Self {
        self.email_as(Some(message.into()))
    }

    pub(crate) fn email_as(mut self, message: Option<String>) -> Self {
        self.email = Some(WithMessage::maybe(Email, message));
        self
    }

    /// Text must have at least `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        self.min_length_as(min, None)
    }

    /// [`min_length`](Self::min_length) with a custom message.
    pub fn min_length_with(self, min: usize, message: impl Into<String>) -> Self {
        self.min_length_as(min, Some(message.into()))
    }

    pub(crate) fn min_length_as(mut self, min: usize, message: Option<String>) -> Self {
        self.min_length = Some(WithMessage::maybe(MinLength::new(min), message));
        self
    }

    /// Text must have at most `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        self.max_length_as(max, None)
    }

    /// [`max_length`](Self::max_length) with a custom message.
    pub fn max_length_with(self, max: usize, message: impl Into<String>) -> Self {
        self.max_length_as(max, Some(message.into()))
    }

    pub(crate) fn max_length_as(mut self, max: usize, message: Option<String>) -> Self {
        self.max_length = Some(WithMessage::maybe(MaxLength::new(max), message));
        self
    }

    /// Text must match `pattern` (unanchored).
    pub fn pattern(self, pattern: regex::Regex) -> Self {
        self.pattern_as(pattern, None)
    }

    /// [`pattern`](Self::pattern) with a custom message.
    pub fn pattern_with(self, pattern: regex::Regex, message: impl Into<String>) -> Self {
        self.pattern_as(pattern, Some(message.into()))
    }

    pub(crate) fn pattern_as(mut self, pattern: regex::Regex, message: Option<String>) -> Self {
        self.pattern = Some(WithMessage::maybe(MatchesRegex::from(pattern), message));
        self
    }

    /// Numbers must be at least `min`.
    pub fn min(self, min: f64) -> Self {
        self.min_as(min, None)
    }

    /// [`min`](Self::min) with a custom message.
    pub fn min_with(self, min: f64, message: impl Into<String>) -> Self {
        self.min_as(min, Some(message.into()))
    }

    pub(crate) fn min_as(mut self, min: f64, message: Option<String>) -> Self {
        self.min = Some(WithMessage::maybe(Min::new(min), message));
        self
    }

    /// Numbers must be at most `max`.
    pub fn max(self, max: f64) -> Self {
        self.max_as(max, None)
    }

    /// [`max`](Self::max) with a custom message.
    pub fn max_with(self, max: f64, message: impl Into<String>) -> Self {
        self.max_as(max, Some(message.into()))
    }

    pub(crate) fn max_as(mut self, max: f64, message: Option<String>) -> Self {
        self.max = Some(WithMessage::maybe(Max::new(max), message));
        self
    }

    /// Value must equal the value of `field` once both are stringified.
    pub fn matches(self, field: impl Into<String>) -> Self {
        self.matches_as(field.into(), None)
    }

    /// [`matches`](Self::matches) with a custom message.
    pub fn matches_with(self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.matches_as(field.into(), Some(message.into()))
    }

    pub(crate) fn matches_as(mut self, field: String, message: Option<String>) -> Self {
        self.matches = Some(MatchField { field, message });
        self
    }

    /// Runs `check` after every other category has passed. Its result is
    /// reported verbatim.
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(Option<&FieldValue>, &FormValues) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(check));
        self
    }

    /// The `match` category, if configured.
    pub fn match_field(&self) -> Option<&MatchField> {
        self.matches.as_ref()
    }

    /// Whether the `required` category is configured.
    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Checks `value` (the current value of `field`) against this rule.
    ///
    /// `all` is the full value snapshot used by `match` and `custom`; when it
    /// is `None` the other field of a `match` is treated as missing.
    pub fn evaluate(
        &self,
        field: &str,
        value: Option<&FieldValue>,
        all: Option<&FormValues>,
    ) -> Option<String> {
        let text = value.and_then(FieldValue::as_text);
        let number = value.and_then(FieldValue::as_number);

        self.check_required(field, value)
            .or_else(|| self.check_email(value))
            .or_else(|| run(self.min_length.as_ref(), text))
            .or_else(|| run(self.max_length.as_ref(), text))
            .or_else(|| run(self.pattern.as_ref(), text))
            .or_else(|| run(self.min.as_ref(), number.as_ref()))
            .or_else(|| run(self.max.as_ref(), number.as_ref()))
            .or_else(|| self.check_match(value, all))
            .or_else(|| self.check_custom(value, all))
    }

    fn check_required(&self, field: &str, value: Option<&FieldValue>) -> Option<String> {
        let required = self.required.as_ref()?;
        FieldValue::is_blank_or_missing(value).then(|| required.message_for(field))
    }

    fn check_email(&self, value: Option<&FieldValue>) -> Option<String> {
        let email = self.email.as_ref()?;
        let value = value.filter(|v| v.is_truthy())?;
        match value.as_text() {
            Some(text) => email.validate(text).err().map(ValidationError::into_message),
            None => Some(
                email
                    .message()
                    .unwrap_or(DEFAULT_EMAIL_MESSAGE)
                    .to_owned(),
            ),
        }
    }

    fn check_match(&self, value: Option<&FieldValue>, all: Option<&FormValues>) -> Option<String> {
        let rule = self.matches.as_ref()?;
        let value = value?;
        let other = all.and_then(|values| values.get(&rule.field));
        (value.to_form_string() != FieldValue::coerce(other)).then(|| rule.message())
    }

    fn check_custom(&self, value: Option<&FieldValue>, all: Option<&FormValues>) -> Option<String> {
        let check = self.custom.as_ref()?;
        match all {
            Some(all) => check(value, all),
            None => check(value, &FormValues::new()),
        }
    }
}

/// Runs one validator-backed category when the value has the right shape.
fn run<V, T>(check: Option<&V>, input: Option<&T>) -> Option<String>
where
    V: Validate<Input = T>,
    T: ?Sized,
{
    let (check, input) = (check?, input?);
    check.validate(input).err().map(ValidationError::into_message)
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("email", &self.email.is_some())
            .field("min_length", &self.min_length.as_ref().map(|c| c.inner().min))
            .field("max_length", &self.max_length.as_ref().map(|c| c.inner().max))
            .field(
                "pattern",
                &self.pattern.as_ref().map(|c| c.inner().pattern.as_str()),
            )
            .field("min", &self.min.as_ref().map(|c| c.inner().min))
            .field("max", &self.max.as_ref().map(|c| c.inner().max))
            .field("matches", &self.matches)
            .field("custom", &self.custom.as_ref().map(|_| "<function>"))
            .finish()
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Field name to [`FieldRule`] mapping for one form.
///
/// Fields without an entry are never validated.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: IndexMap<String, FieldRule>,
}

impl RuleSet {
    /// An empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.insert(name, rule);
        self
    }

    /// Adds or replaces the rule of a field.
    pub fn insert(&mut self, name: impl Into<String>, rule: FieldRule) -> Option<FieldRule> {
        self.rules.insert(name.into(), rule)
    }

    /// The rule of a field.
    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.rules.get(name)
    }

    /// Whether a field has a rule.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// `(field, rule)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields with a rule.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no field has a rule.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks one field value. Fields without a rule always pass.
    pub fn evaluate(
        &self,
        field: &str,
        value: Option<&FieldValue>,
        all: Option<&FormValues>,
    ) -> Option<String> {
        self.rules.get(field)?.evaluate(field, value, all)
    }
}

impl<K: Into<String>> FromIterator<(K, FieldRule)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, FieldRule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_values;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    #[test]
    fn field_without_rule_always_passes() {
        let rules = RuleSet::new().field("email", FieldRule::new().required());
        assert_eq!(rules.evaluate("nickname", None, None), None);
        assert_eq!(rules.evaluate("nickname", Some(&text("")), None), None);
    }

    #[test]
    fn empty_rule_passes_everything() {
        let rule = FieldRule::new();
        assert_eq!(rule.evaluate("x", None, None), None);
        assert_eq!(rule.evaluate("x", Some(&FieldValue::Null), None), None);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(FieldValue::Null))]
    #[case(Some(FieldValue::from("")))]
    fn required_default_message(#[case] value: Option<FieldValue>) {
        let rule = FieldRule::new().required();
        assert_eq!(
            rule.evaluate("x", value.as_ref(), None).as_deref(),
            Some("x is required")
        );
    }

    #[test]
    fn required_custom_message() {
        let rule = FieldRule::new().required_with("Name needed");
        assert_eq!(
            rule.evaluate("name", Some(&text("")), None).as_deref(),
            Some("Name needed")
        );
    }

    #[test]
    fn required_accepts_zero_and_false() {
        let rule = FieldRule::new().required();
        assert_eq!(rule.evaluate("n", Some(&FieldValue::from(0)), None), None);
        assert_eq!(rule.evaluate("b", Some(&FieldValue::from(false)), None), None);
    }

    #[test]
    fn email_rule() {
        let rule = FieldRule::new().email();
        assert_eq!(
            rule.evaluate("email", Some(&text("a@b")), None).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(rule.evaluate("email", Some(&text("a@b.com")), None), None);
    }

    #[test]
    fn email_skips_empty_values() {
        let rule = FieldRule::new().email();
        assert_eq!(rule.evaluate("email", Some(&text("")), None), None);
        assert_eq!(rule.evaluate("email", None, None), None);
    }

    #[test]
    fn email_rejects_truthy_non_text() {
        let rule = FieldRule::new().email_with("Bad address");
        assert_eq!(
            rule.evaluate("email", Some(&FieldValue::from(42)), None)
                .as_deref(),
            Some("Bad address")
        );
        assert_eq!(
            FieldRule::new()
                .email()
                .evaluate("email", Some(&FieldValue::from(true)), None)
                .as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn min_length_rule() {
        let rule = FieldRule::new().min_length(6);
        assert_eq!(
            rule.evaluate("password", Some(&text("abc")), None).as_deref(),
            Some("Must be at least 6 characters")
        );
        assert_eq!(rule.evaluate("password", Some(&text("abcdef")), None), None);
    }

    #[test]
    fn max_length_rule_with_message() {
        let rule = FieldRule::new().max_length_with(3, "Keep it short");
        assert_eq!(
            rule.evaluate("code", Some(&text("abcd")), None).as_deref(),
            Some("Keep it short")
        );
        assert_eq!(
            FieldRule::new()
                .max_length(3)
                .evaluate("code", Some(&text("abcd")), None)
                .as_deref(),
            Some("Must be no more than 3 characters")
        );
    }

    #[test]
    fn length_and_pattern_skip_non_text() {
        let rule = FieldRule::new()
            .min_length(3)
            .max_length(1)
            .pattern(regex::Regex::new("^x$").unwrap());
        assert_eq!(rule.evaluate("n", Some(&FieldValue::from(12345)), None), None);
        assert_eq!(rule.evaluate("n", Some(&FieldValue::Null), None), None);
    }

    #[test]
    fn pattern_rule() {
        let rule = FieldRule::new().pattern(regex::Regex::new(r"^\d{4}$").unwrap());
        assert_eq!(
            rule.evaluate("pin", Some(&text("12a4")), None).as_deref(),
            Some("Invalid format")
        );
        assert_eq!(rule.evaluate("pin", Some(&text("1234")), None), None);
    }

    #[test]
    fn numeric_bounds_apply_to_numbers_only() {
        let rule = FieldRule::new().min(1.0).max_with(100.0, "Too many seats");
        assert_eq!(
            rule.evaluate("seats", Some(&FieldValue::from(0)), None)
                .as_deref(),
            Some("Must be at least 1")
        );
        assert_eq!(
            rule.evaluate("seats", Some(&FieldValue::from(101)), None)
                .as_deref(),
            Some("Too many seats")
        );
        assert_eq!(rule.evaluate("seats", Some(&FieldValue::from(50)), None), None);
        assert_eq!(rule.evaluate("seats", Some(&text("0")), None), None);
    }

    #[test]
    fn match_rule() {
        let rule = FieldRule::new().matches("password");
        let same = form_values! { "password" => "p1", "confirm" => "p1" };
        let different = form_values! { "password" => "p1", "confirm" => "p2" };

        assert_eq!(rule.evaluate("confirm", Some(&text("p1")), Some(&same)), None);
        assert_eq!(
            rule.evaluate("confirm", Some(&text("p2")), Some(&different))
                .as_deref(),
            Some("Must match password")
        );
    }

    #[test]
    fn match_compares_string_forms() {
        let rule = FieldRule::new().matches("count");
        let values = form_values! { "count" => 5 };
        assert_eq!(rule.evaluate("copy", Some(&text("5")), Some(&values)), None);
    }

    #[test]
    fn match_without_snapshot_compares_against_missing() {
        let rule = FieldRule::new().matches_with("password", "Passwords differ");
        assert_eq!(
            rule.evaluate("confirm", Some(&text("p1")), None).as_deref(),
            Some("Passwords differ")
        );
        // a missing value is never compared
        assert_eq!(rule.evaluate("confirm", None, None), None);
    }

    #[test]
    fn first_failure_wins() {
        let rule = FieldRule::new()
            .required()
            .pattern(regex::Regex::new("^[a-z]+$").unwrap());
        assert_eq!(
            rule.evaluate("slug", Some(&text("")), None).as_deref(),
            Some("slug is required")
        );

        let rule = FieldRule::new().required().email().min_length(50);
        assert_eq!(
            rule.evaluate("email", Some(&text("nope")), None).as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn custom_runs_last_and_sees_all_values() {
        let rule = FieldRule::new().min_length(2).custom(|value, all| {
            let taken = all.get_text("taken").unwrap_or_default();
            (value.and_then(FieldValue::as_text) == Some(taken)).then(|| "Already used".to_owned())
        });
        let values = form_values! { "taken" => "ada" };

        assert_eq!(
            rule.evaluate("user", Some(&text("a")), Some(&values))
                .as_deref(),
            Some("Must be at least 2 characters")
        );
        assert_eq!(
            rule.evaluate("user", Some(&text("ada")), Some(&values))
                .as_deref(),
            Some("Already used")
        );
        assert_eq!(rule.evaluate("user", Some(&text("grace")), Some(&values)), None);
    }

    #[test]
    fn custom_gets_empty_snapshot_when_omitted() {
        let rule = FieldRule::new().custom(|_, all| (!all.is_empty()).then(|| "unexpected".into()));
        assert_eq!(rule.evaluate("x", None, None), None);
    }

    #[test]
    fn rule_set_keeps_declaration_order() {
        let rules: RuleSet = [
            ("password", FieldRule::new().required()),
            ("email", FieldRule::new().email()),
        ]
        .into_iter()
        .collect();
        assert_eq!(rules.fields().collect::<Vec<_>>(), ["password", "email"]);
        assert!(rules.contains("email"));
        assert!(rules.get("password").is_some_and(FieldRule::is_required));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn debug_hides_custom_closure() {
        let rule = FieldRule::new().min_length(2).custom(|_, _| None);
        let debug = format!("{rule:?}");
        assert!(debug.contains("min_length: Some(2)"));
        assert!(debug.contains("<function>"));
    }
}
