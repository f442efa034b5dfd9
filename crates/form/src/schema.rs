//! Declarative rule sets.
//!
//! A [`RuleSetSchema`] is the data form of a [`RuleSet`]: it can be read from
//! JSON (or TOML with the `toml` feature) and compiled into rules. Keys use
//! the console's camelCase names:
//!
//! ```json
//! {
//!   "email":    { "required": true, "email": "That does not look like an email" },
//!   "password": { "required": true, "minLength": { "value": 6 } },
//!   "confirm":  { "match": { "field": "password", "message": "Passwords do not match" } }
//! }
//! ```
//!
//! `custom` checks are code only; add them to the compiled [`RuleSet`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::rule::{FieldRule, RuleSet};

/// A flag that is either on with the default message or on with a custom one.
///
/// `false` is the same as leaving the key out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Toggle {
    Enabled(bool),
    Message(String),
}

impl Toggle {
    /// `None` when off; `Some(message_override)` when on.
    fn resolve(&self) -> Option<Option<String>> {
        match self {
            Self::Enabled(false) => None,
            Self::Enabled(true) => Some(None),
            Self::Message(message) => Some(Some(message.clone())),
        }
    }
}

/// A rule parameter with an optional message override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bound<T> {
    pub value: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Bound<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// The `match` category: this field must equal `field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchSchema {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Data form of a [`FieldRule`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldRuleSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Toggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Toggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<Bound<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Bound<usize>>,
    /// Regex source; compiled by [`compile`](Self::compile).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Bound<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Bound<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Bound<f64>>,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<MatchSchema>,
}

impl FieldRuleSchema {
    /// Builds the [`FieldRule`] for `field`.
    ///
    /// Fails only when `pattern` is not a valid regex.
    pub fn compile(&self, field: &str) -> Result<FieldRule, RuleError> {
        let mut rule = FieldRule::new();

        if let Some(message) = self.required.as_ref().and_then(Toggle::resolve) {
            rule = rule.required_as(message);
        }
        if let Some(message) = self.email.as_ref().and_then(Toggle::resolve) {
            rule = rule.email_as(message);
        }
        if let Some(bound) = &self.min_length {
            rule = rule.min_length_as(bound.value, bound.message.clone());
        }
        if let Some(bound) = &self.max_length {
            rule = rule.max_length_as(bound.value, bound.message.clone());
        }
        if let Some(bound) = &self.pattern {
            let regex =
                regex::Regex::new(&bound.value).map_err(|source| RuleError::InvalidPattern {
                    field: field.to_owned(),
                    source,
                })?;
            rule = rule.pattern_as(regex, bound.message.clone());
        }
        if let Some(bound) = &self.min {
            rule = rule.min_as(bound.value, bound.message.clone());
        }
        if let Some(bound) = &self.max {
            rule = rule.max_as(bound.value, bound.message.clone());
        }
        if let Some(matches) = &self.matches {
            rule = rule.matches_as(matches.field.clone(), matches.message.clone());
        }

        Ok(rule)
    }
}

/// Data form of a [`RuleSet`]: field name to [`FieldRuleSchema`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSetSchema {
    fields: IndexMap<String, FieldRuleSchema>,
}

impl RuleSetSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rule: FieldRuleSchema) -> Self {
        self.fields.insert(name.into(), rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldRuleSchema> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a TOML document, one table per field.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(source: &str) -> Result<Self, RuleError> {
        Ok(toml::from_str(source)?)
    }

    /// Compiles every field, keeping declaration order.
    pub fn compile(&self) -> Result<RuleSet, RuleError> {
        self.fields
            .iter()
            .map(|(name, schema)| schema.compile(name).map(|rule| (name.as_str(), rule)))
            .collect()
    }
}
