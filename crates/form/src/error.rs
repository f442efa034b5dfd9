/// Error type for building a [`RuleSet`](crate::RuleSet) from data.
///
/// Validation failures are never errors; they are reported as messages by
/// [`FieldRule::evaluate`](crate::FieldRule::evaluate). This type only covers
/// rule sets that cannot be loaded or compiled.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A `pattern` rule holds a regex that does not compile.
    #[error("invalid pattern for `{field}`: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// The rule-set document is not valid JSON for the schema.
    #[error("invalid JSON rule set: {0}")]
    Json(#[from] serde_json::Error),

    /// The rule-set document is not valid TOML for the schema.
    #[cfg(feature = "toml")]
    #[error("invalid TOML rule set: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RuleError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidPattern { .. } => "RULE_INVALID_PATTERN",
            Self::Json(_) => "RULE_JSON",
            #[cfg(feature = "toml")]
            Self::Toml(_) => "RULE_TOML",
        }
    }

    /// The field the error belongs to, when there is one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidPattern { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_pattern_names_the_field() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = RuleError::InvalidPattern {
            field: "slug".into(),
            source,
        };
        assert_eq!(err.code(), "RULE_INVALID_PATTERN");
        assert_eq!(err.field(), Some("slug"));
        assert!(err.to_string().starts_with("invalid pattern for `slug`"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn json_errors_convert() {
        let err: RuleError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "RULE_JSON");
        assert_eq!(err.field(), None);
    }
}
