use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use wings_form::{FieldValue, FormValues, RuleSet, RuleSetSchema};

/// Reads and compiles a rule set. `.toml` files are parsed as TOML, anything
/// else as JSON.
pub fn load_rules(path: &Path) -> Result<RuleSet> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read rules from {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let schema = if is_toml {
        RuleSetSchema::from_toml_str(&source)
    } else {
        RuleSetSchema::from_json_str(&source)
    }
    .with_context(|| format!("failed to parse rules in {}", path.display()))?;

    let rules = schema
        .compile()
        .with_context(|| format!("failed to compile rules in {}", path.display()))?;
    debug!(path = %path.display(), fields = rules.len(), "rules loaded");
    Ok(rules)
}

pub fn load_values(path: &Path) -> Result<FormValues> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read values from {}", path.display()))?;
    let values: FormValues = serde_json::from_str(&source)
        .with_context(|| format!("values in {} must be a JSON object", path.display()))?;
    debug!(path = %path.display(), fields = values.len(), "values loaded");
    Ok(values)
}

pub fn parse_value(raw: &str, json: bool) -> Result<FieldValue> {
    if json {
        serde_json::from_str(raw).with_context(|| format!("`{raw}` is not a JSON field value"))
    } else {
        Ok(FieldValue::from(raw))
    }
}
