use serde::Serialize;
use wings_form::{FormErrors, TouchedSet};

use crate::args::Format;

#[derive(Debug, Serialize)]
pub struct CheckOut<'a> {
    pub valid: bool,
    pub errors: &'a FormErrors,
    #[serde(skip_serializing_if = "TouchedSet::is_empty")]
    pub touched: &'a TouchedSet,
}

#[derive(Debug, Serialize)]
pub struct ExplainOut<'a> {
    pub field: &'a str,
    pub has_rule: bool,
    pub error: Option<&'a str>,
}

pub fn print_check(format: Format, out: &CheckOut<'_>) -> anyhow::Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(out)?),
        Format::Text if out.valid => println!("ok: all fields valid"),
        Format::Text => {
            for (field, message) in out.errors.iter() {
                println!("{field}: {message}");
            }
        }
    }
    Ok(())
}

pub fn print_explain(format: Format, out: &ExplainOut<'_>) -> anyhow::Result<()> {
    match (format, out.has_rule, out.error) {
        (Format::Json, ..) => println!("{}", serde_json::to_string_pretty(out)?),
        (Format::Text, false, _) => println!("{}: no rule, always valid", out.field),
        (Format::Text, true, None) => println!("{}: ok", out.field),
        (Format::Text, true, Some(message)) => println!("{}: {message}", out.field),
    }
    Ok(())
}
