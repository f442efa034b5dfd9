use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use wings_form::FormValues;

use crate::args::Format;
use crate::input;
use crate::output::{self, ExplainOut};

pub fn run(
    rules: &Path,
    field: &str,
    raw_value: Option<&str>,
    json: bool,
    values: Option<&Path>,
    format: Format,
) -> Result<ExitCode> {
    let rules = input::load_rules(rules)?;
    let mut all = match values {
        Some(path) => input::load_values(path)?,
        None => FormValues::new(),
    };

    // the checked value is part of the snapshot, as in a live form
    let value = raw_value.map(|raw| input::parse_value(raw, json)).transpose()?;
    match &value {
        Some(value) => {
            all.set(field, value.clone());
        }
        None => {
            all.remove(field);
        }
    }

    let error = rules.evaluate(field, value.as_ref(), Some(&all));
    output::print_explain(
        format,
        &ExplainOut {
            field,
            has_rule: rules.contains(field),
            error: error.as_deref(),
        },
    )?;

    Ok(if error.is_none() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
