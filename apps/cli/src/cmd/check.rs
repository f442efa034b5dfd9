use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;
use wings_form::FormController;

use crate::args::Format;
use crate::input;
use crate::output::{self, CheckOut};

pub fn run(rules: &Path, values: &Path, touch_all: bool, format: Format) -> Result<ExitCode> {
    let rules = input::load_rules(rules)?;
    let values = input::load_values(values)?;

    let mut form = FormController::new(values, rules);
    let valid = if touch_all {
        form.submit()
    } else {
        form.validate_all()
    };
    info!(valid, error_count = form.errors().len(), "check finished");

    output::print_check(
        format,
        &CheckOut {
            valid,
            errors: form.errors(),
            touched: form.touched(),
        },
    )?;

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
