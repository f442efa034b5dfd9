use std::process::ExitCode;

use anyhow::Result;

use crate::args::{Cli, Command};

mod check;
mod explain;

/// Runs the selected command. `Ok` carries the exit code for a completed run;
/// load and compile failures are returned as errors.
pub fn dispatch(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Check {
            rules,
            values,
            touch_all,
            format,
        } => check::run(&rules, &values, touch_all, format),
        Command::Explain {
            rules,
            field,
            value,
            json,
            values,
            format,
        } => explain::run(
            &rules,
            &field,
            value.as_deref(),
            json,
            values.as_deref(),
            format,
        ),
    }
}
