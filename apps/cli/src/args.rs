use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "wings-form", version, about = "Check form values against Wings rule sets")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate a values document against a rule set.
    Check {
        /// Rule-set file (`.toml` or JSON).
        #[arg(long, env = "WINGS_FORM_RULES")]
        rules: PathBuf,

        /// JSON object of field values.
        #[arg(long)]
        values: PathBuf,

        /// Mark every field touched before validating, as a form does on submit.
        #[arg(long)]
        touch_all: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Evaluate one field value and print the first failing rule.
    Explain {
        /// Rule-set file (`.toml` or JSON).
        #[arg(long, env = "WINGS_FORM_RULES")]
        rules: PathBuf,

        #[arg(long)]
        field: String,

        /// Value to check. Omit to check a missing value.
        #[arg(long)]
        value: Option<String>,

        /// Parse `--value` as JSON (`42`, `true`, `null`, `["a"]`) instead of text.
        #[arg(long)]
        json: bool,

        /// JSON object of the other field values, used by `match` rules.
        #[arg(long)]
        values: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}
