//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::Style;
use crate::io::{Options, FROM_SUFFIX, MATCH_SUFFIX, TO_SUFFIX};

/// Convert legacy QUnit test files into Jasmine-style spec files.
///
/// Every matching file in DIR produces an output file next to it, named by
/// suffix substitution. Lines the converter cannot rewrite are kept with a
/// visible `**...**` placeholder for manual follow-up.
#[derive(Parser, Debug)]
#[command(name = "respec", version)]
pub struct Cli {
    /// Directory containing the legacy test files.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Output formatting strategy.
    #[arg(long, value_enum, default_value_t = StyleArg::Positional)]
    pub style: StyleArg,

    /// Suffix a file name must end with to be picked up.
    #[arg(long, value_name = "SUFFIX", default_value = MATCH_SUFFIX)]
    pub match_suffix: String,

    /// Suffix replaced in the input file name to derive the output name.
    #[arg(long, value_name = "SUFFIX", default_value = FROM_SUFFIX)]
    pub from_suffix: String,

    /// Suffix substituted into the output file name.
    #[arg(long, value_name = "SUFFIX", default_value = TO_SUFFIX)]
    pub to_suffix: String,

    /// Suppress the per-file summary.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Assemble library options from the parsed flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            style: self.style.into(),
            match_suffix: self.match_suffix.clone(),
            from_suffix: self.from_suffix.clone(),
            to_suffix: self.to_suffix.clone(),
        }
    }
}

/// CLI-facing mirror of [`Style`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    /// Message as a trailing positional argument; `assert.ok` becomes
    /// `.toBe(true)`; header lines are emitted.
    Positional,
    /// Message through `.withContext(...)`; `assert.ok` becomes
    /// `.toBeTruthy()`; no headers.
    Fluent,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Positional => Style::Positional,
            StyleArg::Fluent => Style::Fluent,
        }
    }
}
