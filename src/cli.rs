//! CLI argument definitions for the `baseline-trend` command.
//!
//! Configuration is command-line only; logging additionally honours `RUST_LOG`.

use std::path::PathBuf;

use clap::Parser;

use crate::trend::OutputFormat;

#[derive(Parser)]
#[command(
    name = "baseline-trend",
    version,
    about = "Compare two baseline analysis results and report metric trends",
    arg_required_else_help = true,
    after_help = "\
Each result file maps a baseline path to its counters (overallErrors,
classesComplexity, deprecations, invalidPhpdocs, unknownTypes,
anonymousVariables, unusedSymbols). Baselines missing from the comparing
result are skipped.

Exit codes:
  0  metrics improved (no regression)
  1  metrics steady (nothing changed)
  2  at least one metric got worse
  3  invalid arguments or unreadable input

Examples:
  baseline-trend main.json branch.json
  baseline-trend main.json branch.json --format=json"
)]
pub struct Cli {
    /// Result file of the reference run (e.g. the target branch)
    pub reference: PathBuf,

    /// Result file of the run to compare against the reference
    pub comparing: PathBuf,

    /// Output format: text or json (default: text)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Log progress to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}
