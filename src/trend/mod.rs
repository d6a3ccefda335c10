//! Trend comparison between a reference and a comparing analysis result.
//!
//! Both result files are read into snapshots keyed by baseline path. Every
//! baseline present in both is compared metric by metric, the verdicts go to the
//! selected reporter, and the worst verdict of the whole run becomes the exit
//! status.

mod aggregate;
mod classify;
mod metrics;
mod report;
mod snapshot;

use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::TrendError;

use aggregate::aggregate;
pub use classify::ExitStatus;
use report::{JsonReporter, TextReporter};
use snapshot::read_snapshot;

/// Report format. Anything other than `text` or `json` is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(TrendError::InvalidFormat(s.to_string()))
        }
    }
}

/// Compare the two result files and print the report to stdout.
pub fn run(
    reference: &Path,
    comparing: &Path,
    format: OutputFormat,
) -> Result<ExitStatus, TrendError> {
    run_to(reference, comparing, format, io::stdout().lock())
}

/// Compare the two result files and write the report to `out`.
///
/// Both files are read before anything is written, so a read or parse error
/// leaves `out` untouched.
pub fn run_to<W: Write>(
    reference_path: &Path,
    comparing_path: &Path,
    format: OutputFormat,
    out: W,
) -> Result<ExitStatus, TrendError> {
    let reference = read_snapshot(reference_path)?;
    let comparing = read_snapshot(comparing_path)?;

    let status = match format {
        OutputFormat::Json => aggregate(&reference, &comparing, &mut JsonReporter::new(out)),
        OutputFormat::Text => aggregate(&reference, &comparing, &mut TextReporter::new(out)),
    };
    status.map_err(TrendError::Output)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
