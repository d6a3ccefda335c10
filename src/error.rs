//! Error type for a trend run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a trend comparison before it produces an exit status.
///
/// The comparison itself is total; only reading the inputs, writing the report,
/// or asking for an unknown output format can fail.
#[derive(Debug, Error)]
pub enum TrendError {
    /// The result file is missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The result file is not JSON of the expected shape.
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output format selector other than `text` or `json`.
    #[error("unknown output format `{0}` (expected `text` or `json`)")]
    InvalidFormat(String),

    /// Writing the report failed.
    #[error("cannot write report: {0}")]
    Output(#[source] io::Error),
}
