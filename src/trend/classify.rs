//! Per-metric trend classification and the severity order used for the exit status.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use super::metrics::Metric;

/// Run-wide result, ordered from best to worst.
///
/// The discriminant is the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExitStatus {
    Improved = 0,
    Steady = 1,
    Worse = 2,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Improved => "improved",
            Self::Steady => "steady",
            Self::Worse => "worse",
        })
    }
}

/// Direction one metric moved between the reference and the comparing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improved,
    Steady,
    Worse,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Improved => "improved",
            Self::Steady => "good",
            Self::Worse => "worse",
        }
    }

    pub fn severity(self) -> ExitStatus {
        match self {
            Self::Improved => ExitStatus::Improved,
            Self::Steady => ExitStatus::Steady,
            Self::Worse => ExitStatus::Worse,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized as its report label.
impl Serialize for Trend {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Outcome of comparing one metric of one baseline path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendVerdict {
    pub metric: Metric,
    pub reference: u64,
    pub comparing: u64,
    pub trend: Trend,
}

/// Classify a single metric. Counters only ever get worse by growing.
pub fn classify(metric: Metric, reference: u64, comparing: u64) -> TrendVerdict {
    let trend = match comparing.cmp(&reference) {
        Ordering::Greater => Trend::Worse,
        Ordering::Less => Trend::Improved,
        Ordering::Equal => Trend::Steady,
    };
    TrendVerdict {
        metric,
        reference,
        comparing,
        trend,
    }
}
