use std::io;

use super::classify::{ExitStatus, classify};
use super::metrics::Metric;
use super::report::TrendReporter;
use super::snapshot::Snapshot;

/// Compare every reference baseline that also exists in `comparing` and fold
/// all verdicts into one exit status.
///
/// The status starts at `Improved` and is raised to the worst severity seen
/// anywhere in the run; it is never reset between baseline paths. Paths missing
/// from `comparing` produce no verdicts and leave the status untouched.
///
/// Only the reporter can fail.
pub fn aggregate<R: TrendReporter + ?Sized>(
    reference: &Snapshot,
    comparing: &Snapshot,
    reporter: &mut R,
) -> io::Result<ExitStatus> {
    let mut status = ExitStatus::Improved;
    let mut compared = 0usize;
    let mut skipped = 0usize;

    for (path, before) in reference.iter() {
        reporter.begin_path(path)?;

        if let Some(after) = comparing.get(path) {
            for metric in Metric::ALL {
                let verdict = classify(metric, metric.value(before), metric.value(after));
                reporter.verdict(&verdict)?;
                status = status.max(verdict.trend.severity());
            }
            compared += 1;
        } else {
            log::debug!("skipping {path}: not present in comparing result");
            skipped += 1;
        }

        reporter.end_path(path)?;
    }

    reporter.finish()?;
    log::info!("compared {compared} baseline(s), skipped {skipped}, overall trend: {status}");
    Ok(status)
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
