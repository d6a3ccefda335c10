//! Report sinks driven by the trend aggregation.
//!
//! The text reporter prints one line per verdict. The JSON reporter buffers a
//! path's verdicts and writes one JSON document per reference path.

use std::io::{self, Write};

use serde::{Serialize, Serializer};

use super::classify::{Trend, TrendVerdict};
use super::metrics::Metric;
use crate::report_helpers;

/// Receives the events of one aggregation run.
///
/// `begin_path` and `end_path` are called for every reference path, including
/// paths with no counterpart in the comparing snapshot. `verdict` is only
/// called between them when the path could be compared.
pub trait TrendReporter {
    fn begin_path(&mut self, path: &str) -> io::Result<()>;
    fn verdict(&mut self, verdict: &TrendVerdict) -> io::Result<()>;
    fn end_path(&mut self, path: &str) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()>;
}

fn headline(path: &str) -> String {
    format!("Analyzing Trend for {path}")
}

/// Human-readable, line-oriented report.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TrendReporter for TextReporter<W> {
    fn begin_path(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out, "{}", headline(path))
    }

    fn verdict(&mut self, verdict: &TrendVerdict) -> io::Result<()> {
        writeln!(
            self.out,
            "  {}: {} -> {} => {}",
            verdict.metric, verdict.reference, verdict.comparing, verdict.trend
        )
    }

    fn end_path(&mut self, _path: &str) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

// --- JSON output ---

#[derive(Serialize)]
struct JsonTrendEntry {
    reference: u64,
    comparing: u64,
    trend: Trend,
}

/// Metric name to entry, serialized as an object in `Metric::ALL` order.
#[derive(Default)]
struct JsonTrendOutput(Vec<(Metric, JsonTrendEntry)>);

impl Serialize for JsonTrendOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(metric, entry)| (metric.name(), entry)))
    }
}

#[derive(Serialize)]
struct JsonTrendUnit {
    label: String,
    output: JsonTrendOutput,
}

/// One compact JSON document per reference path, one per line.
pub struct JsonReporter<W: Write> {
    out: W,
    current: Option<JsonTrendUnit>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, current: None }
    }
}

impl<W: Write> TrendReporter for JsonReporter<W> {
    fn begin_path(&mut self, path: &str) -> io::Result<()> {
        self.current = Some(JsonTrendUnit {
            label: headline(path),
            output: JsonTrendOutput::default(),
        });
        Ok(())
    }

    fn verdict(&mut self, verdict: &TrendVerdict) -> io::Result<()> {
        let Some(unit) = self.current.as_mut() else {
            return Err(io::Error::other("verdict reported outside of a baseline path"));
        };
        unit.output.0.push((
            verdict.metric,
            JsonTrendEntry {
                reference: verdict.reference,
                comparing: verdict.comparing,
                trend: verdict.trend,
            },
        ));
        Ok(())
    }

    fn end_path(&mut self, _path: &str) -> io::Result<()> {
        match self.current.take() {
            Some(unit) => report_helpers::write_json_line(&mut self.out, &unit),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
