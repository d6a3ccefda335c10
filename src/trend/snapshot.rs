//! Reading result files into ordered snapshots.
//!
//! A result file is either an object mapping baseline path to metrics, or an
//! array of such objects (one per baseline, as analyzers usually emit them).
//! Baselines keep the order in which they appear in the file.

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use super::metrics::MetricsRecord;
use crate::error::TrendError;

/// Metrics for every baseline path recorded by one analysis run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    baselines: IndexMap<String, MetricsRecord>,
}

impl Snapshot {
    /// Add a baseline. A repeated path replaces the earlier record in place.
    pub fn insert(&mut self, path: impl Into<String>, record: MetricsRecord) {
        self.baselines.insert(path.into(), record);
    }

    pub fn get(&self, path: &str) -> Option<&MetricsRecord> {
        self.baselines.get(path)
    }

    /// Baselines in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricsRecord)> {
        self.baselines
            .iter()
            .map(|(path, record)| (path.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SnapshotVisitor)
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = Snapshot;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object or a list of objects mapping baseline paths to metrics")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Snapshot, A::Error> {
        let mut snapshot = Snapshot::default();
        Baselines(&mut snapshot).visit_map(map)?;
        Ok(snapshot)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Snapshot, A::Error> {
        let mut snapshot = Snapshot::default();
        while seq.next_element_seed(Baselines(&mut snapshot))?.is_some() {}
        Ok(snapshot)
    }
}

/// Adds one object of baselines to a snapshot.
struct Baselines<'a>(&'a mut Snapshot);

impl<'de> DeserializeSeed<'de> for Baselines<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for Baselines<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping baseline paths to metrics")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        while let Some((path, record)) = map.next_entry::<String, MetricsRecord>()? {
            self.0.insert(path, record);
        }
        Ok(())
    }
}

/// Read and parse the result file at `path`.
pub fn read_snapshot(path: &Path) -> Result<Snapshot, TrendError> {
    let content = fs::read_to_string(path).map_err(|source| TrendError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = parse_snapshot(&content).map_err(|source| TrendError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "read {} baseline(s) from {}",
        snapshot.len(),
        path.display()
    );
    Ok(snapshot)
}

/// Parse the contents of a result file.
pub fn parse_snapshot(content: &str) -> Result<Snapshot, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
