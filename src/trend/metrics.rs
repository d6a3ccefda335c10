use std::fmt;

use serde::Deserialize;

/// The seven counters recorded for one baseline path.
///
/// Keys missing from a result file default to zero, so files written before a
/// counter existed still compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsRecord {
    pub overall_errors: u64,
    pub classes_complexity: u64,
    pub deprecations: u64,
    pub invalid_phpdocs: u64,
    pub unknown_types: u64,
    pub anonymous_variables: u64,
    pub unused_symbols: u64,
}

/// One tracked counter of a [`MetricsRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    OverallErrors,
    ClassesComplexity,
    Deprecations,
    InvalidPhpdocs,
    UnknownTypes,
    AnonymousVariables,
    UnusedSymbols,
}

impl Metric {
    /// Comparison and report order. Reports list metrics exactly in this order.
    pub const ALL: [Metric; 7] = [
        Metric::OverallErrors,
        Metric::ClassesComplexity,
        Metric::Deprecations,
        Metric::InvalidPhpdocs,
        Metric::UnknownTypes,
        Metric::AnonymousVariables,
        Metric::UnusedSymbols,
    ];

    /// Name used in reports and as the key in result files.
    pub fn name(self) -> &'static str {
        match self {
            Self::OverallErrors => "overallErrors",
            Self::ClassesComplexity => "classesComplexity",
            Self::Deprecations => "deprecations",
            Self::InvalidPhpdocs => "invalidPhpdocs",
            Self::UnknownTypes => "unknownTypes",
            Self::AnonymousVariables => "anonymousVariables",
            Self::UnusedSymbols => "unusedSymbols",
        }
    }

    pub fn value(self, record: &MetricsRecord) -> u64 {
        match self {
            Self::OverallErrors => record.overall_errors,
            Self::ClassesComplexity => record.classes_complexity,
            Self::Deprecations => record.deprecations,
            Self::InvalidPhpdocs => record.invalid_phpdocs,
            Self::UnknownTypes => record.unknown_types,
            Self::AnonymousVariables => record.anonymous_variables,
            Self::UnusedSymbols => record.unused_symbols,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_record() -> MetricsRecord {
        MetricsRecord {
            overall_errors: 1,
            classes_complexity: 2,
            deprecations: 3,
            invalid_phpdocs: 4,
            unknown_types: 5,
            anonymous_variables: 6,
            unused_symbols: 7,
        }
    }

    #[test]
    fn all_lists_metrics_in_report_order() {
        let names: Vec<&str> = Metric::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            [
                "overallErrors",
                "classesComplexity",
                "deprecations",
                "invalidPhpdocs",
                "unknownTypes",
                "anonymousVariables",
                "unusedSymbols",
            ]
        );
    }

    #[test]
    fn value_reads_matching_counter() {
        let record = distinct_record();
        let values: Vec<u64> = Metric::ALL.iter().map(|m| m.value(&record)).collect();
        assert_eq!(values, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn deserialize_uses_metric_names_as_keys() {
        let json = r#"{
            "overallErrors": 1,
            "classesComplexity": 2,
            "deprecations": 3,
            "invalidPhpdocs": 4,
            "unknownTypes": 5,
            "anonymousVariables": 6,
            "unusedSymbols": 7
        }"#;
        let record: MetricsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, distinct_record());
    }

    #[test]
    fn deserialize_defaults_missing_counters_and_ignores_extra_keys() {
        let json = r#"{"overallErrors": 12, "date": "2024-01-01"}"#;
        let record: MetricsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.overall_errors, 12);
        assert_eq!(record.unused_symbols, 0);
    }

    #[test]
    fn deserialize_rejects_negative_counter() {
        let json = r#"{"overallErrors": -1}"#;
        assert!(serde_json::from_str::<MetricsRecord>(json).is_err());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Metric::InvalidPhpdocs.to_string(), "invalidPhpdocs");
    }
}
