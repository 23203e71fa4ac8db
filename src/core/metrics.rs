//! Metric value and record containers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A single metric value: raw counters are integers, derived measures are
/// floats. Serialized untagged so reports carry plain JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
}

impl MetricValue {
    /// Numeric view used for comparisons and statistics.
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Int(v) => *v as f64,
            MetricValue::Float(v) => *v,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            MetricValue::Int(_) => true,
            MetricValue::Float(v) => v.is_finite(),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Int(v)
    }
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::Int(v as i64)
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Float(v)
    }
}

/// Mapping from metric name to value for one file (or one bucket rollup).
/// BTreeMap keeps report serialization deterministic.
pub type MetricRecord = BTreeMap<String, MetricValue>;

/// Result of processing a single file within a bucket. A file that could not
/// be tokenized or decoded keeps an empty record: it stays visible under
/// `files` but contributes nothing to aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub metrics: MetricRecord,
}

impl FileResult {
    pub fn new(path: impl Into<PathBuf>, metrics: MetricRecord) -> Self {
        Self {
            path: path.into(),
            metrics,
        }
    }

    /// An empty result for a file that failed upstream of extraction.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            metrics: MetricRecord::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_numeric_serialization() {
        let mut record = MetricRecord::new();
        record.insert("loc".into(), MetricValue::Int(42));
        record.insert("comment_ratio".into(), MetricValue::Float(12.5));

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"comment_ratio":12.5,"loc":42}"#);
    }

    #[test]
    fn numeric_view() {
        assert_eq!(MetricValue::Int(3).as_f64(), 3.0);
        assert!(MetricValue::Float(f64::NAN).as_f64().is_nan());
        assert!(!MetricValue::Float(f64::NAN).is_finite());
        assert!(MetricValue::Int(i64::MAX).is_finite());
    }
}
