//! Cross-file statistics: min, max, mean and median per metric.

use crate::core::{MetricRecord, MetricValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Statistical rollup over one bucket's file records. Each statistic is a
/// full metric record; a metric reported by no file is absent everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatSummary {
    pub min: MetricRecord,
    pub max: MetricRecord,
    pub mean: MetricRecord,
    pub median: MetricRecord,
}

/// Compute the rollup across the given records. Per metric, only the records
/// that report the key with a finite value contribute; NaN is filtered before
/// sorting, never treated as an extreme.
pub fn summarize(records: &[&MetricRecord]) -> StatSummary {
    let mut summary = StatSummary::default();

    let keys: BTreeSet<&String> = records.iter().flat_map(|r| r.keys()).collect();
    for key in keys {
        let mut values: Vec<MetricValue> = records
            .iter()
            .filter_map(|r| r.get(key))
            .filter(|v| v.is_finite())
            .copied()
            .collect();
        if values.is_empty() {
            continue;
        }
        values.sort_by(|a, b| a.as_f64().total_cmp(&b.as_f64()));

        summary.min.insert(key.clone(), values[0]);
        summary.max.insert(key.clone(), values[values.len() - 1]);

        let mean = values.iter().map(MetricValue::as_f64).sum::<f64>() / values.len() as f64;
        summary.mean.insert(key.clone(), mean.into());

        summary.median.insert(key.clone(), median_of_sorted(&values));
    }

    summary
}

/// Median over an ascending-sorted, non-empty slice. Odd counts return the
/// middle value verbatim (preserving integer-ness); even counts average the
/// two middle order statistics.
fn median_of_sorted(values: &[MetricValue]) -> MetricValue {
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        let lower = values[n / 2 - 1].as_f64();
        let upper = values[n / 2].as_f64();
        MetricValue::Float((lower + upper) / 2.0)
    }
}
