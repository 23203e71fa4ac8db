//! Bucket aggregation: fold one bucket's file results into a round report.
//!
//! Aggregation is a batch fold over fully-collected per-file results (the
//! worker pool joins before this runs). Files with empty records stay listed
//! under `files` but are excluded from `overall` and `stats`.

pub mod stats;

use crate::calculate::{run_calculated, CalculatedMetric};
use crate::core::{FileResult, MetricRecord};
use crate::extract::MetricExtractor;
use crate::importers::FINDINGS_PREFIX;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use stats::{summarize, StatSummary};

/// The per-bucket artifact: per-file records, the bucket rollup, and the
/// cross-file statistics. Serializes with exactly these three keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub files: BTreeMap<String, MetricRecord>,
    pub overall: MetricRecord,
    pub stats: StatSummary,
}

/// Folds a bucket's collected file results into a [`RoundReport`].
pub struct BucketAggregator<'a> {
    extractors: &'a [Box<dyn MetricExtractor>],
    calculated: &'a [Box<dyn CalculatedMetric>],
}

impl<'a> BucketAggregator<'a> {
    pub fn new(
        extractors: &'a [Box<dyn MetricExtractor>],
        calculated: &'a [Box<dyn CalculatedMetric>],
    ) -> Self {
        Self {
            extractors,
            calculated,
        }
    }

    pub fn aggregate(&self, results: Vec<FileResult>) -> RoundReport {
        let contributing: Vec<&MetricRecord> = results
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| &r.metrics)
            .collect();

        let mut overall = MetricRecord::new();
        for extractor in self.extractors {
            overall.extend(extractor.fold_overall(&contributing));
        }
        overall.extend(fold_findings(&contributing));
        run_calculated(self.calculated, &mut overall);

        let stats = summarize(&contributing);

        // Duplicate paths cannot occur in deduplicated bucket lists; if one
        // slips through, the later entry wins.
        let files = results
            .into_iter()
            .map(|r| (r.path.display().to_string(), r.metrics))
            .collect();

        RoundReport {
            files,
            overall,
            stats,
        }
    }
}

/// Importer-contributed `findings_*` keys aggregate by sum.
fn fold_findings(records: &[&MetricRecord]) -> MetricRecord {
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for record in records {
        for (key, value) in record.iter() {
            if key.starts_with(FINDINGS_PREFIX) {
                *totals.entry(key.clone()).or_insert(0) += value.as_f64() as i64;
            }
        }
    }
    totals.into_iter().map(|(k, v)| (k, v.into())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::default_calculated;
    use crate::config::AnalysisConfig;
    use crate::core::MetricValue;
    use crate::extract::build_extractors;

    fn record(pairs: &[(&str, i64)]) -> MetricRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), MetricValue::Int(*v)))
            .collect()
    }

    #[test]
    fn failed_file_listed_but_excluded_from_stats() {
        let config = AnalysisConfig::default();
        let extractors = build_extractors(&config).unwrap();
        let calculated = default_calculated();
        let aggregator = BucketAggregator::new(&extractors, &calculated);

        let results = vec![
            FileResult::new("a.py", record(&[("loc", 10)])),
            FileResult::new("b.py", record(&[("loc", 20)])),
            FileResult::empty("broken.py"),
        ];

        let report = aggregator.aggregate(results);

        assert_eq!(report.files.len(), 3);
        assert!(report.files["broken.py"].is_empty());
        assert_eq!(report.stats.min["loc"], MetricValue::Int(10));
        assert_eq!(report.stats.max["loc"], MetricValue::Int(20));
        assert_eq!(report.stats.mean["loc"].as_f64(), 15.0);
        assert_eq!(report.overall["loc"], MetricValue::Int(30));
    }

    #[test]
    fn findings_keys_sum_into_overall() {
        let config = AnalysisConfig::default();
        let extractors = build_extractors(&config).unwrap();
        let calculated = default_calculated();
        let aggregator = BucketAggregator::new(&extractors, &calculated);

        let results = vec![
            FileResult::new("a.py", record(&[("findings_compiler", 2)])),
            FileResult::new("b.py", record(&[("findings_compiler", 3)])),
        ];

        let report = aggregator.aggregate(results);
        assert_eq!(report.overall["findings_compiler"], MetricValue::Int(5));
    }

    #[test]
    fn report_serializes_with_three_top_level_keys() {
        let config = AnalysisConfig::default();
        let extractors = build_extractors(&config).unwrap();
        let calculated = default_calculated();
        let aggregator = BucketAggregator::new(&extractors, &calculated);

        let report = aggregator.aggregate(vec![FileResult::new("a.py", record(&[("loc", 1)]))]);
        let json = serde_json::to_value(&report).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["files", "overall", "stats"]);
    }
}
