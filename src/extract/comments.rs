//! Comment density: percentage of source characters that live in tokens of
//! the `comment` category subtree.

use super::MetricExtractor;
use crate::core::{MetricRecord, MetricValue, Result, Token};

pub const COMMENT_RATIO: &str = "comment_ratio";

pub struct CommentsExtractor;

impl MetricExtractor for CommentsExtractor {
    fn name(&self) -> &'static str {
        "comments"
    }

    fn extract(&self, _language: &str, tokens: &[Token]) -> Result<MetricRecord> {
        let mut comment_chars = 0usize;
        let mut total_chars = 0usize;

        for token in tokens {
            let len = token.text.chars().count();
            total_chars += len;
            if token.category.is_within("comment") {
                comment_chars += len;
            }
        }

        let ratio = if total_chars == 0 {
            0.0
        } else {
            100.0 * comment_chars as f64 / total_chars as f64
        };

        let mut record = MetricRecord::new();
        record.insert(COMMENT_RATIO.into(), ratio.into());
        Ok(record)
    }

    /// Overall rule: unweighted arithmetic mean of the per-file ratios.
    fn fold_overall(&self, records: &[&MetricRecord]) -> MetricRecord {
        let ratios: Vec<f64> = records
            .iter()
            .filter_map(|r| r.get(COMMENT_RATIO))
            .map(MetricValue::as_f64)
            .collect();

        let mut overall = MetricRecord::new();
        if !ratios.is_empty() {
            let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
            overall.insert(COMMENT_RATIO.into(), mean.into());
        }
        overall
    }
}
