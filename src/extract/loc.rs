//! Lines of code, counted from the token stream: the sum of newline
//! characters carried in token texts. Whitespace tokens carry the newlines
//! in pygments-style streams, so this matches the source's physical line
//! breaks without re-reading the file.

use super::{sum_int, MetricExtractor};
use crate::core::{MetricRecord, Result, Token};

pub const LOC: &str = "loc";

pub struct LocExtractor;

impl MetricExtractor for LocExtractor {
    fn name(&self) -> &'static str {
        "loc"
    }

    fn extract(&self, _language: &str, tokens: &[Token]) -> Result<MetricRecord> {
        let newlines: usize = tokens
            .iter()
            .map(|t| t.text.matches('\n').count())
            .sum();

        let mut record = MetricRecord::new();
        record.insert(LOC.into(), newlines.into());
        Ok(record)
    }

    /// Overall rule: sum. Total lines across a bucket is the one rollup that
    /// is naturally additive.
    fn fold_overall(&self, records: &[&MetricRecord]) -> MetricRecord {
        let mut overall = MetricRecord::new();
        if let Some(total) = sum_int(records, LOC) {
            overall.insert(LOC.into(), total.into());
        }
        overall
    }
}
