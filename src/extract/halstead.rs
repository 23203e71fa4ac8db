//! Halstead operator/operand tallies.
//!
//! Category convention: operators are tokens within the `operator` or
//! `punctuation` subtrees; operands are tokens within `name` or `literal`
//! (pygments files numbers and strings under `literal`). The derived
//! Halstead measures are computed from these tallies by the calculate layer.

use super::{sum_int, MetricExtractor};
use crate::core::{MetricRecord, Result, Token};
use std::collections::BTreeSet;

pub const OPERATORS_SUM: &str = "operators_sum";
pub const OPERATORS_UNIQ: &str = "operators_uniq";
pub const OPERANDS_SUM: &str = "operands_sum";
pub const OPERANDS_UNIQ: &str = "operands_uniq";

pub struct HalsteadExtractor;

impl MetricExtractor for HalsteadExtractor {
    fn name(&self) -> &'static str {
        "halstead"
    }

    fn extract(&self, _language: &str, tokens: &[Token]) -> Result<MetricRecord> {
        let mut operators_total = 0usize;
        let mut operands_total = 0usize;
        let mut operators: BTreeSet<&str> = BTreeSet::new();
        let mut operands: BTreeSet<&str> = BTreeSet::new();

        for token in tokens {
            let category = &token.category;
            if category.is_within("operator") || category.is_within("punctuation") {
                operators_total += 1;
                operators.insert(token.text.as_str());
            } else if category.is_within("name") || category.is_within("literal") {
                operands_total += 1;
                operands.insert(token.text.as_str());
            }
        }

        let mut record = MetricRecord::new();
        record.insert(OPERATORS_SUM.into(), operators_total.into());
        record.insert(OPERATORS_UNIQ.into(), operators.len().into());
        record.insert(OPERANDS_SUM.into(), operands_total.into());
        record.insert(OPERANDS_UNIQ.into(), operands.len().into());
        Ok(record)
    }

    /// Overall rule: sum all four tallies. The uniq sums treat per-file
    /// lexical namespaces as disjoint; true bucket-wide distinct counts are
    /// not recoverable from per-file numbers.
    fn fold_overall(&self, records: &[&MetricRecord]) -> MetricRecord {
        let mut overall = MetricRecord::new();
        for key in [OPERATORS_SUM, OPERATORS_UNIQ, OPERANDS_SUM, OPERANDS_UNIQ] {
            if let Some(total) = sum_int(records, key) {
                overall.insert(key.into(), total.into());
            }
        }
        overall
    }
}
