//! Cyclomatic complexity approximated from the token stream: one plus the
//! number of decision points. A decision point is a keyword-category token
//! spelling a branching construct, or a short-circuit/ternary operator text.
//!
//! Convention notes: `else` and `default` do not open new paths and are not
//! counted; the word operators `and`/`or` belong to the ABC conditional set,
//! not to this count.

use super::MetricExtractor;
use crate::core::{MetricRecord, Result, Token};

pub const CYCLOMATIC_COMPLEXITY: &str = "cyclomatic_complexity";

const DECISION_KEYWORDS: &[&str] = &[
    "if", "elif", "case", "for", "while", "except", "catch", "when",
];

const DECISION_OPERATORS: &[&str] = &["&&", "||", "?"];

pub struct CyclomaticExtractor;

impl MetricExtractor for CyclomaticExtractor {
    fn name(&self) -> &'static str {
        "cyclomatic"
    }

    fn extract(&self, _language: &str, tokens: &[Token]) -> Result<MetricRecord> {
        let mut decisions = 0i64;
        for token in tokens {
            let text = token.text.as_str();
            if token.category.is_within("keyword") && DECISION_KEYWORDS.contains(&text) {
                decisions += 1;
            } else if DECISION_OPERATORS.contains(&text) {
                decisions += 1;
            }
        }

        let mut record = MetricRecord::new();
        record.insert(CYCLOMATIC_COMPLEXITY.into(), (decisions + 1).into());
        Ok(record)
    }

    /// Overall rule: Σ(cc − 1) + 1, which is exactly the complexity the
    /// extractor would report for the concatenation of the files' streams.
    fn fold_overall(&self, records: &[&MetricRecord]) -> MetricRecord {
        let mut seen = false;
        let mut decisions = 0i64;
        for record in records {
            if let Some(value) = record.get(CYCLOMATIC_COMPLEXITY) {
                seen = true;
                decisions += value.as_f64() as i64 - 1;
            }
        }

        let mut overall = MetricRecord::new();
        if seen {
            overall.insert(CYCLOMATIC_COMPLEXITY.into(), (decisions + 1).into());
        }
        overall
    }
}
