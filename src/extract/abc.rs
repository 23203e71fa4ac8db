//! ABC metric: assignments, branches, conditionals.
//!
//! Counting rules:
//! - Assignments: every token whose text exactly matches one of the fixed
//!   assignment-operator spellings, duplicates included.
//! - Branches: every token whose *category* is exactly `name.function`,
//!   `name.function.magic` or `name.label`. Whether a call site or a
//!   declaration site increments the count depends on which sites the
//!   upstream tokenizer tags with those categories; this module takes the
//!   tokenizer's word for it.
//! - Conditionals: distinct token *texts* seen among the fixed conditional
//!   spellings. Three `if` tokens count once; `if` and `==` count separately.
//!
//! All matches are case-sensitive; unknown categories and texts are ignored.

use super::{sum_int, MetricExtractor};
use crate::core::{MetricRecord, Result, Token};
use std::collections::BTreeSet;

pub const ABC_ASSIGNMENTS: &str = "ABC_Assignments";
pub const ABC_BRANCHES: &str = "ABC_Branches";
pub const ABC_CONDITIONALS: &str = "ABC_Conditionals";

const ASSIGNMENT_OPS: &[&str] = &[
    "=", "+=", "-=", "*=", "/=", "%=", "//=", "**=", "&=", "|=", "^=", ">>=", "<<=",
];

const BRANCH_CATEGORIES: &[&str] = &["name.function", "name.function.magic", "name.label"];

const CONDITIONAL_SPELLINGS: &[&str] = &[
    ">", "<", "<=", ">=", "==", "!=", "&&", "||", "else", "elif", "if", "case", "default", "for",
    "while", "and", "or",
];

pub struct AbcExtractor;

impl MetricExtractor for AbcExtractor {
    fn name(&self) -> &'static str {
        "abc"
    }

    fn extract(&self, _language: &str, tokens: &[Token]) -> Result<MetricRecord> {
        let mut assignments = 0usize;
        let mut branches = 0usize;
        let mut conditionals: BTreeSet<&str> = BTreeSet::new();

        for token in tokens {
            let text = token.text.as_str();
            if ASSIGNMENT_OPS.contains(&text) {
                assignments += 1;
            }
            if BRANCH_CATEGORIES.contains(&token.category.as_str()) {
                branches += 1;
            }
            if CONDITIONAL_SPELLINGS.contains(&text) {
                conditionals.insert(text);
            }
        }

        let mut record = MetricRecord::new();
        record.insert(ABC_ASSIGNMENTS.into(), assignments.into());
        record.insert(ABC_BRANCHES.into(), branches.into());
        record.insert(ABC_CONDITIONALS.into(), conditionals.len().into());
        Ok(record)
    }

    /// Overall rule: sum all three counts. Summing `ABC_Conditionals` treats
    /// each file's distinct-spelling set as disjoint; bucket-wide
    /// distinctness is not recoverable from per-file counts.
    fn fold_overall(&self, records: &[&MetricRecord]) -> MetricRecord {
        let mut overall = MetricRecord::new();
        for key in [ABC_ASSIGNMENTS, ABC_BRANCHES, ABC_CONDITIONALS] {
            if let Some(total) = sum_int(records, key) {
                overall.insert(key.into(), total.into());
            }
        }
        overall
    }
}
