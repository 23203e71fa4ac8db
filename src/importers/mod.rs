//! External findings importers.
//!
//! The surrounding toolchain can supply findings files (compiler warnings,
//! duplication reports, security scans, coverage) keyed by source path. Each
//! importer contributes one integer metric per file it knows about; files it
//! does not mention simply lack the key.
//!
//! Accepted JSON value forms per file entry:
//! - a number: taken as the total finding count for that file;
//! - an array: its length is the count;
//! - anything else (one finding object): counts as 1.

use crate::config::{FindingsKind, ImporterSpec};
use crate::core::{Error, MetricRecord, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Prefix shared by all importer-contributed metric keys.
pub const FINDINGS_PREFIX: &str = "findings_";

/// One loaded findings file.
#[derive(Debug, Clone)]
pub struct FindingsImporter {
    kind: FindingsKind,
    by_file: HashMap<String, i64>,
}

impl FindingsImporter {
    pub fn load(spec: &ImporterSpec) -> Result<Self> {
        let text = std::fs::read_to_string(&spec.path)?;
        let root: Value = serde_json::from_str(&text)?;
        let Value::Object(entries) = root else {
            return Err(Error::Config(format!(
                "{}: findings file must be a JSON object keyed by file path",
                spec.path.display()
            )));
        };

        let mut by_file = HashMap::with_capacity(entries.len());
        for (file, value) in entries {
            let count = match value {
                Value::Number(n) => n.as_i64().unwrap_or(0),
                Value::Array(items) => items.len() as i64,
                _ => 1,
            };
            by_file.insert(file, count);
        }

        Ok(Self {
            kind: spec.kind,
            by_file,
        })
    }

    /// Merge this importer's count for `path` into the record, if any.
    pub fn apply(&self, path: &Path, record: &mut MetricRecord) {
        let key = path.display().to_string();
        if let Some(count) = self.by_file.get(&key) {
            record.insert(self.kind.metric_key().into(), (*count).into());
        }
    }
}

/// Load every configured importer up front; a broken findings file is a
/// configuration error, not a per-file skip.
pub fn load_importers(specs: &[ImporterSpec]) -> Result<Vec<FindingsImporter>> {
    specs.iter().map(FindingsImporter::load).collect()
}
