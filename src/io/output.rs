//! Report persistence: one pretty-printed JSON document per bucket.

use crate::aggregate::RoundReport;
use crate::core::Result;
use std::path::{Path, PathBuf};

/// Write a bucket's report into `dir`, creating the directory if needed.
/// Returns the path written.
pub fn write_report(dir: &Path, name: &str, report: &RoundReport) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    std::fs::write(&path, json)?;
    Ok(path)
}
