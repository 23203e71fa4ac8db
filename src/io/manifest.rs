//! Bucket manifests: the boundary with the external grouping stage.
//!
//! For each (round, fail-count) bucket the grouping stage emits a manifest
//! naming the submissions in the bucket and where their token dumps live.
//! Malformed manifests are fatal: the pipeline does not guess at inputs it
//! cannot safely interpret.

use crate::core::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One submission inside a bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestFile {
    /// Source path of the submission; the record key in the report.
    pub path: PathBuf,
    /// Language name the tokenizer detected for the file.
    pub language: String,
    /// Token dump location, relative to the manifest unless absolute.
    pub tokens: PathBuf,
}

/// A (round, fail-count) bucket and its file list.
#[derive(Debug, Clone, Deserialize)]
pub struct BucketManifest {
    pub round: String,
    pub fail_count: u32,
    pub files: Vec<ManifestFile>,
}

impl BucketManifest {
    /// Base name for this bucket's report file.
    pub fn report_name(&self) -> String {
        format!("{}-fails{}-results.json", self.round, self.fail_count)
    }
}

/// Load and validate one bucket manifest. Token dump paths are resolved
/// against the manifest's directory; duplicate submission paths keep the
/// last entry (bucket lists are deduplicated upstream).
pub fn load_manifest(path: &Path) -> Result<BucketManifest> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::manifest(path, e.to_string()))?;
    let mut manifest: BucketManifest = serde_json::from_str(&text)
        .map_err(|e| Error::manifest(path, e.to_string()))?;

    let base = path.parent().unwrap_or(Path::new("."));
    for file in &mut manifest.files {
        if file.tokens.is_relative() {
            file.tokens = base.join(&file.tokens);
        }
    }

    let mut seen = HashSet::new();
    let mut deduped = Vec::with_capacity(manifest.files.len());
    for file in manifest.files.into_iter().rev() {
        if seen.insert(file.path.clone()) {
            deduped.push(file);
        }
    }
    deduped.reverse();
    manifest.files = deduped;

    Ok(manifest)
}
