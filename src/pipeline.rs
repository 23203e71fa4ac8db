//! The per-bucket pipeline: fan per-file extraction out over a worker pool,
//! join, then fold the collected results into a round report.
//!
//! Per-file work is embarrassingly parallel: one worker consumes one file and
//! produces one result, with no shared counters and no inter-worker
//! communication. Aggregation runs strictly after the join, as a plain batch
//! fold. A file that fails upstream of extraction yields an empty result and
//! never blocks its siblings.

use crate::aggregate::{BucketAggregator, RoundReport};
use crate::calculate::{default_calculated, run_calculated, CalculatedMetric};
use crate::config::AnalysisConfig;
use crate::core::{Error, FileResult, Result, Token};
use crate::extract::{build_extractors, run_extractors, MetricExtractor};
use crate::importers::{load_importers, FindingsImporter};
use crate::io::manifest::ManifestFile;
use rayon::prelude::*;
use std::path::Path;

/// Run the full extraction chain over one already-loaded token stream.
/// Exposed for callers that hold token sequences in memory.
pub fn process_tokens(
    extractors: &[Box<dyn MetricExtractor>],
    calculated: &[Box<dyn CalculatedMetric>],
    importers: &[FindingsImporter],
    path: &Path,
    language: &str,
    tokens: &[Token],
) -> FileResult {
    let mut record = run_extractors(extractors, language, tokens);
    run_calculated(calculated, &mut record);
    for importer in importers {
        importer.apply(path, &mut record);
    }
    FileResult::new(path, record)
}

fn process_file(
    extractors: &[Box<dyn MetricExtractor>],
    calculated: &[Box<dyn CalculatedMetric>],
    importers: &[FindingsImporter],
    file: &ManifestFile,
) -> FileResult {
    let tokens = match crate::io::load_tokens(&file.tokens) {
        Ok(tokens) => tokens,
        Err(err) => {
            log::warn!("skipping {}: {err}", file.path.display());
            return FileResult::empty(&file.path);
        }
    };
    log::debug!(
        "{}: {} tokens ({})",
        file.path.display(),
        tokens.len(),
        file.language
    );
    process_tokens(extractors, calculated, importers, &file.path, &file.language, &tokens)
}

/// Analyze one bucket's files and aggregate the results.
pub fn analyze_bucket(config: &AnalysisConfig, files: &[ManifestFile]) -> Result<RoundReport> {
    let extractors = build_extractors(config)?;
    let calculated = default_calculated();
    let importers = load_importers(&config.importers)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_jobs())
        .build()
        .map_err(|e| Error::Config(format!("worker pool: {e}")))?;

    let results: Vec<FileResult> = pool.install(|| {
        files
            .par_iter()
            .map(|file| process_file(&extractors, &calculated, &importers, file))
            .collect()
    });

    Ok(BucketAggregator::new(&extractors, &calculated).aggregate(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MetricValue;

    fn entry(dir: &Path, name: &str, tokens_json: &str) -> ManifestFile {
        let tokens = dir.join(format!("{name}.tokens.json"));
        std::fs::write(&tokens, tokens_json).unwrap();
        ManifestFile {
            path: name.into(),
            language: "Python".into(),
            tokens,
        }
    }

    #[test]
    fn bucket_with_unreadable_file_still_completes() {
        let dir = tempfile::tempdir().unwrap();
        let good = entry(dir.path(), "good.py", r#"[["operator","="],["text","\n"]]"#);
        let missing = ManifestFile {
            path: "missing.py".into(),
            language: "Python".into(),
            tokens: dir.path().join("does-not-exist.json"),
        };

        let config = AnalysisConfig::default();
        let report = analyze_bucket(&config, &[good, missing]).unwrap();

        assert_eq!(report.files.len(), 2);
        assert!(report.files["missing.py"].is_empty());
        assert_eq!(report.files["good.py"]["ABC_Assignments"], MetricValue::Int(1));
        // stats come from the surviving file only
        assert_eq!(report.stats.min["loc"], MetricValue::Int(1));
    }

    #[test]
    fn single_threaded_pool_matches_contract() {
        let dir = tempfile::tempdir().unwrap();
        let a = entry(dir.path(), "a.py", r#"[["keyword","if"],["text","\n"]]"#);
        let b = entry(dir.path(), "b.py", r#"[["keyword","while"],["text","\n"]]"#);

        let mut config = AnalysisConfig::default();
        config.jobs = Some(1);
        let report = analyze_bucket(&config, &[a, b]).unwrap();

        assert_eq!(report.overall["loc"], MetricValue::Int(2));
        assert_eq!(report.overall["cyclomatic_complexity"], MetricValue::Int(3));
    }
}
