//! Analysis configuration.
//!
//! The configuration is an explicit value handed to the registries and the
//! pipeline: which metric modules are active, the worker-pool width, the
//! dump-raw-tokens mode and any external-findings importer files. An optional
//! TOML file provides defaults; command-line flags override it.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Kinds of external findings the original toolchain could import alongside
/// the token metrics. Each kind contributes one per-file metric key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingsKind {
    Compiler,
    Duplication,
    Functional,
    Standard,
    Security,
    Coverage,
}

impl FindingsKind {
    pub fn metric_key(&self) -> &'static str {
        match self {
            FindingsKind::Compiler => "findings_compiler",
            FindingsKind::Duplication => "findings_duplication",
            FindingsKind::Functional => "findings_functional",
            FindingsKind::Standard => "findings_standard",
            FindingsKind::Security => "findings_security",
            FindingsKind::Coverage => "findings_coverage",
        }
    }
}

impl fmt::Display for FindingsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.metric_key())
    }
}

/// One external findings file to merge into per-file results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImporterSpec {
    pub kind: FindingsKind,
    pub path: PathBuf,
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Active extractor module names; `None` means all known modules.
    #[serde(default)]
    pub modules: Option<Vec<String>>,

    /// Worker-pool width for per-file extraction; `None` means all cores.
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Dump raw tokens instead of analyzing.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dump_tokens: bool,

    /// External findings importers.
    #[serde(default)]
    pub importers: Vec<ImporterSpec>,
}

impl AnalysisConfig {
    /// Load defaults from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// The active extractor names, defaulting to the full registry.
    pub fn active_extractors(&self) -> Vec<String> {
        match &self.modules {
            Some(names) => names.clone(),
            None => crate::extract::EXTRACTOR_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Effective worker count for the rayon pool.
    pub fn effective_jobs(&self) -> usize {
        self.jobs.unwrap_or_else(num_cpus::get).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn all_modules_active_by_default() {
        let config = AnalysisConfig::default();
        assert_eq!(
            config.active_extractors(),
            vec!["abc", "loc", "comments", "cyclomatic", "halstead"]
        );
    }

    #[test]
    fn toml_defaults_parse() {
        let text = indoc! {r#"
            modules = ["abc", "loc"]
            jobs = 2

            [[importers]]
            kind = "compiler"
            path = "warnings.json"
        "#};
        let config: AnalysisConfig = toml::from_str(text).unwrap();
        assert_eq!(config.active_extractors(), vec!["abc", "loc"]);
        assert_eq!(config.jobs, Some(2));
        assert_eq!(config.importers.len(), 1);
        assert_eq!(config.importers[0].kind, FindingsKind::Compiler);
    }

    #[test]
    fn effective_jobs_is_at_least_one() {
        let mut config = AnalysisConfig::default();
        config.jobs = Some(0);
        assert_eq!(config.effective_jobs(), 1);
    }
}
