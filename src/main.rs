use anyhow::Result;
use clap::Parser;
use lexmetric::cli::{Cli, Commands};
use lexmetric::config::{AnalysisConfig, FindingsKind, ImporterSpec};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            manifests,
            output_dir,
            jobs,
            modules,
            config,
            dump,
            warn_compiler,
            warn_duplication,
            warn_functional,
            warn_standard,
            warn_security,
            coverage,
        } => {
            let mut analysis = match config {
                Some(path) => AnalysisConfig::from_file(&path)?,
                None => AnalysisConfig::default(),
            };
            if jobs.is_some() {
                analysis.jobs = jobs;
            }
            if modules.is_some() {
                analysis.modules = modules;
            }
            analysis.dump_tokens |= dump;
            let flag_importers = [
                (FindingsKind::Compiler, warn_compiler),
                (FindingsKind::Duplication, warn_duplication),
                (FindingsKind::Functional, warn_functional),
                (FindingsKind::Standard, warn_standard),
                (FindingsKind::Security, warn_security),
                (FindingsKind::Coverage, coverage),
            ];
            for (kind, path) in flag_importers {
                if let Some(path) = path {
                    analysis.importers.push(ImporterSpec { kind, path });
                }
            }

            run_analyze(&analysis, &manifests, &output_dir)
        }
        Commands::Dump { token_files } => run_dump(&token_files),
    }
}

fn run_analyze(
    config: &AnalysisConfig,
    manifests: &[PathBuf],
    output_dir: &PathBuf,
) -> Result<()> {
    for manifest_path in manifests {
        let manifest = lexmetric::io::load_manifest(manifest_path)?;

        if config.dump_tokens {
            let mut stdout = std::io::stdout().lock();
            for file in &manifest.files {
                match lexmetric::io::load_tokens(&file.tokens) {
                    Ok(tokens) => lexmetric::io::dump_tokens(
                        &mut stdout,
                        &file.path.display().to_string(),
                        &tokens,
                    )?,
                    Err(err) => log::warn!("skipping {}: {err}", file.path.display()),
                }
            }
            continue;
        }

        log::info!(
            "analyzing {} fails={} ({} files)",
            manifest.round,
            manifest.fail_count,
            manifest.files.len()
        );

        let report = lexmetric::pipeline::analyze_bucket(config, &manifest.files)?;
        let written = lexmetric::io::write_report(output_dir, &manifest.report_name(), &report)?;
        println!("Wrote {}", written.display());
    }
    Ok(())
}

fn run_dump(token_files: &[PathBuf]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for path in token_files {
        let tokens = lexmetric::io::load_tokens(path)?;
        lexmetric::io::dump_tokens(&mut stdout, &path.display().to_string(), &tokens)?;
    }
    Ok(())
}
