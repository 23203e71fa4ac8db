use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lexmetric")]
#[command(about = "Token-driven source code metrics for batched exercise submissions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze bucket manifests and write one report per bucket
    Analyze {
        /// Bucket manifest files (one per round/fail-count pairing)
        #[arg(required = true)]
        manifests: Vec<PathBuf>,

        /// Directory for the result documents
        #[arg(short, long, default_value = "results")]
        output_dir: PathBuf,

        /// Worker-pool width (defaults to all cores)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Restrict the active metric modules
        #[arg(long, value_delimiter = ',')]
        modules: Option<Vec<String>>,

        /// TOML configuration file with defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Dump the manifests' raw token streams instead of analyzing
        #[arg(long)]
        dump: bool,

        /// Compiler warnings findings file (JSON keyed by source path)
        #[arg(long)]
        warn_compiler: Option<PathBuf>,

        /// Code duplication findings file
        #[arg(long)]
        warn_duplication: Option<PathBuf>,

        /// Static analysis findings file
        #[arg(long)]
        warn_functional: Option<PathBuf>,

        /// Language standard violation findings file
        #[arg(long)]
        warn_standard: Option<PathBuf>,

        /// Security issue findings file
        #[arg(long)]
        warn_security: Option<PathBuf>,

        /// Test coverage findings file
        #[arg(long)]
        coverage: Option<PathBuf>,
    },

    /// Dump raw token streams instead of analyzing
    Dump {
        /// Token dump files to print
        #[arg(required = true)]
        token_files: Vec<PathBuf>,
    },
}
