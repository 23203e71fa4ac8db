//! Filesystem boundaries: manifests in, token dumps in, reports out.

pub mod manifest;
pub mod output;
pub mod tokens;

pub use manifest::{load_manifest, BucketManifest, ManifestFile};
pub use output::write_report;
pub use tokens::{dump_tokens, load_tokens};
