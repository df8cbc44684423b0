use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `source` is `None` when the version parses but a component exceeds `u32`
    #[error("Version {version:?} has no versionArray and does not split into u32 components")]
    InvalidVersion {
        version: String,
        #[source]
        source: Option<semver::Error>,
    },
}
