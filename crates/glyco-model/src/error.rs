use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("artifact not found: {}", path.display())]
    MissingArtifact { path: PathBuf },

    #[error("malformed artifact {}: {reason}", path.display())]
    MalformedArtifact { path: PathBuf, reason: String },

    #[error("artifact read error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<glyco_core::error::CoreError> for ModelError {
    fn from(e: glyco_core::error::CoreError) -> Self {
        ModelError::InvalidInput(e.to_string())
    }
}
