use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::classifier::{Classifier, ClassifierArtifact};
use crate::error::ModelError;
use crate::scaler::{Scaler, ScalerArtifact};

pub const SCALER_FILE: &str = "scaler.json";
pub const CLASSIFIER_FILE: &str = "classifier.json";

/// The two immutable artifacts the evaluator depends on.
#[derive(Clone)]
pub struct Artifacts {
    pub scaler: Scaler,
    pub classifier: Arc<dyn Classifier>,
}

/// Reads the scaler and classifier from a model directory.
///
/// A missing or malformed file is a deployment error; there is no retry.
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    dir: PathBuf,
}

impl ArtifactLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.dir.join(SCALER_FILE)
    }

    pub fn classifier_path(&self) -> PathBuf {
        self.dir.join(CLASSIFIER_FILE)
    }

    pub fn load(&self) -> Result<Artifacts, ModelError> {
        let scaler_path = self.scaler_path();
        let scaler_artifact: ScalerArtifact = read_json(&scaler_path)?;
        let scaler = Scaler::from_artifact(scaler_artifact).map_err(|reason| {
            ModelError::MalformedArtifact {
                path: scaler_path.clone(),
                reason,
            }
        })?;

        let classifier_path = self.classifier_path();
        let classifier_artifact: ClassifierArtifact = read_json(&classifier_path)?;
        let classifier = classifier_artifact.build().map_err(|reason| {
            ModelError::MalformedArtifact {
                path: classifier_path.clone(),
                reason,
            }
        })?;

        tracing::info!(
            scaler = %scaler_path.display(),
            classifier = %classifier_path.display(),
            kind = classifier.name(),
            "model artifacts loaded"
        );

        Ok(Artifacts {
            scaler,
            classifier: Arc::from(classifier),
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ModelError::MissingArtifact {
                path: path.to_path_buf(),
            }
        } else {
            ModelError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|e| ModelError::MalformedArtifact {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
