//! JSON model-artifact classifier.
//!
//! The training pipeline (out of scope here) exports its selected model as a
//! JSON artifact: metadata plus a table mapping encoded positions to wire
//! labels. This adapter implements the [`Classifier`] port on top of such an
//! artifact, the Rust-side analog of loading the original pickled model.

use std::{collections::HashMap, fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    error::Error,
    features::{ENCODING_VERSION, FeatureVector, StateLabel},
    ports::{Classifier, ModelInfo},
};

/// Serialized form of an exported model.
///
/// Labels are stored as raw wire strings rather than typed values so that a
/// corrupt or incompatible artifact surfaces as a per-prediction
/// [`Error::ContractViolation`] instead of being silently coerced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Display name of the algorithm, e.g. "SVM".
    pub algorithm: String,
    /// Reported offline accuracy in percent, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    /// Feature-encoding version the model was trained against.
    pub encoding_version: u32,
    /// Label used for positions absent from the table.
    pub majority_label: String,
    /// Wire label per encoded position key (see [`FeatureVector::key`]).
    pub predictions: HashMap<String, String>,
}

/// Classifier backed by a stored [`ModelArtifact`].
#[derive(Debug, Clone)]
pub struct StoredModelClassifier {
    artifact: ModelArtifact,
}

impl StoredModelClassifier {
    /// Load an artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ClassifierUnavailable`] when the file cannot be
    /// opened, on JSON errors, or with [`Error::EncodingMismatch`] when the
    /// artifact was trained against a different feature encoding.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|err| Error::ClassifierUnavailable {
            reason: format!("cannot open model artifact {}: {err}", path.display()),
        })?;

        let artifact: ModelArtifact = serde_json::from_reader(file)?;
        Self::from_artifact(artifact, &path.display().to_string())
    }

    /// Wrap an in-memory artifact, checking its encoding version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingMismatch`] when the artifact's encoding
    /// version differs from [`ENCODING_VERSION`].
    pub fn from_artifact(artifact: ModelArtifact, origin: &str) -> Result<Self> {
        if artifact.encoding_version != ENCODING_VERSION {
            return Err(Error::EncodingMismatch {
                path: origin.to_string(),
                found: artifact.encoding_version,
                expected: ENCODING_VERSION,
            });
        }

        Ok(StoredModelClassifier { artifact })
    }

    /// Access the underlying artifact.
    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }
}

impl Classifier for StoredModelClassifier {
    fn predict(&mut self, features: &FeatureVector) -> Result<StateLabel> {
        let wire = self
            .artifact
            .predictions
            .get(&features.key())
            .unwrap_or(&self.artifact.majority_label);
        StateLabel::from_wire(wire)
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            name: self.artifact.algorithm.clone(),
            accuracy: self.artifact.accuracy,
        }
    }
}
