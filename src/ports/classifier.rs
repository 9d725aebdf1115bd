//! Classifier port - abstraction for the external terminal-state classifier
//!
//! The models themselves are trained and selected elsewhere; this crate only
//! consumes them through this boundary. Following hexagonal architecture,
//! the trait is owned by the domain and implemented by adapters.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    features::{FeatureVector, StateLabel},
};

/// Display metadata for a loaded classifier.
///
/// `accuracy` is the model's reported offline accuracy in percent, used only
/// for the report header. It may be absent; absence never blocks gameplay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub accuracy: Option<f64>,
}

impl ModelInfo {
    /// Metadata with a name only, for classifiers without a reported accuracy.
    pub fn named(name: impl Into<String>) -> Self {
        ModelInfo {
            name: name.into(),
            accuracy: None,
        }
    }
}

/// Classifier trait - predicts whether a position is ongoing or terminal
///
/// The single operation takes the 9-element feature vector for a board and
/// returns a [`StateLabel`]. Implementations are read-only oracles from the
/// session's perspective; `&mut self` exists only so adapters may keep
/// internal state such as caches or RNGs.
pub trait Classifier: Send {
    /// Predict the state label for an encoded board.
    ///
    /// # Errors
    ///
    /// Implementations surface [`crate::Error::ContractViolation`] when the
    /// underlying model produces a label outside the positive/negative
    /// vocabulary, and may fail with I/O or serialization errors of their
    /// own. The session adapter treats any error as a recoverable per-turn
    /// condition.
    fn predict(&mut self, features: &FeatureVector) -> Result<StateLabel>;

    /// Display metadata for reports and console output.
    fn info(&self) -> ModelInfo;
}
