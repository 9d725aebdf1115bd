//! Error types for the evaluation harness

use thiserror::Error;

/// Main error type for the evaluation harness
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: cell ({row},{col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("illegal move: ({row},{col}) is out of range (rows and columns run 0-2)")]
    OutOfRange { row: usize, col: usize },

    #[error("malformed move input '{input}' (expected row,col with each in 0-2)")]
    MalformedInput { input: String },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("classifier unavailable: {reason}")]
    ClassifierUnavailable { reason: String },

    #[error("classifier returned '{label}', outside the positive/negative label contract")]
    ContractViolation { label: String },

    #[error(
        "model artifact '{path}' uses feature encoding version {found}, this build expects {expected}"
    )]
    EncodingMismatch {
        path: String,
        found: u32,
        expected: u32,
    },

    #[error("failed to write report '{path}': {message}")]
    ReportWrite { path: String, message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
