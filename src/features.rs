//! Shared feature-encoding contract between the board and its classifiers.
//!
//! The external classifiers are trained on the tic-tac-toe endgame dataset,
//! which encodes cells as integers and labels positions with the lowercase
//! strings `"positive"` (game still open) and `"negative"` (terminal). Both
//! sides of that contract live here, in one place, so the game loop and the
//! model artifacts can never drift apart: artifacts record the
//! [`ENCODING_VERSION`] they were produced with and the loader rejects a
//! mismatch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, Cell};

/// Version of the cell-to-integer mapping below. Bump on any change.
pub const ENCODING_VERSION: u32 = 1;

/// Feature value for a cell holding an X mark.
pub const FEATURE_X: u8 = 0;

/// Feature value for a cell holding an O mark.
pub const FEATURE_O: u8 = 1;

/// Feature value for an empty cell.
pub const FEATURE_EMPTY: u8 = 2;

/// A 9-element feature vector, one value per board cell in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector([u8; 9]);

impl FeatureVector {
    /// Encode a board using the fixed cell-to-integer mapping.
    pub fn from_board(board: &BoardState) -> Self {
        let mut values = [FEATURE_EMPTY; 9];
        for (slot, &cell) in values.iter_mut().zip(board.cells.iter()) {
            *slot = match cell {
                Cell::X => FEATURE_X,
                Cell::O => FEATURE_O,
                Cell::Empty => FEATURE_EMPTY,
            };
        }
        FeatureVector(values)
    }

    /// Get the raw feature values.
    pub fn as_slice(&self) -> &[u8; 9] {
        &self.0
    }

    /// Render the vector as a 9-digit string, used as the lookup key in
    /// stored model artifacts.
    pub fn key(&self) -> String {
        self.0.iter().map(|&v| char::from(b'0' + v)).collect()
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Ground-truth or predicted game state, in the dataset's label vocabulary.
///
/// `Continuing` is the dataset's `"positive"` class, `Terminal` its
/// `"negative"` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateLabel {
    #[serde(rename = "positive")]
    Continuing,
    #[serde(rename = "negative")]
    Terminal,
}

impl StateLabel {
    /// Wire representation used by the classifier contract.
    pub fn as_wire(self) -> &'static str {
        match self {
            StateLabel::Continuing => "positive",
            StateLabel::Terminal => "negative",
        }
    }

    /// Parse a wire label.
    ///
    /// # Errors
    ///
    /// Any string outside the two-valued vocabulary is a
    /// [`crate::Error::ContractViolation`], never coerced.
    pub fn from_wire(label: &str) -> Result<Self, crate::Error> {
        match label {
            "positive" => Ok(StateLabel::Continuing),
            "negative" => Ok(StateLabel::Terminal),
            other => Err(crate::Error::ContractViolation {
                label: other.to_string(),
            }),
        }
    }

    /// Whether this label marks the end of a game.
    pub fn is_terminal(self) -> bool {
        matches!(self, StateLabel::Terminal)
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}
