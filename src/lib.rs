//! Online evaluation harness for tic-tac-toe state classifiers
//!
//! This crate provides:
//! - Complete tic-tac-toe board implementation with move validation
//! - Feature encoding matching the classifier's training contract
//! - An evaluation session that queries the classifier after every move
//!   and tracks its agreement with the ground-truth game state
//! - Plain-text session reports and a batch evaluation mode

pub mod adapters;
pub mod cli;
pub mod error;
pub mod features;
pub mod ports;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use features::{ENCODING_VERSION, FeatureVector, StateLabel};
pub use session::{ClassifierAdapter, EvaluationTracker, Session, SessionReporter};
pub use tictactoe::{BoardState, Move, Player, StateDescription};
