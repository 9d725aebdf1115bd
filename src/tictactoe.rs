//! Tic-Tac-Toe game implementation

pub mod board;
pub mod lines;
pub mod validation;

pub use board::{BoardState, Cell, Move, Player, StateDescription};
pub use lines::{LineAnalyzer, WINNING_LINES};
