//! Move source port - abstraction for the two players feeding the session
//!
//! The scheduler alternates between two sources: the interactive human
//! player and the scripted random opponent. Both are adapters behind this
//! trait, which keeps the turn loop free of input handling.

use crate::{
    Result,
    tictactoe::{BoardState, Move},
};

/// A move source's answer to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRequest {
    /// Place a mark at the given coordinates. Interactive sources re-prompt
    /// until the move is legal for the given board; scripted sources select
    /// only from currently empty cells.
    Play(Move),
    /// Abort the session. Only interactive sources produce this.
    Abort,
}

/// A supplier of moves for one side of the board.
pub trait MoveSource: Send {
    /// Produce the next move for the given board.
    ///
    /// This call may block indefinitely (e.g. waiting for console input).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the board has no empty
    /// cell, which the scheduler prevents by checking for terminal states
    /// first, or an I/O error from the input channel.
    fn next_move(&mut self, board: &BoardState) -> Result<MoveRequest>;

    /// Name used in console output and reports.
    fn name(&self) -> &str;
}
