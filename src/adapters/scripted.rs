//! Scripted random opponent.
//!
//! Selects uniformly among currently empty cells, so an illegal move is
//! structurally impossible. The RNG is injectable for deterministic tests;
//! production sessions leave it unseeded.

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::{MoveRequest, MoveSource},
    tictactoe::BoardState,
};

/// Move source that plays a uniformly random empty cell.
pub struct ScriptedOpponent {
    rng: StdRng,
    name: String,
}

impl ScriptedOpponent {
    /// Create with an unseeded (OS entropy) RNG.
    pub fn new(name: impl Into<String>) -> Self {
        ScriptedOpponent {
            rng: StdRng::seed_from_u64(random()),
            name: name.into(),
        }
    }

    /// Create with a fixed seed for reproducible play.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        ScriptedOpponent {
            rng: StdRng::seed_from_u64(seed),
            name: name.into(),
        }
    }
}

impl MoveSource for ScriptedOpponent {
    fn next_move(&mut self, board: &BoardState) -> Result<MoveRequest> {
        let cells = board.empty_cells();
        if cells.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }

        let index = self.rng.random_range(0..cells.len());
        Ok(MoveRequest::Play(cells[index]))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
