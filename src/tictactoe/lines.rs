//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board.
///
/// Order matters: lines are scanned rows first, then columns, then the two
/// diagonals, and state descriptions report the first complete line found.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find the mark of the first complete line in scan order, if any.
    ///
    /// Under alternating play only one player can hold a line, but the scan
    /// order (rows, columns, diagonals) is fixed regardless.
    pub fn first_winner(cells: &[Cell; 9]) -> Option<Player> {
        for line in &WINNING_LINES {
            match cells[line[0]] {
                Cell::Empty => continue,
                mark => {
                    if cells[line[1]] == mark && cells[line[2]] == mark {
                        return match mark {
                            Cell::X => Some(Player::X),
                            Cell::O => Some(Player::O),
                            Cell::Empty => None,
                        };
                    }
                }
            }
        }
        None
    }
}
