//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::{FeatureVector, StateLabel};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Character used when rendering the board grid on the console.
    pub fn to_grid_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A move targeting a board coordinate.
///
/// The mark placed is always the board's `to_move` player, so the move
/// itself only carries coordinates. Rows and columns run 0-2; values outside
/// that range are rejected when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Row-major cell index for in-range moves.
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub fn in_range(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Human-readable description of a board state, win checks before draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateDescription {
    Win(Player),
    Draw,
    NearTerminal,
    Continuing,
}

impl fmt::Display for StateDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateDescription::Win(player) => write!(f, "{player} WINS"),
            StateDescription::Draw => write!(f, "DRAW"),
            StateDescription::NearTerminal => write!(f, "NEAR-TERMINAL"),
            StateDescription::Continuing => write!(f, "CONTINUING"),
        }
    }
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` for efficiency since it's only 10 bytes
/// (9 bytes for cells + 1 byte for player enum). `make_move` returns a new
/// state, so a failed move can never leave a half-applied board behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X (the interactive player) to move.
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Get cell at a row-major position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty cells as moves, in row-major order
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::new(i / 3, i % 3))
            .collect()
    }

    /// Count the empty cells remaining.
    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Count X and O marks on the board.
    pub fn mark_counts(&self) -> (usize, usize) {
        let x = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o = self.cells.iter().filter(|&&c| c == Cell::O).count();
        (x, o)
    }

    /// Make a move and return a new board state
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] when the game has already ended,
    /// [`crate::Error::OutOfRange`] for coordinates outside 0-2 and
    /// [`crate::Error::OccupiedCell`] when the target cell is taken. The
    /// original board is unchanged either way.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, mv: Move) -> Result<BoardState, crate::Error> {
        if self.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        if !mv.in_range() {
            return Err(crate::Error::OutOfRange {
                row: mv.row,
                col: mv.col,
            });
        }

        if !self.is_empty(mv.index()) {
            return Err(crate::Error::OccupiedCell {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut new_state = *self;
        new_state.cells[mv.index()] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Get the winner if there is one.
    ///
    /// Winning lines are scanned rows first, then columns, then the two
    /// diagonals; the first complete line's mark is reported.
    pub fn winner(&self) -> Option<Player> {
        super::lines::LineAnalyzer::first_winner(&self.cells)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_cell_count() == 0
    }

    /// Ground-truth state label: `Terminal` iff a line is complete or the
    /// board is full, else `Continuing`. Pure, derived only from the cells.
    pub fn ground_truth(&self) -> StateLabel {
        if self.is_terminal() {
            StateLabel::Terminal
        } else {
            StateLabel::Continuing
        }
    }

    /// Human-readable state description, win checks before the draw check.
    ///
    /// A non-terminal board with two or fewer empty cells is reported as
    /// `NearTerminal`.
    pub fn describe_state(&self) -> StateDescription {
        if let Some(winner) = self.winner() {
            return StateDescription::Win(winner);
        }

        match self.empty_cell_count() {
            0 => StateDescription::Draw,
            1 | 2 => StateDescription::NearTerminal,
            _ => StateDescription::Continuing,
        }
    }

    /// Encode the board for the external classifier.
    pub fn encode_features(&self) -> FeatureVector {
        FeatureVector::from_board(self)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(usize, usize)]) -> BoardState {
        let mut board = BoardState::new();
        for &(row, col) in moves {
            board = board.make_move(Move::new(row, col)).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.to_move, Player::X);
        assert_eq!(board.empty_cell_count(), 9);
        assert_eq!(board.ground_truth(), StateLabel::Continuing);
    }

    #[test]
    fn test_make_move_alternates_players() {
        let mut board = BoardState::new();
        assert_eq!(board.to_move, Player::X);

        board = board.make_move(Move::new(1, 1)).unwrap();
        assert_eq!(board.cells[4], Cell::X);
        assert_eq!(board.to_move, Player::O);

        board = board.make_move(Move::new(0, 0)).unwrap();
        assert_eq!(board.cells[0], Cell::O);
        assert_eq!(board.to_move, Player::X);
    }

    #[test]
    fn test_occupied_cell_leaves_board_unchanged() {
        let board = play(&[(1, 1)]);
        let before = board;

        let result = board.make_move(Move::new(1, 1));
        assert!(matches!(
            result,
            Err(crate::Error::OccupiedCell { row: 1, col: 1 })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_move() {
        let board = BoardState::new();
        let result = board.make_move(Move::new(3, 0));
        assert!(matches!(
            result,
            Err(crate::Error::OutOfRange { row: 3, col: 0 })
        ));
    }

    #[test]
    fn test_no_moves_after_game_over() {
        // X takes the top row, then O tries to keep playing
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(matches!(
            board.make_move(Move::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_win_detection_row() {
        // X takes the top row
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.ground_truth(), StateLabel::Terminal);
        assert_eq!(board.describe_state(), StateDescription::Win(Player::X));
    }

    #[test]
    fn test_win_detection_column() {
        // O takes the middle column
        let board = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (2, 2), (2, 1)]);
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.ground_truth(), StateLabel::Terminal);
    }

    #[test]
    fn test_win_detection_diagonal() {
        // X takes the main diagonal
        let board = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.describe_state(), StateDescription::Win(Player::X));
    }

    #[test]
    fn test_win_detection_anti_diagonal() {
        // X takes the anti-diagonal
        let board = play(&[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        // Classic drawn game, board full with no line
        let board = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ]);
        assert_eq!(board.winner(), None);
        assert_eq!(board.ground_truth(), StateLabel::Terminal);
        assert_eq!(board.describe_state(), StateDescription::Draw);
    }

    #[test]
    fn test_near_terminal_description() {
        // Seven marks placed, no winner, two empty cells remain
        let board = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (2, 0), (1, 2)]);
        assert_eq!(board.winner(), None);
        assert_eq!(board.empty_cell_count(), 2);
        assert_eq!(board.describe_state(), StateDescription::NearTerminal);
        assert_eq!(board.ground_truth(), StateLabel::Continuing);
    }

    #[test]
    fn test_continuing_scenario() {
        // X center, O corner
        let board = play(&[(1, 1), (0, 0)]);
        assert_eq!(board.ground_truth(), StateLabel::Continuing);
        assert_eq!(board.describe_state(), StateDescription::Continuing);
        assert_eq!(board.empty_cell_count(), 7);
    }

    #[test]
    fn test_mark_count_invariant() {
        let mut board = BoardState::new();
        let sequence = [(1, 1), (0, 0), (0, 1), (2, 2), (2, 1)];
        for &(row, col) in &sequence {
            let (x, o) = board.mark_counts();
            assert!(x == o || x == o + 1);
            board = board.make_move(Move::new(row, col)).unwrap();
            let (x, o) = board.mark_counts();
            assert!(x == o || x == o + 1);
        }
    }

    #[test]
    fn test_empty_cells() {
        let board = play(&[(1, 1)]);
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&Move::new(1, 1)));
        assert!(empty.contains(&Move::new(0, 0)));
    }

    #[test]
    fn test_display() {
        let board = play(&[(0, 0), (0, 1), (1, 1)]);
        let display = format!("{board}");
        assert!(display.contains("XO."));
        assert!(display.contains(".X."));
    }
}
