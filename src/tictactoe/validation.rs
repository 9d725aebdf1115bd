//! Move legality rules and textual move parsing

use super::board::{BoardState, Move};

/// Sentinel inputs that abort the session at a move prompt.
const ABORT_SENTINELS: [&str; 4] = ["quit", "exit", "sair", "q"];

/// Validate a move against a board.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfRange`] for coordinates outside 0-2 and
/// [`crate::Error::OccupiedCell`] when the target cell is taken.
pub fn validate(board: &BoardState, mv: Move) -> Result<(), crate::Error> {
    if !mv.in_range() {
        return Err(crate::Error::OutOfRange {
            row: mv.row,
            col: mv.col,
        });
    }

    if !board.is_empty(mv.index()) {
        return Err(crate::Error::OccupiedCell {
            row: mv.row,
            col: mv.col,
        });
    }

    Ok(())
}

/// Predicate form of [`validate`].
pub fn is_legal(board: &BoardState, mv: Move) -> bool {
    validate(board, mv).is_ok()
}

/// Check whether the input is a session-abort sentinel.
pub fn is_abort(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    ABORT_SENTINELS.contains(&lowered.as_str())
}

/// Parse a textual `"row,col"` move.
///
/// Range checking is left to [`validate`] so malformed input and illegal
/// coordinates stay distinct error classes.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedInput`] when the text is not two
/// comma-separated non-negative integers.
pub fn parse_move(input: &str) -> Result<Move, crate::Error> {
    let malformed = || crate::Error::MalformedInput {
        input: input.to_string(),
    };

    let mut parts = input.trim().split(',');
    let row = parts
        .next()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .ok_or_else(malformed)?;
    let col = parts
        .next()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .ok_or_else(malformed)?;

    if parts.next().is_some() {
        return Err(malformed());
    }

    Ok(Move::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_move() {
        assert_eq!(parse_move("1,2").unwrap(), Move::new(1, 2));
        assert_eq!(parse_move(" 0 , 0 ").unwrap(), Move::new(0, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "1", "a,b", "1,2,3", "1;2", "-1,0"] {
            assert!(
                matches!(parse_move(input), Err(crate::Error::MalformedInput { .. })),
                "expected MalformedInput for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_leaves_range_to_validate() {
        // 5,5 parses fine; validate rejects it
        let mv = parse_move("5,5").unwrap();
        let board = BoardState::new();
        assert!(matches!(
            validate(&board, mv),
            Err(crate::Error::OutOfRange { row: 5, col: 5 })
        ));
        assert!(!is_legal(&board, mv));
    }

    #[test]
    fn test_validate_occupied() {
        let board = BoardState::new().make_move(Move::new(1, 1)).unwrap();
        assert!(matches!(
            validate(&board, Move::new(1, 1)),
            Err(crate::Error::OccupiedCell { row: 1, col: 1 })
        ));
        assert!(is_legal(&board, Move::new(0, 0)));
    }

    #[test]
    fn test_abort_sentinels() {
        for input in ["quit", "QUIT", "exit", "sair", "q", " q "] {
            assert!(is_abort(input), "expected abort for {input:?}");
        }
        assert!(!is_abort("1,1"));
        assert!(!is_abort("quite"));
    }
}
