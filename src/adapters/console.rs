//! Interactive console move source.
//!
//! Reads `"row,col"` moves from any buffered reader (stdin in production,
//! a cursor in tests). Malformed input and illegal moves are handled here by
//! re-prompting; the scheduler only ever sees a legal move or an abort.

use std::io::{self, BufRead, BufReader, Write};

use crate::{
    Result,
    error::Error,
    ports::{MoveRequest, MoveSource},
    tictactoe::{BoardState, validation},
};

/// Move source backed by a line-oriented reader.
pub struct ConsoleMoveSource<R: BufRead + Send> {
    input: R,
    name: String,
}

impl ConsoleMoveSource<BufReader<io::Stdin>> {
    /// Interactive source reading from standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()), "Human")
    }
}

impl<R: BufRead + Send> ConsoleMoveSource<R> {
    /// Source reading from an arbitrary buffered reader.
    pub fn new(input: R, name: impl Into<String>) -> Self {
        ConsoleMoveSource {
            input,
            name: name.into(),
        }
    }

    fn prompt(&self) -> Result<()> {
        print!("\nYOUR TURN (X) - enter row,col (e.g. 1,1), or 'quit': ");
        io::stdout().flush().map_err(|source| Error::Io {
            operation: "flush stdout".to_string(),
            source,
        })
    }
}

impl<R: BufRead + Send> MoveSource for ConsoleMoveSource<R> {
    fn next_move(&mut self, board: &BoardState) -> Result<MoveRequest> {
        loop {
            self.prompt()?;

            let mut line = String::new();
            let bytes = self
                .input
                .read_line(&mut line)
                .map_err(|source| Error::Io {
                    operation: "read move input".to_string(),
                    source,
                })?;

            // EOF on the input channel counts as an abort.
            if bytes == 0 {
                return Ok(MoveRequest::Abort);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if validation::is_abort(trimmed) {
                return Ok(MoveRequest::Abort);
            }

            let mv = match validation::parse_move(trimmed) {
                Ok(mv) => mv,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };

            if let Err(err) = validation::validate(board, mv) {
                println!("{err}");
                continue;
            }

            return Ok(MoveRequest::Play(mv));
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::tictactoe::Move;

    fn source(script: &str) -> ConsoleMoveSource<Cursor<Vec<u8>>> {
        ConsoleMoveSource::new(Cursor::new(script.as_bytes().to_vec()), "Test")
    }

    #[test]
    fn test_reads_legal_move() {
        let mut src = source("1,1\n");
        let board = BoardState::new();
        assert_eq!(
            src.next_move(&board).unwrap(),
            MoveRequest::Play(Move::new(1, 1))
        );
    }

    #[test]
    fn test_reprompts_on_malformed_and_illegal_input() {
        // Garbage, out-of-range, occupied, then a legal move
        let mut src = source("banana\n7,7\n1,1\n0,2\n");
        let board = BoardState::new().make_move(Move::new(1, 1)).unwrap();
        assert_eq!(
            src.next_move(&board).unwrap(),
            MoveRequest::Play(Move::new(0, 2))
        );
    }

    #[test]
    fn test_abort_sentinel() {
        let mut src = source("quit\n");
        let board = BoardState::new();
        assert_eq!(src.next_move(&board).unwrap(), MoveRequest::Abort);
    }

    #[test]
    fn test_eof_aborts() {
        let mut src = source("");
        let board = BoardState::new();
        assert_eq!(src.next_move(&board).unwrap(), MoveRequest::Abort);
    }
}
