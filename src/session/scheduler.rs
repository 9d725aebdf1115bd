//! Turn scheduler: drives one session from empty board to termination.
//!
//! The scheduler alternates between the two move sources (X always first),
//! applies each move, and evaluates the classifier against the ground truth
//! after every applied move. It never inspects raw input itself; move
//! sources hand it only legal moves or an abort.

use crate::{
    Result,
    cli::output,
    ports::{MoveRequest, MoveSource},
    session::adapter::ClassifierAdapter,
    session::tracker::{EvaluationTracker, PredictionRecord, SessionSummary},
    tictactoe::{BoardState, Player},
};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman,
    AwaitingOpponent,
    Terminal,
    Aborted,
}

/// Result of a completed (or aborted) session.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub summary: SessionSummary,
    pub history: Vec<PredictionRecord>,
    pub final_board: BoardState,
    /// Human-readable description of the final state, `"ABORTED"` when the
    /// session ended early.
    pub description: String,
    pub aborted: bool,
}

/// One evaluation session over a single board.
pub struct Session {
    board: BoardState,
    human: Box<dyn MoveSource>,
    opponent: Box<dyn MoveSource>,
    adapter: ClassifierAdapter,
    tracker: EvaluationTracker,
    phase: Phase,
    verbose: bool,
}

impl Session {
    /// New session on an empty board. The `human` source plays X and always
    /// moves first; the `opponent` source plays O.
    pub fn new(
        human: Box<dyn MoveSource>,
        opponent: Box<dyn MoveSource>,
        adapter: ClassifierAdapter,
    ) -> Self {
        let tracker = EvaluationTracker::new(adapter.identifier());
        Session {
            board: BoardState::new(),
            human,
            opponent,
            adapter,
            tracker,
            phase: Phase::AwaitingHuman,
            verbose: false,
        }
    }

    /// Print the board and per-turn analysis as the session runs.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Run to termination or abort, consuming the session.
    pub fn run(mut self) -> Result<SessionOutcome> {
        if self.verbose {
            println!("{}", output::render_board(&self.board));
        }

        loop {
            match self.phase {
                Phase::Terminal | Phase::Aborted => break,
                Phase::AwaitingHuman | Phase::AwaitingOpponent => self.step()?,
            }
        }

        let aborted = self.phase == Phase::Aborted;
        let description = if aborted {
            "ABORTED".to_string()
        } else {
            self.board.describe_state().to_string()
        };

        if self.verbose {
            println!("\nFINAL STATE: {description}");
        }

        Ok(SessionOutcome {
            summary: self.tracker.summary(),
            history: self.tracker.history().to_vec(),
            final_board: self.board,
            description,
            aborted,
        })
    }

    /// Request one move, apply it, and evaluate the resulting position.
    fn step(&mut self) -> Result<()> {
        let source = match self.board.to_move {
            Player::X => self.human.as_mut(),
            Player::O => self.opponent.as_mut(),
        };

        let mv = match source.next_move(&self.board)? {
            MoveRequest::Abort => {
                self.phase = Phase::Aborted;
                return Ok(());
            }
            MoveRequest::Play(mv) => mv,
        };

        let mover = self.board.to_move;
        let mover_name = match mover {
            Player::X => self.human.name().to_string(),
            Player::O => self.opponent.name().to_string(),
        };
        self.board = self.board.make_move(mv)?;

        if self.verbose {
            println!("\n{mover_name} ({mover}) plays {},{}", mv.row, mv.col);
            println!("{}", output::render_board(&self.board));
        }

        let record = self.evaluate_position();
        if self.verbose {
            self.print_analysis(&record);
        }

        self.phase = if self.board.is_terminal() {
            Phase::Terminal
        } else {
            match self.board.to_move {
                Player::X => Phase::AwaitingHuman,
                Player::O => Phase::AwaitingOpponent,
            }
        };

        Ok(())
    }

    /// Classifier prediction versus ground truth for the current board.
    fn evaluate_position(&mut self) -> PredictionRecord {
        let features = self.board.encode_features();
        let prediction = self.adapter.predict(&features);
        let ground_truth = self.board.ground_truth();
        let description = self.board.describe_state().to_string();
        self.tracker.record(ground_truth, prediction, description)
    }

    fn print_analysis(&self, record: &PredictionRecord) {
        let verdict = if record.agreed { "AGREE" } else { "DISAGREE" };
        println!(
            "[{}] turn {}: actual={} predicted={} -> {verdict}",
            self.adapter.identifier(),
            record.turn,
            record.ground_truth.as_wire(),
            record.prediction.as_wire(),
        );
        if let Some(accuracy) = self.tracker.accuracy() {
            println!("Running accuracy: {:.1}%", accuracy * 100.0);
        }
        println!("State: {}", record.description);
    }
}
