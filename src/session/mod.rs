//! Online evaluation session: turn scheduling, prediction tracking, reporting.
//!
//! A session owns one board from empty grid to termination or abort, queries
//! the classifier after every move, and accumulates the per-turn evaluation
//! history that the reporter persists.

pub mod adapter;
pub mod reporter;
pub mod scheduler;
pub mod tracker;

pub use adapter::{ClassifierAdapter, MOCK_IDENTIFIER};
pub use reporter::{ReportHandle, SessionReporter};
pub use scheduler::{Phase, Session, SessionOutcome};
pub use tracker::{EvaluationTracker, PredictionRecord, SessionSummary};
