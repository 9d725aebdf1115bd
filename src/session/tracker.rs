//! Per-turn evaluation history and running accuracy.

use serde::{Deserialize, Serialize};

use crate::features::StateLabel;

/// One turn's evaluation: ground truth versus the classifier's prediction.
///
/// Records are immutable once created and the history is strictly
/// append-only; `turn` is 1-based and increases by one per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub turn: usize,
    pub ground_truth: StateLabel,
    pub prediction: StateLabel,
    pub agreed: bool,
    pub description: String,
}

/// Snapshot of the session's evaluation counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total: usize,
    pub agreements: usize,
    pub disagreements: usize,
    /// Agreements over total. `None` until the first record; never reported
    /// as zero percent for an empty session.
    pub accuracy: Option<f64>,
    /// Identifier of the classifier that produced the predictions.
    pub classifier: String,
}

/// Accumulator for prediction records and running accuracy.
#[derive(Debug, Clone)]
pub struct EvaluationTracker {
    records: Vec<PredictionRecord>,
    agreements: usize,
    disagreements: usize,
    classifier: String,
}

impl EvaluationTracker {
    /// Create an empty tracker for the given classifier identifier.
    pub fn new(classifier: impl Into<String>) -> Self {
        EvaluationTracker {
            records: Vec::new(),
            agreements: 0,
            disagreements: 0,
            classifier: classifier.into(),
        }
    }

    /// Append one turn's evaluation and return the stored record.
    pub fn record(
        &mut self,
        ground_truth: StateLabel,
        prediction: StateLabel,
        description: String,
    ) -> PredictionRecord {
        let agreed = ground_truth == prediction;
        if agreed {
            self.agreements += 1;
        } else {
            self.disagreements += 1;
        }

        let record = PredictionRecord {
            turn: self.records.len() + 1,
            ground_truth,
            prediction,
            agreed,
            description,
        };
        self.records.push(record.clone());
        record
    }

    /// Running accuracy, `None` before the first record.
    pub fn accuracy(&self) -> Option<f64> {
        if self.records.is_empty() {
            None
        } else {
            Some(self.agreements as f64 / self.records.len() as f64)
        }
    }

    /// Number of records so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn agreements(&self) -> usize {
        self.agreements
    }

    pub fn disagreements(&self) -> usize {
        self.disagreements
    }

    /// The full ordered history.
    pub fn history(&self) -> &[PredictionRecord] {
        &self.records
    }

    /// Pure snapshot of the current counters, safe to call mid-session.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total: self.records.len(),
            agreements: self.agreements,
            disagreements: self.disagreements,
            accuracy: self.accuracy(),
            classifier: self.classifier.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_undefined_before_first_record() {
        let tracker = EvaluationTracker::new("Test");
        assert_eq!(tracker.accuracy(), None);
        let summary = tracker.summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.accuracy, None);
    }

    #[test]
    fn test_running_accuracy_incremental() {
        let mut tracker = EvaluationTracker::new("Test");
        let outcomes = [true, true, false, true, false];
        let mut agreed_so_far = 0;

        for (i, &agree) in outcomes.iter().enumerate() {
            let prediction = if agree {
                StateLabel::Continuing
            } else {
                StateLabel::Terminal
            };
            tracker.record(
                StateLabel::Continuing,
                prediction,
                "CONTINUING".to_string(),
            );

            if agree {
                agreed_so_far += 1;
            }
            let expected = agreed_so_far as f64 / (i + 1) as f64;
            assert_eq!(tracker.accuracy(), Some(expected));
        }

        assert_eq!(tracker.agreements(), 3);
        assert_eq!(tracker.disagreements(), 2);
    }

    #[test]
    fn test_ordinals_strictly_increase() {
        let mut tracker = EvaluationTracker::new("Test");
        for i in 1..=6 {
            let record = tracker.record(
                StateLabel::Continuing,
                StateLabel::Continuing,
                "CONTINUING".to_string(),
            );
            assert_eq!(record.turn, i);
        }

        let turns: Vec<usize> = tracker.history().iter().map(|r| r.turn).collect();
        assert_eq!(turns, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_history_preserves_records() {
        let mut tracker = EvaluationTracker::new("Test");
        let first = tracker.record(
            StateLabel::Terminal,
            StateLabel::Continuing,
            "DRAW".to_string(),
        );
        assert!(!first.agreed);

        tracker.record(StateLabel::Terminal, StateLabel::Terminal, "DRAW".to_string());

        // Earlier records are untouched by later appends
        assert_eq!(tracker.history()[0], first);
        assert_eq!(tracker.history().len(), 2);
    }

    #[test]
    fn test_disagreement_on_terminal_board() {
        let mut tracker = EvaluationTracker::new("Test");
        tracker.record(
            StateLabel::Terminal,
            StateLabel::Continuing,
            "X WINS".to_string(),
        );

        let summary = tracker.summary();
        assert_eq!(summary.disagreements, 1);
        assert_eq!(summary.agreements, 0);
        assert_eq!(summary.accuracy, Some(0.0));
    }

    #[test]
    fn test_summary_snapshot_mid_session() {
        let mut tracker = EvaluationTracker::new("SVM");
        tracker.record(
            StateLabel::Continuing,
            StateLabel::Continuing,
            "CONTINUING".to_string(),
        );

        let summary = tracker.summary();
        assert_eq!(summary.classifier, "SVM");
        assert_eq!(summary.total, 1);
        assert_eq!(summary.accuracy, Some(1.0));

        // Taking a summary does not disturb the tracker
        tracker.record(
            StateLabel::Continuing,
            StateLabel::Terminal,
            "CONTINUING".to_string(),
        );
        assert_eq!(tracker.len(), 2);
    }
}
