//! Plain-text session reports.
//!
//! One report per session, named after the session's start timestamp. The
//! report is rendered fully in memory, written to a temporary sibling file
//! and renamed into place, so a crash never leaves a truncated report.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::{
    Result,
    error::Error,
    ports::ModelInfo,
    session::tracker::{PredictionRecord, SessionSummary},
};

/// Location of a successfully written report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHandle {
    pub path: PathBuf,
}

/// Renders and persists the end-of-session report.
pub struct SessionReporter {
    directory: PathBuf,
    model: ModelInfo,
    started_at: DateTime<Local>,
}

impl SessionReporter {
    /// Reporter for a session starting now, writing into `directory`.
    pub fn new(directory: impl Into<PathBuf>, model: ModelInfo) -> Self {
        SessionReporter {
            directory: directory.into(),
            model,
            started_at: Local::now(),
        }
    }

    /// Reporter with an explicit start time, for deterministic file names.
    pub fn at(directory: impl Into<PathBuf>, model: ModelInfo, started_at: DateTime<Local>) -> Self {
        SessionReporter {
            directory: directory.into(),
            model,
            started_at,
        }
    }

    /// File name derived from the session start time.
    pub fn file_name(&self) -> String {
        format!(
            "session_report_{}.txt",
            self.started_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Render the report text without touching the filesystem.
    pub fn render(
        &self,
        history: &[PredictionRecord],
        summary: &SessionSummary,
        final_description: &str,
    ) -> String {
        let mut out = String::new();

        out.push_str("=================================================\n");
        out.push_str("        CLASSIFIER EVALUATION REPORT\n");
        out.push_str("=================================================\n\n");
        out.push_str(&format!(
            "Date:       {}\n",
            self.started_at.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str(&format!("Classifier: {}\n", self.model.name));
        if let Some(accuracy) = self.model.accuracy {
            out.push_str(&format!("Training accuracy: {accuracy:.2}%\n"));
        }
        out.push_str(&format!("Final state: {final_description}\n\n"));

        out.push_str("Turn-by-turn predictions\n");
        out.push_str("-------------------------------------------------\n");
        if history.is_empty() {
            out.push_str("(no turns were evaluated)\n");
        }
        for record in history {
            let verdict = if record.agreed { "OK " } else { "MISS" };
            out.push_str(&format!(
                "Turn {:>2}  [{verdict}]  actual: {:<8}  predicted: {:<8}  state: {}\n",
                record.turn,
                record.ground_truth.as_wire(),
                record.prediction.as_wire(),
                record.description,
            ));
        }

        out.push_str("\nSummary\n");
        out.push_str("-------------------------------------------------\n");
        out.push_str(&format!("Evaluated turns: {}\n", summary.total));
        out.push_str(&format!("Agreements:      {}\n", summary.agreements));
        out.push_str(&format!("Disagreements:   {}\n", summary.disagreements));
        match summary.accuracy {
            Some(accuracy) => {
                out.push_str(&format!("Session accuracy: {:.1}%\n", accuracy * 100.0));
            }
            None => out.push_str("Session accuracy: n/a (no evaluated turns)\n"),
        }

        out
    }

    /// Write the report and return where it landed.
    pub fn write(
        &self,
        history: &[PredictionRecord],
        summary: &SessionSummary,
        final_description: &str,
    ) -> Result<ReportHandle> {
        let contents = self.render(history, summary, final_description);
        let path = self.directory.join(self.file_name());
        write_atomically(&path, &contents)?;
        Ok(ReportHandle { path })
    }
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("txt.tmp");

    fs::write(&tmp_path, contents).map_err(|err| Error::ReportWrite {
        path: tmp_path.display().to_string(),
        message: err.to_string(),
    })?;

    fs::rename(&tmp_path, path).map_err(|err| {
        let _ = fs::remove_file(&tmp_path);
        Error::ReportWrite {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    })
}
