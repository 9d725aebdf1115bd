//! Subcommand implementations.

pub mod batch;
pub mod play;

use std::path::Path;

use crate::{
    adapters::StoredModelClassifier,
    cli::output,
    session::{ClassifierAdapter, MOCK_IDENTIFIER, ReportHandle, SessionOutcome, SessionReporter},
};

/// Load the stored model, or fall back to the mock classifier with a warning.
///
/// A missing or unreadable model never prevents a session from running; it
/// only downgrades the evaluation to random predictions tagged with
/// [`MOCK_IDENTIFIER`].
pub(crate) fn build_adapter(model_path: &Path) -> ClassifierAdapter {
    match StoredModelClassifier::load(model_path) {
        Ok(model) => {
            let adapter = ClassifierAdapter::with_model(Box::new(model));
            println!("Loaded model from: {}", model_path.display());
            output::print_kv("Classifier", adapter.info().name.as_str());
            if let Some(accuracy) = adapter.info().accuracy {
                output::print_kv("Training accuracy", &format!("{accuracy:.2}%"));
            }
            adapter
        }
        Err(err) => {
            eprintln!(
                "warning: could not load model from {} ({err}); \
                 falling back to {MOCK_IDENTIFIER} predictions",
                model_path.display()
            );
            ClassifierAdapter::mock()
        }
    }
}

/// Write the session report, warning instead of failing.
///
/// The session is already over by the time the report is written, so a write
/// failure must not take its results down with it: the evaluation summary has
/// been printed and, in batch mode, later sessions still run.
pub(crate) fn write_report(
    reporter: &SessionReporter,
    outcome: &SessionOutcome,
) -> Option<ReportHandle> {
    match reporter.write(&outcome.history, &outcome.summary, &outcome.description) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: {err}; session results were not persisted");
            None
        }
    }
}
