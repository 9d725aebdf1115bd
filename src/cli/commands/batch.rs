//! Batch command - scripted-vs-scripted evaluation over many sessions

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::random;
use serde::Serialize;

use crate::{
    adapters::{ScriptedOpponent, StoredModelClassifier},
    cli::{commands::write_report, output},
    session::{ClassifierAdapter, MOCK_IDENTIFIER, Session, SessionReporter},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate the classifier over many scripted sessions")]
pub struct BatchArgs {
    /// Number of sessions to run
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Path to the stored model file
    #[arg(long, short = 'm', default_value = "best_model.json")]
    pub model: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a per-session report into this directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Export aggregate results as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct GameResult {
    game: usize,
    turns: usize,
    agreements: usize,
    accuracy: Option<f64>,
    final_state: String,
}

#[derive(Debug, Serialize)]
struct BatchReport {
    classifier: String,
    games: usize,
    total_turns: usize,
    agreements: usize,
    disagreements: usize,
    accuracy: Option<f64>,
    per_game: Vec<GameResult>,
}

pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_section("BATCH CLASSIFIER EVALUATION");

    let model = match StoredModelClassifier::load(&args.model) {
        Ok(model) => {
            println!("Loaded model from: {}", args.model.display());
            Some(model)
        }
        Err(err) => {
            eprintln!(
                "warning: could not load model from {} ({err}); \
                 falling back to {MOCK_IDENTIFIER} predictions",
                args.model.display()
            );
            None
        }
    };

    let base_seed = args.seed.unwrap_or_else(random);
    println!("Base seed: {base_seed}");

    let progress = output::create_batch_progress(args.games as u64)?;

    let mut per_game = Vec::with_capacity(args.games);
    let mut total_turns = 0;
    let mut agreements = 0;
    let mut classifier = String::new();

    for game in 0..args.games {
        // Two RNG streams per session plus one for the mock fallback
        let session_seed = base_seed.wrapping_add(game as u64 * 3);

        let mut adapter = match &model {
            Some(model) => ClassifierAdapter::with_model(Box::new(model.clone())),
            None => ClassifierAdapter::mock(),
        };
        adapter.reseed(session_seed.wrapping_add(2));

        let reporter = args
            .report_dir
            .as_ref()
            .map(|dir| SessionReporter::new(dir, adapter.info().clone()));

        let outcome = Session::new(
            Box::new(ScriptedOpponent::with_seed("ScriptedX", session_seed)),
            Box::new(ScriptedOpponent::with_seed(
                "ScriptedO",
                session_seed.wrapping_add(1),
            )),
            adapter,
        )
        .run()?;

        if let Some(reporter) = reporter {
            // A failed report write must not abort the remaining sessions
            write_report(&reporter, &outcome);
        }

        total_turns += outcome.summary.total;
        agreements += outcome.summary.agreements;
        classifier = outcome.summary.classifier.clone();

        per_game.push(GameResult {
            game: game + 1,
            turns: outcome.summary.total,
            agreements: outcome.summary.agreements,
            accuracy: outcome.summary.accuracy,
            final_state: outcome.description,
        });

        progress.inc(1);
        if let Some(accuracy) = running_accuracy(agreements, total_turns) {
            progress.set_message(format!("accuracy {:.1}%", accuracy * 100.0));
        }
    }
    progress.finish_and_clear();

    let report = BatchReport {
        classifier,
        games: args.games,
        total_turns,
        agreements,
        disagreements: total_turns - agreements,
        accuracy: running_accuracy(agreements, total_turns),
        per_game,
    };

    output::print_subsection("Aggregate results");
    output::print_kv("Classifier", &report.classifier);
    output::print_kv("Sessions", &report.games.to_string());
    output::print_kv("Evaluated turns", &report.total_turns.to_string());
    output::print_kv("Agreements", &report.agreements.to_string());
    output::print_kv("Disagreements", &report.disagreements.to_string());
    match report.accuracy {
        Some(accuracy) => {
            output::print_kv("Accuracy", &format!("{:.2}%", accuracy * 100.0));
        }
        None => output::print_kv("Accuracy", "n/a"),
    }

    if let Some(path) = &args.export {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json)
            .with_context(|| format!("failed to export results to {}", path.display()))?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}

fn running_accuracy(agreements: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(agreements as f64 / total as f64)
    }
}
