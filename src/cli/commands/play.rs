//! Play command - interactive session against the scripted opponent

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::{ConsoleMoveSource, ScriptedOpponent},
    cli::{
        commands::{build_adapter, write_report},
        output,
    },
    session::{Session, SessionReporter},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive evaluation session")]
pub struct PlayArgs {
    /// Path to the stored model file
    #[arg(long, short = 'm', default_value = "best_model.json")]
    pub model: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for session reports
    #[arg(long, default_value = ".")]
    pub report_dir: PathBuf,

    /// Skip writing the session report
    #[arg(long)]
    pub no_report: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    output::print_section("TIC-TAC-TOE CLASSIFIER EVALUATION");

    let mut iteration = 0u64;
    loop {
        let mut adapter = build_adapter(&args.model);
        let mut opponent = ScriptedOpponent::new("Machine");
        if let Some(seed) = args.seed {
            let session_seed = replay_seed(seed, iteration);
            opponent = ScriptedOpponent::with_seed("Machine", session_seed);
            adapter.reseed(session_seed.wrapping_add(1));
        }
        iteration += 1;

        let reporter = SessionReporter::new(&args.report_dir, adapter.info().clone());

        let outcome = Session::new(
            Box::new(ConsoleMoveSource::stdin()),
            Box::new(opponent),
            adapter,
        )
        .verbose(true)
        .run()?;

        output::print_subsection("Session summary");
        output::print_kv("Classifier", &outcome.summary.classifier);
        output::print_kv("Evaluated turns", &outcome.summary.total.to_string());
        output::print_kv("Agreements", &outcome.summary.agreements.to_string());
        output::print_kv(
            "Disagreements",
            &outcome.summary.disagreements.to_string(),
        );
        match outcome.summary.accuracy {
            Some(accuracy) => {
                output::print_kv("Session accuracy", &format!("{:.1}%", accuracy * 100.0));
            }
            None => output::print_kv("Session accuracy", "n/a"),
        }

        if !args.no_report
            && let Some(handle) = write_report(&reporter, &outcome)
        {
            println!("\nReport written to: {}", handle.path.display());
        }

        if !ask_play_again()? {
            break;
        }
    }

    Ok(())
}

/// Seed for one iteration of the play-again loop.
///
/// Each iteration uses two RNG streams (opponent and classifier fallback),
/// so iterations are spaced two apart; replayed games stay reproducible
/// without repeating the previous game's moves.
fn replay_seed(base: u64, iteration: u64) -> u64 {
    base.wrapping_add(iteration.wrapping_mul(2))
}

fn ask_play_again() -> Result<bool> {
    print!("\nPlay again? (y/n): ");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
