//! ttt-eval CLI - online evaluation of tic-tac-toe state classifiers
//!
//! This CLI provides a unified interface for:
//! - Playing interactive sessions against the scripted opponent
//! - Running batch evaluations over many scripted sessions

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt-eval")]
#[command(version, about = "Online evaluation harness for tic-tac-toe state classifiers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session and evaluate the classifier per turn
    Play(tictactoe_eval::cli::commands::play::PlayArgs),

    /// Run scripted-vs-scripted sessions and aggregate classifier accuracy
    Batch(tictactoe_eval::cli::commands::batch::BatchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => tictactoe_eval::cli::commands::play::execute(args),
        Commands::Batch(args) => tictactoe_eval::cli::commands::batch::execute(args),
    }
}
