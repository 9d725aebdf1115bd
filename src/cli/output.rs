//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, error::Error, tictactoe::BoardState};

/// Render the board as a labelled 3x3 grid.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::from("\n   0   1   2\n");
    for row in 0..3 {
        out.push_str(&format!("{row} "));
        for col in 0..3 {
            out.push_str(&format!(" {} ", board.get(row * 3 + col).to_grid_char()));
            if col < 2 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("  ---|---|---\n");
        }
    }
    out
}

/// Create a progress bar for batch evaluation runs.
pub fn create_batch_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map_err(|err| Error::ProgressBarTemplate {
            message: err.to_string(),
        })?;
    pb.set_style(style.progress_chars("=>-"));
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
