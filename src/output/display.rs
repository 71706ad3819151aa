//! Display functions for game and simulation results

use super::formatters::{create_progress_bar, verdict};
use crate::commands::SimulationResult;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};

/// Print the end-of-game summary
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_final_score<W: Write>(
    out: &mut W,
    score: u32,
    solved: usize,
    rounds: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "  {}", "🎉 Congratulations! 🎉".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  You scored {}!",
        score.to_string().bright_yellow().bold()
    )?;
    writeln!(out, "  Words unscrambled: {solved}/{rounds}")?;
    writeln!(out, "  {}\n", verdict(solved, rounds).bright_white())
}

/// Progress bar for a simulation run
#[must_use]
pub fn simulation_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Scores:".bright_cyan().bold());
    println!("   Sessions played:  {}", result.total_sessions);
    println!("   Rounds played:    {}", result.rounds_played);
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score).bright_yellow().bold()
    );
    println!(
        "   Best session:     {}",
        result.max_score.to_string().green()
    );
    println!(
        "   Worst session:    {}",
        result.min_score.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Sessions/second:  {:.1}", result.sessions_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (score, &count) in &result.distribution {
        let pct = (count as f64 / result.total_sessions as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {score:>5}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}
