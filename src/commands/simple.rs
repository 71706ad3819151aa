//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{Session, TurnOutcome};
use crate::output::print_final_score;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut Session<'_, R>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Unscramble - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Unscramble the letters to find the original word.");
    println!("Commands: 'skip' to skip a word, 'restart' for new game, 'quit' to exit\n");

    let stdin = io::stdin();
    play(session, &mut stdin.lock(), &mut io::stdout())
}

/// Game loop over arbitrary input/output streams
///
/// Returns when the player quits, declines to play again, or input ends.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn play<R, I, O>(session: &mut Session<'_, R>, input: &mut I, output: &mut O) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    loop {
        let view = session.view();
        let max_rounds = view.max_rounds;
        writeln!(output, "────────────────────────────────────────────────────────────")?;
        writeln!(
            output,
            "Word {} of {}    Score: {}",
            view.round, view.max_rounds, view.score
        )?;
        writeln!(output, "\n   {}\n", view.scrambled.bright_yellow().bold())?;

        let Some(line) = prompt(input, output, "Your guess")? else {
            return Ok(());
        };

        let outcome = match line.as_str() {
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "restart" | "new" => {
                session.restart();
                writeln!(output, "\n🔄 New game started!\n")?;
                continue;
            }
            "skip" | "s" => session.skip(),
            guess => session.submit(guess),
        };

        match outcome {
            TurnOutcome::Correct => writeln!(output, "{}", "✓ Correct!".green())?,
            TurnOutcome::Skipped => writeln!(output, "Skipped.")?,
            TurnOutcome::TryAgain => writeln!(output, "{}", "✗ Try again!".red())?,
            TurnOutcome::GameOver { final_score } => {
                print_final_score(output, final_score, session.words_solved(), max_rounds)?;

                let answer = prompt(input, output, "Play again? (yes/no)")?;
                match answer.as_deref().map(str::to_lowercase).as_deref() {
                    Some("yes" | "y") => {
                        session.restart();
                        writeln!(output, "\n🔄 New game started!\n")?;
                    }
                    _ => {
                        writeln!(output, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Prompt for one line; `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, output: &mut O, text: &str) -> io::Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    // Only the line terminator is stripped; guesses are compared exactly
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
