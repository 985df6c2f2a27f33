//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each line is typed into the round
//! letter by letter and then submitted.

use crate::config::ROWS;
use crate::core::Word;
use crate::game::{Event, Input, Session, Tone};
use crate::output::formatters::{keyboard_line, tile_row};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<R: Rng>(session: &mut Session<'_, R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the simple mode over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_simple_with<R: Rng>(
    session: &mut Session<'_, R>,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Wordle - Simple Mode                       ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "{}", session.message().text)?;
    writeln!(out, "Commands: 'new' for a new word, 'quit' to exit\n")?;

    loop {
        let (row, _) = session.round().cursor();
        let Some(line) = prompt(&mut input, &mut out, &format!("Guess {}/{ROWS}", row + 1))?
        else {
            writeln!(out)?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                session.reset();
                writeln!(out, "\n🔄 {}\n", session.message().text)?;
                continue;
            }
            "" => continue,
            _ => {}
        }

        // Only whole 5-letter words reach the round
        let guess = match Word::new(&line) {
            Ok(guess) => guess,
            Err(e) => {
                log::debug!("Rejected line '{line}': {e}");
                writeln!(out, "{}", "❌ Need a 5-letter word.".yellow())?;
                continue;
            }
        };

        let mut outcome = Ok(Event::Ignored);
        for key in Input::for_word(guess.as_str()) {
            outcome = session.handle(key);
        }

        match outcome {
            Err(e) => {
                writeln!(out, "{}", format!("❌ {e}").yellow())?;
                clear_row(session);
                continue;
            }
            Ok(Event::Scored { .. } | Event::Won { .. } | Event::Lost { .. }) => {
                if let Some((guess, score)) = session.round().guesses().last() {
                    writeln!(out, "  {}", tile_row(guess, score))?;
                }
                writeln!(out, "  {}\n", keyboard_line(session.round().keyboard()))?;
            }
            Ok(Event::Ignored | Event::Typed { .. } | Event::Erased { .. }) => {}
        }

        let message = session.message();
        let text = match message.tone {
            Tone::Win => message.text.green().bold(),
            Tone::Lose => message.text.red().bold(),
            Tone::Warn => message.text.yellow(),
            Tone::Info => message.text.normal(),
        };
        writeln!(out, "{text}")?;

        if session.round().is_finished() {
            print_session_stats(session, &mut out)?;

            let answer = prompt(&mut input, &mut out, "Play again? (yes/no)")?;
            if matches!(answer.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                session.reset();
                writeln!(out, "\n🔄 {}\n", session.message().text)?;
            } else {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Delete whatever is left in the current row after a rejected line
fn clear_row<R: Rng>(session: &mut Session<'_, R>) {
    while session.round().cursor().1 > 0 {
        if session.handle(Input::Delete).is_err() {
            break;
        }
    }
}

fn print_session_stats<R: Rng>(session: &Session<'_, R>, out: &mut impl Write) -> Result<()> {
    let stats = session.stats();
    writeln!(
        out,
        "\n  Played: {} | Win rate: {:.0}% | Streak: {} (best {})",
        stats.played,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    )?;
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
