//! Display functions for command results

use super::formatters::{create_progress_bar, tile_row};
use crate::commands::{ScoreResult, SimulationResult};
use crate::core::LetterStatus;
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring {} against {}",
        result.guess.as_str().bright_white().bold(),
        result.secret.as_str().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}   {}", tile_row(result.guess, result.score), result.score.to_emoji());

    println!();
    for (letter, status) in result.guess.letters().iter().zip(result.score.statuses()) {
        let label = match status {
            LetterStatus::Correct => status.to_string().green(),
            LetterStatus::Present => status.to_string().yellow(),
            LetterStatus::Absent => status.to_string().bright_black(),
        };
        println!("  {}: {label}", char::from(*letter));
    }

    if !result.guess_in_dictionary {
        println!(
            "\n{}",
            format!("Note: {} is not in the word list", result.guess).yellow()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (i, &count) in result.distribution.iter().enumerate() {
        let pct = if result.rounds > 0 {
            count as f64 / result.rounds as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {}: {} {count:4} ({pct:5.1}%)", i + 1, bar.green());
    }

    if !result.missed.is_empty() {
        let shown: Vec<String> = result.missed.iter().take(10).map(ToString::to_string).collect();
        println!(
            "\n❌ {} missed: {}{}",
            result.missed.len(),
            shown.join(", ").red(),
            if result.missed.len() > shown.len() { ", ..." } else { "" }
        );
    }
}
