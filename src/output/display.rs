//! Display functions for CLI output

use super::formatters::{CellView, cell_view, column_header, create_progress_bar, render_radar};
use crate::commands::BenchmarkResult;
use crate::core::{Coord, Puzzle};
use crate::game::{GameState, tier};
use crate::generator::GenerationStats;
use colored::Colorize;

/// Print the player's view of the grid
pub fn print_board(state: &GameState) {
    let size = state.grid_size();
    println!("\n{}", column_header(size).bright_black());

    for row in 0..size {
        let mut line = format!("{:>2} ", row + 1).bright_black().to_string();
        for col in 0..size {
            let view = cell_view(state, Coord::new(row, col));
            let glyph = format!("{:>2}", view.glyph());
            let styled = match view {
                CellView::Hidden => glyph.bright_black(),
                CellView::Empty => glyph.blue(),
                CellView::Letter(_) => glyph.bright_yellow().bold(),
                CellView::Solved(_) => glyph.green().bold(),
            };
            line.push_str(&styled.to_string());
            if col + 1 < size {
                line.push(' ');
            }
        }
        println!("{line}");
    }
}

/// Print the radar panel
pub fn print_radar(puzzle: &Puzzle, grid_size: usize) {
    println!("\n📡 {}", "Radar".bright_cyan().bold());
    for line in render_radar(puzzle, grid_size) {
        println!("{}", line.red());
    }
}

/// Print score, guess eligibility and the last action
pub fn print_status(state: &GameState) {
    let guess_hint = if state.can_guess() {
        "you may guess".green()
    } else {
        "reveal a cell".yellow()
    };
    println!(
        "\n🏆 Score: {} | {}/6 words | {}",
        state.score().to_string().bright_yellow().bold(),
        state.guessed().len(),
        guess_hint
    );
    println!("   {}", state.last_action());
}

/// Print the end-of-game summary
pub fn print_game_summary(state: &GameState) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME OVER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for word in state.puzzle().words() {
        let points = state.points_for(word.text()).unwrap_or(0);
        let max = (word.length() * 2) as f64;
        let bar = create_progress_bar(f64::from(points), max, 12);
        println!(
            "   {:<6} ({}): {} +{points}",
            word.text(),
            word.length(),
            bar.green()
        );
    }

    let score = state.score();
    println!(
        "\n   Final score: {}  Tier: {}",
        score.to_string().bright_yellow().bold(),
        tier(score).to_string().bright_green().bold()
    );
}

/// Print a generated puzzle
pub fn print_generation(lines: &[String], puzzle: &Puzzle, stats: &GenerationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATED PUZZLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n🎲 Seed: {} | attempts: {} | restarts: {}",
        stats.seed.to_string().bright_yellow(),
        stats.attempts,
        stats.restarts
    );
    println!();
    for line in lines {
        println!("{line}");
    }
    println!("\n📡 Radar pulses:");
    for coord in puzzle.radar() {
        println!("   {coord}");
    }
}

/// Print the word placements of a puzzle
pub fn print_solution(puzzle: &Puzzle) {
    println!("\n📖 {}", "Words:".bright_cyan().bold());
    for word in puzzle.words() {
        println!(
            "   {:<6} at {} {}",
            word.text().bright_green(),
            word.start(),
            word.direction()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let success_pct = if result.total == 0 {
        0.0
    } else {
        result.succeeded as f64 / result.total as f64 * 100.0
    };

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Grid size:        {}", result.grid_size);
    println!("   Puzzles:          {}", result.total);
    println!(
        "   Succeeded:        {} ({success_pct:.1}%)",
        result.succeeded.to_string().green()
    );
    println!(
        "   Failed:           {}",
        if result.failed > 0 {
            result.failed.to_string().red()
        } else {
            result.failed.to_string().normal()
        }
    );
    println!(
        "   Average attempts: {}",
        format!("{:.1}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("   Max attempts:     {}", result.max_attempts);
    println!("   Average restarts: {:.2}", result.average_restarts);
    println!("   Max restarts:     {}", result.max_restarts);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if !result.restart_distribution.is_empty() {
        println!("\n📈 {}", "Restarts per puzzle:".bright_cyan().bold());
        for (&restarts, &count) in &result.restart_distribution {
            let pct = (count as f64 / result.succeeded.max(1) as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {restarts:>3}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
}
