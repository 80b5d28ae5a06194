//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::config::GameConfig;
use crate::core::Coord;
use crate::game::{GameState, GuessOutcome, RevealOutcome};
use crate::output::{print_board, print_game_summary, print_radar, print_status};
use crate::wordlists::WordPools;
use colored::Colorize;
use std::io::{self, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Reveal(Coord),
    Guess(String),
    Radar,
    Board,
    New,
    Help,
    Quit,
}

impl SimpleCommand {
    /// Parse a command line; rows and columns are one-based
    ///
    /// # Examples
    /// ```
    /// use battlewords::commands::SimpleCommand;
    /// use battlewords::core::Coord;
    ///
    /// assert_eq!(SimpleCommand::parse("r 1 2"), Some(SimpleCommand::Reveal(Coord::new(0, 1))));
    /// assert_eq!(SimpleCommand::parse("g tree"), Some(SimpleCommand::Guess("tree".into())));
    /// assert_eq!(SimpleCommand::parse("r 0 2"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let keyword = parts.next()?.to_lowercase();

        let command = match keyword.as_str() {
            "r" | "reveal" => {
                let row = parse_one_based(parts.next()?)?;
                let col = parse_one_based(parts.next()?)?;
                Self::Reveal(Coord::new(row, col))
            }
            "g" | "guess" => Self::Guess(parts.next()?.to_string()),
            "radar" => Self::Radar,
            "b" | "board" => Self::Board,
            "n" | "new" => Self::New,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return None,
        };

        parts.next().is_none().then_some(command)
    }
}

fn parse_one_based(value: &str) -> Option<usize> {
    value.parse::<usize>().ok()?.checked_sub(1)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// puzzle can be generated.
pub fn run_simple(config: &GameConfig, pools: &WordPools) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Battlewords - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help();

    let mut game_index = 0;
    let mut state = start_game(config, pools, game_index)?;

    loop {
        print_board(&state);
        print_status(&state);

        if state.is_game_over() {
            print_game_summary(&state);
            match get_user_input("\nPlay again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game_index += 1;
                    state = start_game(config, pools, game_index)?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let prompt = if state.can_guess() {
            "\nCommand (r ROW COL, g WORD)"
        } else {
            "\nCommand (r ROW COL)"
        };

        match SimpleCommand::parse(&get_user_input(prompt)?) {
            Some(SimpleCommand::Reveal(coord)) => match state.reveal(coord) {
                RevealOutcome::Letter(letter) => println!("🔎 {}", letter.to_string().bold()),
                RevealOutcome::Empty => println!("🌊 Nothing there."),
                _ => println!("⚠️  {}", state.last_action()),
            },
            Some(SimpleCommand::Guess(word)) => match state.guess(&word) {
                GuessOutcome::Correct { word, points } => {
                    println!("{}", format!("✅ {word}! +{points} points").green().bold());
                }
                _ => println!("{}", format!("❌ {}", state.last_action()).red()),
            },
            Some(SimpleCommand::Radar) => print_radar(state.puzzle(), state.grid_size()),
            Some(SimpleCommand::Board) => {}
            Some(SimpleCommand::New) => {
                game_index += 1;
                state = start_game(config, pools, game_index)?;
                println!("\n🔄 New game started!\n");
            }
            Some(SimpleCommand::Help) => print_help(),
            Some(SimpleCommand::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            None => println!("❌ Unknown command! Type 'help' for the list of commands."),
        }
    }
}

fn start_game(config: &GameConfig, pools: &WordPools, game_index: u64) -> Result<GameState, String> {
    config
        .new_game(pools, game_index)
        .map(|(state, _)| state)
        .map_err(|e| e.to_string())
}

fn print_help() {
    println!("Six words are hidden in the grid: two each of 4, 5 and 6 letters.");
    println!("Reveal a cell, then you may guess one word.\n");
    println!("  r ROW COL   reveal a cell (1-based)");
    println!("  g WORD      guess a word (one guess per reveal)");
    println!("  radar       show the last-letter pulses");
    println!("  board       redraw the grid");
    println!("  new         start a new game");
    println!("  quit        leave\n");
    println!("Scoring: word length + letters still hidden when you guess it.");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reveal() {
        assert_eq!(
            SimpleCommand::parse("reveal 12 3"),
            Some(SimpleCommand::Reveal(Coord::new(11, 2)))
        );
        assert_eq!(
            SimpleCommand::parse("  R   4  5 "),
            Some(SimpleCommand::Reveal(Coord::new(3, 4)))
        );
    }

    #[test]
    fn parse_reveal_rejects_bad_coordinates() {
        assert_eq!(SimpleCommand::parse("r 0 1"), None);
        assert_eq!(SimpleCommand::parse("r 1"), None);
        assert_eq!(SimpleCommand::parse("r a b"), None);
        assert_eq!(SimpleCommand::parse("r -1 2"), None);
        assert_eq!(SimpleCommand::parse("r 1 2 3"), None);
    }

    #[test]
    fn parse_guess_keeps_raw_text() {
        assert_eq!(
            SimpleCommand::parse("g Python"),
            Some(SimpleCommand::Guess("Python".to_string()))
        );
        assert_eq!(SimpleCommand::parse("guess"), None);
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(SimpleCommand::parse("radar"), Some(SimpleCommand::Radar));
        assert_eq!(SimpleCommand::parse("b"), Some(SimpleCommand::Board));
        assert_eq!(SimpleCommand::parse("NEW"), Some(SimpleCommand::New));
        assert_eq!(SimpleCommand::parse("?"), Some(SimpleCommand::Help));
        assert_eq!(SimpleCommand::parse("exit"), Some(SimpleCommand::Quit));
        assert_eq!(SimpleCommand::parse(""), None);
        assert_eq!(SimpleCommand::parse("dance"), None);
    }
}
