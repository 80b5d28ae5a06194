//! Game state machine
//!
//! Drives the reveal → guess → score → completion cycle over a generated
//! puzzle. Player mistakes are reported as outcomes, never as errors.

mod state;
mod tier;

pub use state::{GameState, GuessOutcome, Phase, RevealOutcome, WELCOME_MESSAGE};
pub use tier::Tier;

/// True once all six words have been guessed
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    state.is_game_over()
}

/// Rating for a final score
#[must_use]
pub const fn tier(score: u32) -> Tier {
    Tier::from_score(score)
}
