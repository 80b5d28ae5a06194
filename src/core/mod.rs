//! Core domain types for Battlewords
//!
//! Pure value types: grid coordinates, placed words and the puzzle they form.
//! Nothing here knows about generation or gameplay rules.

mod coord;
mod puzzle;
mod word;

pub use coord::Coord;
pub use puzzle::Puzzle;
pub use word::{Direction, Word, WordError};

/// Word lengths a puzzle is built from, in slot order
pub const SLOT_LENGTHS: [usize; 6] = [4, 4, 5, 5, 6, 6];

/// Distinct word lengths
pub const WORD_LENGTHS: [usize; 3] = [4, 5, 6];

/// Words per length class
pub const WORDS_PER_LENGTH: usize = 2;

/// Default grid edge length
pub const DEFAULT_GRID_SIZE: usize = 12;
