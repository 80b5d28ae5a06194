//! Placed word representation
//!
//! A `Word` is a text laid out on the grid from a start cell in one direction.
//! Its occupied cells are derived once at construction.

use super::Coord;
use std::fmt;
use thiserror::Error;

/// Axis along which a word is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
}

impl Direction {
    /// The cell `offset` steps from `start` along this direction, or `None`
    /// past the end of the coordinate range
    #[inline]
    #[must_use]
    pub const fn step(self, start: Coord, offset: usize) -> Option<Coord> {
        match self {
            Self::Horizontal => match start.col.checked_add(offset) {
                Some(col) => Some(Coord::new(start.row, col)),
                None => None,
            },
            Self::Vertical => match start.row.checked_add(offset) {
                Some(row) => Some(Coord::new(row, start.col)),
                None => None,
            },
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "H"),
            Self::Vertical => write!(f, "V"),
        }
    }
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only letters A-Z, got {0:?}")]
    InvalidCharacters(String),
    #[error("Word {text} starting at {start} runs past the coordinate range")]
    OutOfRange { text: String, start: Coord },
}

/// A word placed on the grid
///
/// Text is stored uppercase. Length classes are enforced by the puzzle
/// validator rather than here, so hand-built puzzles can exercise it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    start: Coord,
    direction: Direction,
    cells: Vec<Coord>,
}

impl Word {
    /// Create a new placed word
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use battlewords::core::{Coord, Direction, Word};
    ///
    /// let word = Word::new("tree", Coord::new(0, 0), Direction::Horizontal).unwrap();
    /// assert_eq!(word.text(), "TREE");
    /// assert_eq!(word.last_cell(), Coord::new(0, 3));
    ///
    /// assert!(Word::new("tr3e", Coord::new(0, 0), Direction::Vertical).is_err());
    /// ```
    pub fn new(
        text: impl Into<String>,
        start: Coord,
        direction: Direction,
    ) -> Result<Self, WordError> {
        let text = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let Some(cells) = (0..text.len())
            .map(|offset| direction.step(start, offset))
            .collect::<Option<Vec<_>>>()
        else {
            return Err(WordError::OutOfRange { text, start });
        };

        Ok(Self {
            text,
            start,
            direction,
            cells,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (and cells)
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Occupied cells in reading order
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Position of the final letter, used as the radar pulse
    #[inline]
    #[must_use]
    pub fn last_cell(&self) -> Coord {
        // Never empty: construction rejects empty text
        self.cells[self.cells.len() - 1]
    }

    /// Letter occupying `coord`, if this word covers it
    #[must_use]
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        let offset = match self.direction {
            Direction::Horizontal if coord.row == self.start.row => {
                coord.col.checked_sub(self.start.col)?
            }
            Direction::Vertical if coord.col == self.start.col => {
                coord.row.checked_sub(self.start.row)?
            }
            _ => return None,
        };
        self.text.as_bytes().get(offset).map(|&b| char::from(b))
    }

    #[inline]
    #[must_use]
    pub fn covers(&self, coord: Coord) -> bool {
        self.letter_at(coord).is_some()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
