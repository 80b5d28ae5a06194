//! Puzzle post-condition checks
//!
//! Checks run as separate passes in a fixed order and stop at the first
//! violation: word lengths, bounds, overlap, radar pulses, length distribution.

use crate::core::{Coord, Puzzle, WORD_LENGTHS, WORDS_PER_LENGTH};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Reason a puzzle failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPuzzle {
    #[error("Word length invalid: {word} has {length} letters")]
    InvalidLength { word: String, length: usize },
    #[error("Cell out of bounds: {word} reaches {cell} on a {grid_size}x{grid_size} grid")]
    OutOfBounds {
        word: String,
        cell: Coord,
        grid_size: usize,
    },
    #[error("Overlapping words detected at {cell}")]
    Overlap { cell: Coord },
    #[error("Radar pulse missing for last cell of {word}")]
    MissingRadarPulse { word: String },
    #[error("Incorrect counts of word lengths: expected 2/2/2 for lengths 4/5/6, got {counts:?}")]
    WrongLengthDistribution { counts: [usize; 3] },
}

/// Validate a puzzle against a `grid_size` × `grid_size` grid
///
/// # Errors
/// Returns the first `InvalidPuzzle` violation found.
pub fn validate(puzzle: &Puzzle, grid_size: usize) -> Result<(), InvalidPuzzle> {
    for word in puzzle.words() {
        if !WORD_LENGTHS.contains(&word.length()) {
            return Err(InvalidPuzzle::InvalidLength {
                word: word.text().to_string(),
                length: word.length(),
            });
        }
    }

    for word in puzzle.words() {
        if let Some(&cell) = word.cells().iter().find(|c| !c.in_bounds(grid_size)) {
            return Err(InvalidPuzzle::OutOfBounds {
                word: word.text().to_string(),
                cell,
                grid_size,
            });
        }
    }

    let mut seen = FxHashSet::default();
    for &cell in puzzle.words().iter().flat_map(|word| word.cells()) {
        if !seen.insert(cell) {
            return Err(InvalidPuzzle::Overlap { cell });
        }
    }

    if let Some(word) = puzzle
        .words()
        .iter()
        .find(|word| !puzzle.radar().contains(&word.last_cell()))
    {
        return Err(InvalidPuzzle::MissingRadarPulse {
            word: word.text().to_string(),
        });
    }

    let mut counts = [0usize; 3];
    for word in puzzle.words() {
        if let Some(slot) = WORD_LENGTHS.iter().position(|&len| len == word.length()) {
            counts[slot] += 1;
        }
    }
    if counts.iter().any(|&count| count != WORDS_PER_LENGTH) {
        return Err(InvalidPuzzle::WrongLengthDistribution { counts });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Word};
    use std::collections::BTreeSet;

    fn word(text: &str, row: usize, col: usize, direction: Direction) -> Word {
        Word::new(text, Coord::new(row, col), direction).unwrap()
    }

    fn valid_words() -> Vec<Word> {
        vec![
            word("TREE", 0, 0, Direction::Horizontal),
            word("APPLE", 2, 0, Direction::Horizontal),
            word("ORANGE", 4, 0, Direction::Horizontal),
            word("WIND", 0, 6, Direction::Vertical),
            word("MOUSE", 0, 8, Direction::Vertical),
            word("PYTHON", 0, 10, Direction::Vertical),
        ]
    }

    #[test]
    fn hand_built_puzzle_is_valid() {
        assert_eq!(validate(&Puzzle::new(valid_words()), 12), Ok(()));
    }

    #[test]
    fn rejects_bad_length() {
        let mut words = valid_words();
        words[0] = word("TRE", 0, 0, Direction::Horizontal);
        assert_eq!(
            validate(&Puzzle::new(words), 12),
            Err(InvalidPuzzle::InvalidLength {
                word: "TRE".to_string(),
                length: 3
            })
        );
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut words = valid_words();
        words[0] = word("TREE", 11, 10, Direction::Horizontal);
        let err = validate(&Puzzle::new(words), 12).unwrap_err();
        assert_eq!(
            err,
            InvalidPuzzle::OutOfBounds {
                word: "TREE".to_string(),
                cell: Coord::new(11, 12),
                grid_size: 12
            }
        );
    }

    #[test]
    fn rejects_overlap() {
        let mut words = valid_words();
        // Crosses APPLE at (2,1)
        words[0] = word("TREE", 1, 1, Direction::Vertical);
        assert_eq!(
            validate(&Puzzle::new(words), 12),
            Err(InvalidPuzzle::Overlap {
                cell: Coord::new(2, 1)
            })
        );
    }

    #[test]
    fn rejects_missing_radar_pulse() {
        let words = valid_words();
        let mut radar: BTreeSet<Coord> = words.iter().map(Word::last_cell).collect();
        radar.remove(&Coord::new(4, 5));
        let err = validate(&Puzzle::from_parts(words, radar), 12).unwrap_err();
        assert_eq!(
            err,
            InvalidPuzzle::MissingRadarPulse {
                word: "ORANGE".to_string()
            }
        );
    }

    #[test]
    fn rejects_wrong_distribution() {
        let mut words = valid_words();
        words[1] = word("GAME", 2, 0, Direction::Horizontal);
        assert_eq!(
            validate(&Puzzle::new(words), 12),
            Err(InvalidPuzzle::WrongLengthDistribution { counts: [3, 1, 2] })
        );
    }

    #[test]
    fn rejects_too_few_words() {
        let mut words = valid_words();
        words.pop();
        assert!(matches!(
            validate(&Puzzle::new(words), 12),
            Err(InvalidPuzzle::WrongLengthDistribution { counts: [2, 2, 1] })
        ));
    }

    #[test]
    fn length_checked_before_bounds() {
        let mut words = valid_words();
        words[0] = word("TREES", 11, 10, Direction::Horizontal);
        words[1] = word("APPLESAUCE", 2, 0, Direction::Horizontal);
        assert!(matches!(
            validate(&Puzzle::new(words), 12),
            Err(InvalidPuzzle::InvalidLength { length: 10, .. })
        ));
    }

    #[test]
    fn smaller_grid_puts_cells_out_of_bounds() {
        assert!(matches!(
            validate(&Puzzle::new(valid_words()), 10),
            Err(InvalidPuzzle::OutOfBounds { .. })
        ));
    }
}
