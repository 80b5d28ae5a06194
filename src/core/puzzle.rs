//! Puzzle: the six hidden words and their radar pulses

use super::{Coord, Word};
use std::collections::BTreeSet;

/// A set of placed words plus the radar derived from them
///
/// The radar is computed once from each word's last cell and never
/// recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    words: Vec<Word>,
    radar: BTreeSet<Coord>,
}

impl Puzzle {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let radar = words.iter().map(Word::last_cell).collect();
        Self { words, radar }
    }

    /// Assemble a puzzle with an explicit radar
    ///
    /// No consistency is checked here; run the validator on the result.
    #[must_use]
    pub const fn from_parts(words: Vec<Word>, radar: BTreeSet<Coord>) -> Self {
        Self { words, radar }
    }

    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn radar(&self) -> &BTreeSet<Coord> {
        &self.radar
    }

    /// Letter shown at `coord`, or `None` for an empty cell
    ///
    /// This is the single cell-to-letter lookup; front ends should use it
    /// instead of walking word footprints themselves.
    #[must_use]
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.words.iter().find_map(|word| word.letter_at(coord))
    }

    /// The word whose footprint covers `coord`
    #[must_use]
    pub fn word_at(&self, coord: Coord) -> Option<&Word> {
        self.words.iter().find(|word| word.covers(coord))
    }
}
