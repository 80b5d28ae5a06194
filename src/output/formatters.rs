//! Formatting utilities for terminal output

use crate::core::{Coord, Puzzle};
use crate::game::GameState;

/// Glyph for a hidden cell
pub const HIDDEN: char = '■';
/// Glyph for a revealed cell outside every word
pub const EMPTY: char = '·';
/// Glyph for a radar pulse
pub const PULSE: char = '●';

/// What a cell shows to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Empty,
    Letter(char),
    /// Letter belonging to a word already guessed
    Solved(char),
}

impl CellView {
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hidden => HIDDEN,
            Self::Empty => EMPTY,
            Self::Letter(c) | Self::Solved(c) => c,
        }
    }
}

/// Player-visible view of one cell
#[must_use]
pub fn cell_view(state: &GameState, coord: Coord) -> CellView {
    if !state.is_revealed(coord) {
        return CellView::Hidden;
    }
    match state.puzzle().word_at(coord) {
        Some(word) => {
            let letter = word.letter_at(coord).unwrap_or(EMPTY);
            if state.is_guessed(word.text()) {
                CellView::Solved(letter)
            } else {
                CellView::Letter(letter)
            }
        }
        None => CellView::Empty,
    }
}

/// Column numbers aligned with [`grid_row`] output
#[must_use]
pub fn column_header(grid_size: usize) -> String {
    let columns: Vec<String> = (1..=grid_size).map(|col| format!("{col:>2}")).collect();
    format!("   {}", columns.join(" "))
}

/// One grid row with a one-based row label
#[must_use]
pub fn grid_row(row: usize, glyphs: impl IntoIterator<Item = char>) -> String {
    let cells: Vec<String> = glyphs.into_iter().map(|c| format!("{c:>2}")).collect();
    format!("{:>2} {}", row + 1, cells.join(" "))
}

/// Plain-text rendering of a puzzle, letters masked unless `reveal`
#[must_use]
pub fn render_puzzle(puzzle: &Puzzle, grid_size: usize, reveal: bool) -> Vec<String> {
    let mut lines = vec![column_header(grid_size)];
    for row in 0..grid_size {
        let glyphs = (0..grid_size).map(|col| {
            let coord = Coord::new(row, col);
            match puzzle.letter_at(coord) {
                Some(letter) if reveal => letter,
                Some(_) => HIDDEN,
                None => EMPTY,
            }
        });
        lines.push(grid_row(row, glyphs));
    }
    lines
}

/// Plain-text radar: pulses at each word's last cell
#[must_use]
pub fn render_radar(puzzle: &Puzzle, grid_size: usize) -> Vec<String> {
    let mut lines = vec![column_header(grid_size)];
    for row in 0..grid_size {
        let glyphs = (0..grid_size).map(|col| {
            if puzzle.radar().contains(&Coord::new(row, col)) {
                PULSE
            } else {
                EMPTY
            }
        });
        lines.push(grid_row(row, glyphs));
    }
    lines
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
