//! Per-game mutable state and the reveal/guess rules

use crate::core::{Coord, Puzzle, SLOT_LENGTHS, WORD_LENGTHS, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use tracing::debug;

/// Status shown when a game starts
pub const WELCOME_MESSAGE: &str = "Welcome to Battlewords! Reveal a cell to begin.";

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A cell must be revealed before the next guess
    AwaitingReveal,
    /// One guess may be submitted
    AwaitingGuess,
    /// Every word has been found
    Complete,
}

/// Result of a reveal request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Newly revealed cell holding a letter
    Letter(char),
    /// Newly revealed cell outside every word
    Empty,
    AlreadyRevealed,
    OutOfBounds,
    GameOver,
}

impl RevealOutcome {
    /// Whether the board changed
    #[must_use]
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Letter(_) | Self::Empty)
    }
}

/// Result of a guess request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { word: String, points: u32 },
    /// No reveal since the last guess; the turn is not consumed
    MustRevealFirst,
    InvalidFormat,
    AlreadyGuessed,
    NotInPuzzle,
    GameOver,
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// Points earned, zero for any rejection
    #[must_use]
    pub const fn points(&self) -> u32 {
        match self {
            Self::Correct { points, .. } => *points,
            _ => 0,
        }
    }
}

/// State of one game in progress
///
/// Mutated only through [`reveal`](Self::reveal) and [`guess`](Self::guess).
/// A new game replaces the whole value.
#[derive(Debug, Clone)]
pub struct GameState {
    grid_size: usize,
    puzzle: Puzzle,
    revealed: BTreeSet<Coord>,
    guessed: BTreeSet<String>,
    score: u32,
    last_action: String,
    can_guess: bool,
    points_by_word: FxHashMap<String, u32>,
}

impl GameState {
    #[must_use]
    pub fn new(puzzle: Puzzle, grid_size: usize) -> Self {
        Self {
            grid_size,
            puzzle,
            revealed: BTreeSet::new(),
            guessed: BTreeSet::new(),
            score: 0,
            last_action: WELCOME_MESSAGE.to_string(),
            can_guess: false,
            points_by_word: FxHashMap::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> &BTreeSet<Coord> {
        &self.revealed
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &BTreeSet<String> {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    #[inline]
    #[must_use]
    pub const fn can_guess(&self) -> bool {
        self.can_guess
    }

    #[inline]
    #[must_use]
    pub const fn points_by_word(&self) -> &FxHashMap<String, u32> {
        &self.points_by_word
    }

    /// Points earned for `word`, if it has been guessed
    #[must_use]
    pub fn points_for(&self, word: &str) -> Option<u32> {
        self.points_by_word.get(word).copied()
    }

    #[must_use]
    pub fn is_revealed(&self, coord: Coord) -> bool {
        self.revealed.contains(&coord)
    }

    #[must_use]
    pub fn is_guessed(&self, word: &str) -> bool {
        self.guessed.contains(word)
    }

    /// Letter at `coord` regardless of whether it has been revealed
    #[must_use]
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.puzzle.letter_at(coord)
    }

    /// Words not yet guessed, in puzzle order
    pub fn remaining_words(&self) -> impl Iterator<Item = &Word> {
        self.puzzle
            .words()
            .iter()
            .filter(|word| !self.guessed.contains(word.text()))
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.guessed.len() == SLOT_LENGTHS.len()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::Complete
        } else if self.can_guess {
            Phase::AwaitingGuess
        } else {
            Phase::AwaitingReveal
        }
    }

    /// Reveal one cell
    ///
    /// A fresh cell enables a guess; revealing more cells before guessing is
    /// allowed. Revealing a cell twice only updates the status message.
    pub fn reveal(&mut self, coord: Coord) -> RevealOutcome {
        if self.is_game_over() {
            self.last_action = "The game is over. Start a new game to keep playing.".to_string();
            return RevealOutcome::GameOver;
        }
        if !coord.in_bounds(self.grid_size) {
            self.last_action = format!("{coord} is outside the grid.");
            return RevealOutcome::OutOfBounds;
        }
        if !self.revealed.insert(coord) {
            self.last_action = "Already revealed.".to_string();
            return RevealOutcome::AlreadyRevealed;
        }

        self.can_guess = true;
        let outcome = match self.puzzle.letter_at(coord) {
            Some(letter) => {
                self.last_action = format!("Revealed '{letter}' at {coord}.");
                RevealOutcome::Letter(letter)
            }
            None => {
                self.last_action = format!("Revealed empty at {coord}.");
                RevealOutcome::Empty
            }
        };
        debug!(%coord, ?outcome, "Cell revealed");
        outcome
    }

    /// Submit one guess
    ///
    /// Every outcome except [`GuessOutcome::MustRevealFirst`] consumes the
    /// turn, so another reveal is needed before the next guess.
    pub fn guess(&mut self, text: &str) -> GuessOutcome {
        if self.is_game_over() {
            self.can_guess = false;
            self.last_action = "The game is over. Start a new game to keep playing.".to_string();
            return GuessOutcome::GameOver;
        }
        if !self.can_guess {
            self.last_action = "You must reveal a cell before guessing.".to_string();
            return GuessOutcome::MustRevealFirst;
        }

        self.can_guess = false;
        let guess = text.trim().to_uppercase();
        let outcome = self.apply_guess(guess);
        debug!(?outcome, score = self.score, "Guess submitted");
        outcome
    }

    fn apply_guess(&mut self, guess: String) -> GuessOutcome {
        if !WORD_LENGTHS.contains(&guess.len()) || !guess.bytes().all(|b| b.is_ascii_uppercase())
        {
            self.last_action = "Guess must be A-Z and length 4, 5, or 6.".to_string();
            return GuessOutcome::InvalidFormat;
        }
        if self.guessed.contains(&guess) {
            self.last_action = format!("Already guessed {guess}.");
            return GuessOutcome::AlreadyGuessed;
        }

        let Some(target) = self
            .puzzle
            .words()
            .iter()
            .find(|word| word.text() == guess && !self.guessed.contains(word.text()))
        else {
            self.last_action = format!("'{guess}' is not in the puzzle.");
            return GuessOutcome::NotInPuzzle;
        };

        let unrevealed = target
            .cells()
            .iter()
            .filter(|cell| !self.revealed.contains(cell))
            .count();
        let points = (target.length() + unrevealed) as u32;

        self.revealed.extend(target.cells().iter().copied());
        self.score += points;
        self.points_by_word.insert(guess.clone(), points);
        self.guessed.insert(guess.clone());
        self.last_action = format!("Correct! +{points} points for {guess}.");

        GuessOutcome::Correct {
            word: guess,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn word(text: &str, row: usize, col: usize, direction: Direction) -> Word {
        Word::new(text, Coord::new(row, col), direction).unwrap()
    }

    fn make_state() -> GameState {
        let puzzle = Puzzle::new(vec![
            word("TREE", 0, 0, Direction::Horizontal),
            word("APPLE", 2, 0, Direction::Horizontal),
            word("ORANGE", 4, 0, Direction::Horizontal),
            word("WIND", 0, 6, Direction::Vertical),
            word("MOUSE", 0, 8, Direction::Vertical),
            word("PYTHON", 0, 10, Direction::Vertical),
        ]);
        GameState::new(puzzle, 12)
    }

    #[test]
    fn new_game_awaits_reveal() {
        let state = make_state();
        assert_eq!(state.phase(), Phase::AwaitingReveal);
        assert_eq!(state.last_action(), WELCOME_MESSAGE);
        assert_eq!(state.score(), 0);
        assert!(!state.can_guess());
    }

    #[test]
    fn cannot_guess_before_reveal() {
        let mut state = make_state();
        let outcome = state.guess("TREE");
        assert_eq!(outcome, GuessOutcome::MustRevealFirst);
        assert_eq!(outcome.points(), 0);
        assert!(!state.can_guess());
        assert_eq!(state.last_action(), "You must reveal a cell before guessing.");
        assert_eq!(state.phase(), Phase::AwaitingReveal);
    }

    #[test]
    fn reveal_letter_enables_guess() {
        let mut state = make_state();
        assert_eq!(state.reveal(Coord::new(0, 0)), RevealOutcome::Letter('T'));
        assert!(state.can_guess());
        assert_eq!(state.phase(), Phase::AwaitingGuess);
        assert_eq!(state.last_action(), "Revealed 'T' at (1,1).");
    }

    #[test]
    fn reveal_empty_enables_guess() {
        let mut state = make_state();
        assert_eq!(state.reveal(Coord::new(11, 0)), RevealOutcome::Empty);
        assert!(state.can_guess());
        assert_eq!(state.last_action(), "Revealed empty at (12,1).");
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut state = make_state();
        state.reveal(Coord::new(0, 0));
        let revealed = state.revealed().clone();

        assert_eq!(state.reveal(Coord::new(0, 0)), RevealOutcome::AlreadyRevealed);
        assert_eq!(state.revealed(), &revealed);
        assert_eq!(state.score(), 0);
        assert!(state.can_guess());
        assert_eq!(state.last_action(), "Already revealed.");
    }

    #[test]
    fn repeated_reveal_after_guess_keeps_guess_locked() {
        let mut state = make_state();
        state.reveal(Coord::new(0, 0));
        state.guess("NOPE");
        assert_eq!(state.reveal(Coord::new(0, 0)), RevealOutcome::AlreadyRevealed);
        assert!(!state.can_guess());
    }

    #[test]
    fn extra_reveals_before_guessing_are_allowed() {
        let mut state = make_state();
        state.reveal(Coord::new(0, 0));
        state.reveal(Coord::new(0, 1));
        state.reveal(Coord::new(0, 2));
        assert!(state.can_guess());
        assert_eq!(state.revealed().len(), 3);
    }

    #[test]
    fn reveal_out_of_bounds_is_noop() {
        let mut state = make_state();
        assert_eq!(state.reveal(Coord::new(12, 0)), RevealOutcome::OutOfBounds);
        assert!(state.revealed().is_empty());
        assert!(!state.can_guess());
        assert!(!RevealOutcome::OutOfBounds.has_update());
    }

    #[test]
    fn correct_guess_after_one_reveal() {
        let mut state = make_state();
        state.reveal(Coord::new(0, 0));
        let outcome = state.guess("TREE");

        assert_eq!(
            outcome,
            GuessOutcome::Correct {
                word: "TREE".to_string(),
                points: 7
            }
        );
        assert_eq!(state.score(), 7);
        assert_eq!(state.points_for("TREE"), Some(7));
        assert!(state.is_guessed("TREE"));
        assert!(!state.can_guess());
        assert_eq!(state.last_action(), "Correct! +7 points for TREE.");
        for col in 0..4 {
            assert!(state.is_revealed(Coord::new(0, col)));
        }
    }

    #[test]
    fn guess_with_all_cells_revealed_scores_length() {
        let mut state = make_state();
        for row in 0..6 {
            state.reveal(Coord::new(row, 10));
        }
        assert_eq!(state.guess("python").points(), 6);
        assert_eq!(state.score(), 6);
    }

    #[test]
    fn guess_with_unrelated_reveal_scores_double_length() {
        let mut state = make_state();
        state.reveal(Coord::new(11, 11));
        assert_eq!(state.guess("MOUSE").points(), 10);
    }

    #[test]
    fn guess_is_normalized() {
        let mut state = make_state();
        state.reveal(Coord::new(2, 0));
        assert!(state.guess("  apple \n").is_correct());
        assert!(state.is_guessed("APPLE"));
    }

    #[test]
    fn invalid_format_consumes_turn() {
        for bad in ["ab", "toolonger", "tr3e", "", "TRÉE"] {
            let mut state = make_state();
            state.reveal(Coord::new(0, 0));
            assert_eq!(state.guess(bad), GuessOutcome::InvalidFormat, "{bad:?}");
            assert!(!state.can_guess());
            assert_eq!(state.last_action(), "Guess must be A-Z and length 4, 5, or 6.");
        }
    }

    #[test]
    fn not_in_puzzle_consumes_turn() {
        let mut state = make_state();
        state.reveal(Coord::new(0, 0));
        assert_eq!(state.guess("GOLD"), GuessOutcome::NotInPuzzle);
        assert_eq!(state.score(), 0);
        assert!(!state.can_guess());
        assert_eq!(state.last_action(), "'GOLD' is not in the puzzle.");
    }

    #[test]
    fn already_guessed_is_rejected() {
        let mut state = make_state();
        state.reveal(Coord::new(0, 0));
        state.guess("TREE");
        state.reveal(Coord::new(11, 11));
        assert_eq!(state.guess("TREE"), GuessOutcome::AlreadyGuessed);
        assert_eq!(state.score(), 7);
        assert_eq!(state.guessed().len(), 1);
        assert!(!state.can_guess());
        assert_eq!(state.last_action(), "Already guessed TREE.");
    }

    #[test]
    fn game_over_after_six_words() {
        let mut state = make_state();
        let words: Vec<Word> = state.puzzle().words().to_vec();
        for (i, w) in words.iter().enumerate() {
            assert!(!state.is_game_over());
            assert_eq!(state.reveal(w.start()), RevealOutcome::Letter(w.text().chars().next().unwrap()));
            assert!(state.guess(w.text()).is_correct(), "word {i}");
        }
        assert!(state.is_game_over());
        assert_eq!(state.phase(), Phase::Complete);
        // 2 * (7 + 9 + 11)
        assert_eq!(state.score(), 54);
        assert_eq!(state.remaining_words().count(), 0);
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut state = make_state();
        let words: Vec<Word> = state.puzzle().words().to_vec();
        for w in &words {
            state.reveal(w.start());
            state.guess(w.text());
        }
        assert_eq!(state.reveal(Coord::new(11, 11)), RevealOutcome::GameOver);
        assert!(!state.is_revealed(Coord::new(11, 11)));
        assert_eq!(state.guess("TREE"), GuessOutcome::GameOver);
        assert!(!state.can_guess());
        assert_eq!(state.score(), 54);
    }

    #[test]
    fn remaining_words_in_puzzle_order() {
        let mut state = make_state();
        state.reveal(Coord::new(4, 0));
        state.guess("ORANGE");
        let remaining: Vec<&str> = state.remaining_words().map(Word::text).collect();
        assert_eq!(remaining, vec!["TREE", "APPLE", "WIND", "MOUSE", "PYTHON"]);
    }

    #[test]
    fn letter_at_delegates_to_puzzle() {
        let state = make_state();
        assert_eq!(state.letter_at(Coord::new(5, 10)), Some('N'));
        assert_eq!(state.letter_at(Coord::new(6, 10)), None);
    }
}
