//! Game configuration
//!
//! Settings shared by every front end: grid size, generation budget, seed and
//! where candidate words come from.

use crate::core::DEFAULT_GRID_SIZE;
use crate::game::GameState;
use crate::generator::{
    DEFAULT_MAX_ATTEMPTS, GenerationError, GenerationStats, GeneratorConfig, PuzzleGenerator,
};
use crate::wordlists::{LoadReport, WordPools, default_pools, load_from_file};
use std::io;
use std::path::PathBuf;

/// Where candidate words are read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordListSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl WordListSource {
    /// Interpret a CLI value: `embedded` or a file path
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Settings for creating games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: usize,
    pub max_attempts: usize,
    /// Seed for the first game; later games offset it by their index
    pub seed: Option<u64>,
    pub word_list: WordListSource,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            word_list: WordListSource::Embedded,
        }
    }
}

impl GameConfig {
    /// Generator settings for the `game_index`-th game of a session
    #[must_use]
    pub fn generator_config(&self, game_index: u64) -> GeneratorConfig {
        GeneratorConfig {
            grid_size: self.grid_size,
            max_attempts: self.max_attempts,
            seed: self.seed.map(|seed| seed.wrapping_add(game_index)),
        }
    }

    /// Load the configured word pools
    ///
    /// # Errors
    /// Returns an I/O error if a word list file cannot be read.
    pub fn load_pools(&self) -> io::Result<LoadReport> {
        match &self.word_list {
            WordListSource::Embedded => Ok(LoadReport {
                pools: default_pools(),
                fallback_lengths: Vec::new(),
            }),
            WordListSource::File(path) => load_from_file(path),
        }
    }

    /// Generate a puzzle and wrap it in a fresh game
    ///
    /// # Errors
    /// Returns `GenerationError` if no puzzle could be generated.
    pub fn new_game(
        &self,
        pools: &WordPools,
        game_index: u64,
    ) -> Result<(GameState, GenerationStats), GenerationError> {
        let generator = PuzzleGenerator::new(self.generator_config(game_index));
        let (puzzle, stats) = generator.generate_with_stats(pools)?;
        Ok((GameState::new(puzzle, self.grid_size), stats))
    }
}
