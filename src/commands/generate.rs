//! Generate command
//!
//! Builds a single puzzle and renders it for inspection.

use crate::config::GameConfig;
use crate::core::Puzzle;
use crate::generator::{GenerationError, GenerationStats, PuzzleGenerator};
use crate::output::formatters::render_puzzle;
use crate::wordlists::WordPools;

/// Result of generating a puzzle
pub struct GenerateResult {
    pub puzzle: Puzzle,
    pub stats: GenerationStats,
    /// Rendered grid, letters masked unless revealed
    pub lines: Vec<String>,
}

/// Generate one puzzle with the configured settings
///
/// # Errors
///
/// Returns `GenerationError` if the generator cannot place all six words.
pub fn generate_puzzle(
    config: &GameConfig,
    pools: &WordPools,
    reveal: bool,
) -> Result<GenerateResult, GenerationError> {
    let generator = PuzzleGenerator::new(config.generator_config(0));
    let (puzzle, stats) = generator.generate_with_stats(pools)?;
    let lines = render_puzzle(&puzzle, config.grid_size, reveal);

    Ok(GenerateResult {
        puzzle,
        stats,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::formatters::HIDDEN;
    use crate::wordlists::default_pools;

    fn seeded(seed: u64) -> GameConfig {
        GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        }
    }

    #[test]
    fn masked_rendering_hides_letters() {
        let result = generate_puzzle(&seeded(5), &default_pools(), false).unwrap();
        assert_eq!(result.lines.len(), 13);

        let hidden = result
            .lines
            .iter()
            .skip(1)
            .flat_map(|line| line.chars())
            .filter(|&c| c == HIDDEN)
            .count();
        assert_eq!(hidden, 30);
    }

    #[test]
    fn revealed_rendering_shows_words() {
        let result = generate_puzzle(&seeded(5), &default_pools(), true).unwrap();
        let letters: usize = result
            .lines
            .iter()
            .skip(1)
            .map(|line| line.chars().filter(char::is_ascii_uppercase).count())
            .sum();
        assert_eq!(letters, 30);
        assert_eq!(result.stats.seed, 5);
    }

    #[test]
    fn generation_errors_propagate() {
        let config = GameConfig {
            grid_size: 4,
            ..seeded(1)
        };
        assert!(matches!(
            generate_puzzle(&config, &default_pools(), false),
            Err(GenerationError::GridTooSmall { .. })
        ));
    }
}
