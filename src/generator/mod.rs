//! Puzzle generation
//!
//! Randomized placement of six words (two each of length 4, 5 and 6) on a
//! square grid. Each candidate word gets a bounded number of random
//! placements; when a slot cannot be filled the whole layout is discarded and
//! rebuilt from a freshly drawn seed. A single attempt budget spans every
//! restart, so generation always terminates.

pub mod validator;

pub use validator::{InvalidPuzzle, validate};

use crate::core::{
    Coord, DEFAULT_GRID_SIZE, Direction, Puzzle, SLOT_LENGTHS, WORD_LENGTHS, WORDS_PER_LENGTH,
    Word,
};
use crate::wordlists::WordPools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info, instrument, trace, warn};

/// Default global budget of candidate-word attempts
pub const DEFAULT_MAX_ATTEMPTS: usize = 5000;

/// Random placements tried for each candidate word
pub const PLACEMENTS_PER_WORD: usize = 50;

/// Generation could not produce a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Grid size {grid_size} cannot fit words of length {longest}")]
    GridTooSmall { grid_size: usize, longest: usize },
    #[error(
        "No words available for length {length}: need {required} distinct, have {available}"
    )]
    InsufficientWords {
        length: usize,
        available: usize,
        required: usize,
    },
    #[error("Puzzle generation failed: max attempts reached ({attempts})")]
    AttemptsExhausted { attempts: usize },
}

/// Generator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub grid_size: usize,
    pub max_attempts: usize,
    /// Fixed seed for reproducible puzzles; drawn from the OS when `None`
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

/// Bookkeeping from a successful generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Seed the run started from
    pub seed: u64,
    /// Candidate-word attempts spent across all restarts
    pub attempts: usize,
    /// Number of discarded layouts
    pub restarts: usize,
}

/// Randomized word placement engine
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a validated puzzle from the given word pools
    ///
    /// # Errors
    /// Returns `GenerationError` if the grid is too small, a length class has
    /// fewer than two distinct words, or the attempt budget runs out.
    pub fn generate(&self, pools: &WordPools) -> Result<Puzzle, GenerationError> {
        self.generate_with_stats(pools).map(|(puzzle, _)| puzzle)
    }

    /// Like [`generate`](Self::generate), also reporting seed and effort
    ///
    /// # Errors
    /// See [`generate`](Self::generate).
    ///
    /// # Panics
    /// Panics if a completed layout fails validation, which means the
    /// placement invariants are broken.
    #[instrument(skip(self, pools), fields(grid_size = self.config.grid_size))]
    pub fn generate_with_stats(
        &self,
        pools: &WordPools,
    ) -> Result<(Puzzle, GenerationStats), GenerationError> {
        let grid_size = self.config.grid_size;
        let longest = SLOT_LENGTHS.iter().copied().max().unwrap_or_default();
        if grid_size < longest {
            return Err(GenerationError::GridTooSmall { grid_size, longest });
        }

        let candidates = prepare_pools(pools)?;

        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        info!(seed, "Generating puzzle");

        let mut rng = StdRng::seed_from_u64(seed);
        let mut attempts = 0;
        let mut restarts = 0;

        loop {
            if let Some(words) = self.place_all(&candidates, &mut rng, &mut attempts) {
                let puzzle = Puzzle::new(words);
                if let Err(err) = validate(&puzzle, grid_size) {
                    panic!("generator produced an invalid puzzle: {err}");
                }

                debug!(attempts, restarts, "Puzzle generated");
                let stats = GenerationStats {
                    seed,
                    attempts,
                    restarts,
                };
                return Ok((puzzle, stats));
            }

            if attempts >= self.config.max_attempts {
                warn!(attempts, restarts, "Attempt budget exhausted");
                return Err(GenerationError::AttemptsExhausted { attempts });
            }

            let next_seed: u64 = rng.random();
            restarts += 1;
            debug!(next_seed, attempts, restarts, "Dead end, restarting layout");
            rng = StdRng::seed_from_u64(next_seed);
        }
    }

    /// One full layout pass; `None` when some slot could not be filled
    fn place_all(
        &self,
        candidates: &BTreeMap<usize, Vec<String>>,
        rng: &mut StdRng,
        attempts: &mut usize,
    ) -> Option<Vec<Word>> {
        let mut pools = candidates.clone();
        for pool in pools.values_mut() {
            pool.shuffle(rng);
        }

        let mut occupied = FxHashSet::default();
        let mut placed = Vec::with_capacity(SLOT_LENGTHS.len());

        for &length in &SLOT_LENGTHS {
            let pool = pools.get_mut(&length)?;
            let word = self.fill_slot(pool, length, &occupied, rng, attempts)?;
            trace!(word = word.text(), start = %word.start(), direction = %word.direction(), "Placed");
            occupied.extend(word.cells().iter().copied());
            placed.push(word);
        }

        Some(placed)
    }

    /// Try candidates from `pool` until one fits; the placed word is removed from the pool
    ///
    /// # Panics
    /// Panics if a fitting candidate is not a valid word, which the pool
    /// preparation rules out.
    fn fill_slot(
        &self,
        pool: &mut Vec<String>,
        length: usize,
        occupied: &FxHashSet<Coord>,
        rng: &mut StdRng,
        attempts: &mut usize,
    ) -> Option<Word> {
        let grid_size = self.config.grid_size;

        for index in 0..pool.len() {
            if *attempts >= self.config.max_attempts {
                return None;
            }
            *attempts += 1;

            for _ in 0..PLACEMENTS_PER_WORD {
                let (direction, start) = random_start(rng, grid_size, length);
                let fits = (0..length).map(|offset| direction.step(start, offset)).all(|cell| {
                    cell.is_some_and(|cell| cell.in_bounds(grid_size) && !occupied.contains(&cell))
                });

                if fits {
                    let text = pool.remove(index);
                    return match Word::new(text, start, direction) {
                        Ok(word) => Some(word),
                        Err(err) => panic!("generator placed an unusable word: {err}"),
                    };
                }
            }
        }

        None
    }
}

/// Generate a puzzle with explicit parameters
///
/// Deterministic for a given `seed`.
///
/// # Errors
/// See [`PuzzleGenerator::generate`].
///
/// # Examples
/// ```
/// use battlewords::generator::{generate, validate};
/// use battlewords::wordlists::default_pools;
///
/// let pools = default_pools();
/// let puzzle = generate(12, &pools, Some(1234), 5000).unwrap();
/// assert_eq!(puzzle.words().len(), 6);
/// assert!(validate(&puzzle, 12).is_ok());
/// ```
pub fn generate(
    grid_size: usize,
    pools: &WordPools,
    seed: Option<u64>,
    max_attempts: usize,
) -> Result<Puzzle, GenerationError> {
    PuzzleGenerator::new(GeneratorConfig {
        grid_size,
        max_attempts,
        seed,
    })
    .generate(pools)
}

/// Pick an orientation and a start cell from which a word of `length` fits the grid
fn random_start(rng: &mut StdRng, grid_size: usize, length: usize) -> (Direction, Coord) {
    let span = grid_size - length + 1;
    if rng.random_bool(0.5) {
        let start = Coord::new(rng.random_range(0..grid_size), rng.random_range(0..span));
        (Direction::Horizontal, start)
    } else {
        let start = Coord::new(rng.random_range(0..span), rng.random_range(0..grid_size));
        (Direction::Vertical, start)
    }
}

/// Filter and de-duplicate the supplied pools, keeping first-seen order
fn prepare_pools(pools: &WordPools) -> Result<BTreeMap<usize, Vec<String>>, GenerationError> {
    let mut prepared = BTreeMap::new();

    for &length in &WORD_LENGTHS {
        let mut seen = FxHashSet::default();
        let words: Vec<String> = pools
            .get(&length)
            .into_iter()
            .flatten()
            .map(|word| word.trim().to_ascii_uppercase())
            .filter(|word| word.len() == length && word.bytes().all(|b| b.is_ascii_uppercase()))
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if words.len() < WORDS_PER_LENGTH {
            return Err(GenerationError::InsufficientWords {
                length,
                available: words.len(),
                required: WORDS_PER_LENGTH,
            });
        }

        debug!(length, pool = words.len(), "Prepared candidate pool");
        prepared.insert(length, words);
    }

    Ok(prepared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::default_pools;

    fn minimal_pools() -> WordPools {
        WordPools::from([
            (4, vec!["TREE".to_string(), "BOAT".to_string()]),
            (5, vec!["APPLE".to_string(), "RIVER".to_string()]),
            (6, vec!["ORANGE".to_string(), "PYTHON".to_string()]),
        ])
    }

    #[test]
    fn generates_valid_puzzle_for_many_seeds() {
        let pools = default_pools();
        for seed in 0..200 {
            let puzzle = generate(12, &pools, Some(seed), DEFAULT_MAX_ATTEMPTS).unwrap();
            assert_eq!(puzzle.words().len(), 6);
            assert_eq!(puzzle.radar().len(), 6);
            assert_eq!(validate(&puzzle, 12), Ok(()), "seed {seed}");
        }
    }

    #[test]
    fn placed_texts_are_distinct() {
        let pools = default_pools();
        for seed in 0..100 {
            let puzzle = generate(12, &pools, Some(seed), DEFAULT_MAX_ATTEMPTS).unwrap();
            let texts: FxHashSet<&str> = puzzle.words().iter().map(Word::text).collect();
            assert_eq!(texts.len(), 6, "seed {seed}");
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let pools = default_pools();
        let a = generate(12, &pools, Some(1234), DEFAULT_MAX_ATTEMPTS).unwrap();
        let b = generate(12, &pools, Some(1234), DEFAULT_MAX_ATTEMPTS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_vary() {
        let pools = default_pools();
        let base = generate(12, &pools, Some(0), DEFAULT_MAX_ATTEMPTS).unwrap();
        let varied = (1..10)
            .map(|seed| generate(12, &pools, Some(seed), DEFAULT_MAX_ATTEMPTS).unwrap())
            .any(|puzzle| puzzle != base);
        assert!(varied);
    }

    #[test]
    fn words_follow_slot_order() {
        let puzzle = generate(12, &default_pools(), Some(7), DEFAULT_MAX_ATTEMPTS).unwrap();
        let lengths: Vec<usize> = puzzle.words().iter().map(Word::length).collect();
        assert_eq!(lengths, SLOT_LENGTHS.to_vec());
    }

    #[test]
    fn minimal_pools_use_every_word() {
        let generator = PuzzleGenerator::new(GeneratorConfig {
            seed: Some(99),
            ..GeneratorConfig::default()
        });
        let (puzzle, stats) = generator.generate_with_stats(&minimal_pools()).unwrap();

        let mut texts: Vec<&str> = puzzle.words().iter().map(Word::text).collect();
        texts.sort_unstable();
        assert_eq!(
            texts,
            vec!["APPLE", "BOAT", "ORANGE", "PYTHON", "RIVER", "TREE"]
        );
        assert_eq!(stats.seed, 99);
        assert!(stats.attempts >= 6);
    }

    #[test]
    fn empty_pool_fails_fast() {
        let mut pools = minimal_pools();
        pools.insert(5, Vec::new());
        assert_eq!(
            generate(12, &pools, Some(1), DEFAULT_MAX_ATTEMPTS),
            Err(GenerationError::InsufficientWords {
                length: 5,
                available: 0,
                required: 2
            })
        );
    }

    #[test]
    fn missing_length_fails_fast() {
        let mut pools = minimal_pools();
        pools.remove(&6);
        assert!(matches!(
            generate(12, &pools, Some(1), DEFAULT_MAX_ATTEMPTS),
            Err(GenerationError::InsufficientWords { length: 6, .. })
        ));
    }

    #[test]
    fn duplicates_are_collapsed() {
        let mut pools = minimal_pools();
        pools.insert(4, vec!["TREE".into(), "TREE".into(), "tree".into()]);
        assert_eq!(
            generate(12, &pools, Some(1), DEFAULT_MAX_ATTEMPTS),
            Err(GenerationError::InsufficientWords {
                length: 4,
                available: 1,
                required: 2
            })
        );
    }

    #[test]
    fn wrong_length_entries_are_ignored() {
        let mut pools = minimal_pools();
        pools.get_mut(&4).unwrap().push("TOOLONG".into());
        pools.get_mut(&4).unwrap().push("AB1C".into());
        let puzzle = generate(12, &pools, Some(3), DEFAULT_MAX_ATTEMPTS).unwrap();
        assert_eq!(validate(&puzzle, 12), Ok(()));
    }

    #[test]
    fn grid_too_small() {
        assert_eq!(
            generate(5, &minimal_pools(), Some(1), DEFAULT_MAX_ATTEMPTS),
            Err(GenerationError::GridTooSmall {
                grid_size: 5,
                longest: 6
            })
        );
    }

    #[test]
    fn single_attempt_budget_is_exhausted() {
        assert_eq!(
            generate(12, &default_pools(), Some(1), 1),
            Err(GenerationError::AttemptsExhausted { attempts: 1 })
        );
    }

    #[test]
    fn cramped_grid_terminates() {
        let pools = default_pools();
        for seed in 0..5 {
            match generate(6, &pools, Some(seed), 300) {
                Ok(puzzle) => assert_eq!(validate(&puzzle, 6), Ok(())),
                Err(err) => assert_eq!(err, GenerationError::AttemptsExhausted { attempts: 300 }),
            }
        }
    }

    #[test]
    #[should_panic(expected = "generator placed an unusable word")]
    fn unusable_pool_word_fails_loudly() {
        let generator = PuzzleGenerator::default();
        let mut pool = vec!["TR3E".to_string()];
        let mut rng = StdRng::seed_from_u64(3);
        let mut attempts = 0;
        let _ = generator.fill_slot(&mut pool, 4, &FxHashSet::default(), &mut rng, &mut attempts);
    }

    #[test]
    fn unseeded_generation_reports_seed() {
        let generator = PuzzleGenerator::default();
        let (_, stats) = generator.generate_with_stats(&default_pools()).unwrap();
        let replay = PuzzleGenerator::new(GeneratorConfig {
            seed: Some(stats.seed),
            ..GeneratorConfig::default()
        });
        let (_, replay_stats) = replay.generate_with_stats(&default_pools()).unwrap();
        assert_eq!(stats, replay_stats);
    }
}
