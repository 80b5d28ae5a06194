//! Benchmark command
//!
//! Generates many puzzles over consecutive seeds and reports generator effort.

use crate::config::GameConfig;
use crate::generator::PuzzleGenerator;
use crate::wordlists::WordPools;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub grid_size: usize,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub average_attempts: f64,
    pub max_attempts: usize,
    pub average_restarts: f64,
    pub max_restarts: usize,
    /// Restart count → number of puzzles
    pub restart_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` puzzles in parallel
///
/// Seeds run from the configured seed (or 0) upward, so results are
/// reproducible.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(
    config: &GameConfig,
    pools: &WordPools,
    count: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let base_seed = config.seed.unwrap_or(0);

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb.set_message("generating");
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes: Vec<_> = (0..count as u64)
        .into_par_iter()
        .map(|offset| {
            let mut generator_config = config.generator_config(0);
            generator_config.seed = Some(base_seed.wrapping_add(offset));
            let outcome = PuzzleGenerator::new(generator_config).generate_with_stats(pools);
            pb.inc(1);
            outcome
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let stats: Vec<_> = outcomes
        .iter()
        .filter_map(|outcome| outcome.as_ref().ok().map(|(_, stats)| *stats))
        .collect();

    let succeeded = stats.len();
    let total_attempts: usize = stats.iter().map(|s| s.attempts).sum();
    let total_restarts: usize = stats.iter().map(|s| s.restarts).sum();
    let mut restart_distribution = BTreeMap::new();
    for s in &stats {
        *restart_distribution.entry(s.restarts).or_insert(0) += 1;
    }

    let average = |total: usize| {
        if succeeded == 0 {
            0.0
        } else {
            total as f64 / succeeded as f64
        }
    };

    BenchmarkResult {
        grid_size: config.grid_size,
        total: count,
        succeeded,
        failed: count - succeeded,
        average_attempts: average(total_attempts),
        max_attempts: stats.iter().map(|s| s.attempts).max().unwrap_or(0),
        average_restarts: average(total_restarts),
        max_restarts: stats.iter().map(|s| s.restarts).max().unwrap_or(0),
        restart_distribution,
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
