//! Battlewords - CLI
//!
//! Word-hunting game with TUI and line-based modes, plus puzzle generation
//! and generator benchmarking.

use anyhow::{Context, Result};
use battlewords::{
    commands::{generate_puzzle, run_benchmark, run_simple},
    config::{GameConfig, WordListSource},
    core::{DEFAULT_GRID_SIZE, WORD_LENGTHS},
    generator::DEFAULT_MAX_ATTEMPTS,
    output::{print_benchmark_result, print_generation, print_solution},
    wordlists::WordPools,
};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// File the TUI logs to, since the terminal belongs to the game
const TUI_LOG_FILE: &str = "battlewords.log";

#[derive(Parser)]
#[command(
    name = "battlewords",
    about = "Find six hidden words on a grid by revealing cells and guessing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Side length of the square grid
    #[arg(short, long, global = true, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: usize,

    /// Candidate-word attempts allowed across all generation restarts
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for reproducible puzzles
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Generate one puzzle and print it
    Generate {
        /// Show the letters instead of masking them
        #[arg(short, long)]
        reveal: bool,
    },

    /// Benchmark puzzle generation
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play))?;

    let config = GameConfig {
        grid_size: cli.grid_size,
        max_attempts: cli.max_attempts,
        seed: cli.seed,
        word_list: WordListSource::from_arg(&cli.wordlist),
    };
    let pools = load_pools(&config)?;

    match command {
        Commands::Play => run_play_command(&config, &pools),
        Commands::Simple => run_simple(&config, &pools).map_err(|e| anyhow::anyhow!(e)),
        Commands::Generate { reveal } => run_generate_command(&config, &pools, reveal),
        Commands::Benchmark { count } => {
            run_benchmark_command(&config, &pools, count);
            Ok(())
        }
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it logs to a file; every other mode logs
/// warnings to stderr. `RUST_LOG` overrides either default.
fn init_logging(tui: bool) -> Result<()> {
    if tui {
        let log_file = File::create(TUI_LOG_FILE)
            .with_context(|| format!("Failed to create log file {TUI_LOG_FILE}"))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}

fn load_pools(config: &GameConfig) -> Result<WordPools> {
    let report = config
        .load_pools()
        .with_context(|| format!("Failed to load word list {:?}", config.word_list))?;

    if let WordListSource::File(path) = &config.word_list {
        if report.fallback_lengths.len() == WORD_LENGTHS.len() {
            warn!(path = %path.display(), "No usable words in file, playing with embedded list");
        }
        info!(source = report.source(), "Word pools loaded");
    }
    Ok(report.pools)
}

fn run_play_command(config: &GameConfig, pools: &WordPools) -> Result<()> {
    use battlewords::interactive::{App, run_tui};

    let app = App::new(config, pools)?;
    run_tui(app)
}

fn run_generate_command(config: &GameConfig, pools: &WordPools, reveal: bool) -> Result<()> {
    let result = generate_puzzle(config, pools, reveal)?;
    print_generation(&result.lines, &result.puzzle, &result.stats);
    if reveal {
        print_solution(&result.puzzle);
    }
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, pools: &WordPools, count: usize) {
    println!(
        "Generating {count} puzzles on a {size}x{size} grid...",
        size = config.grid_size
    );
    let result = run_benchmark(config, pools, count, true);
    print_benchmark_result(&result);
}
