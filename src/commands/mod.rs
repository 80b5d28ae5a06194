//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{GenerateResult, generate_puzzle};
pub use simple::{SimpleCommand, run_simple};
