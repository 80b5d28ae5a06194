//! Word source for puzzle generation
//!
//! Supplies, for each required length, a de-duplicated list of uppercase
//! candidate words. The default list is embedded in the binary; custom lists
//! can be loaded from a file and fall back to the embedded pool per length.

mod embedded;
pub mod loader;

use std::collections::BTreeMap;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use loader::{LoadReport, default_pools, load_from_file, parse_word_list};

/// Candidate words keyed by length
pub type WordPools = BTreeMap<usize, Vec<String>>;

/// Smallest pool a loaded file may supply for a length before the embedded
/// pool is used instead
pub const MIN_POOL_SIZE: usize = 50;
