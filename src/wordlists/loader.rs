//! Word list loading utilities
//!
//! Parses word list text into per-length pools. Blank lines and `#` comments
//! are skipped, entries are uppercased, and only `A-Z` words of length 4, 5
//! or 6 are kept, each once, in first-seen order.

use super::{EMBEDDED_WORDS, MIN_POOL_SIZE, WordPools};
use crate::core::WORD_LENGTHS;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Pools loaded from a file, with the lengths that fell back to the embedded list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub pools: WordPools,
    pub fallback_lengths: Vec<usize>,
}

impl LoadReport {
    /// Short label describing where the words came from
    #[must_use]
    pub fn source(&self) -> &'static str {
        match self.fallback_lengths.len() {
            0 => "file",
            n if n == WORD_LENGTHS.len() => "embedded",
            _ => "file+embedded",
        }
    }
}

/// Parse word list lines into pools
///
/// # Examples
/// ```
/// use battlewords::wordlists::parse_word_list;
///
/// let pools = parse_word_list("tree\n# comment\nApple # fruit\nTREE\nab\n");
/// assert_eq!(pools[&4], vec!["TREE"]);
/// assert_eq!(pools[&5], vec!["APPLE"]);
/// assert!(pools[&6].is_empty());
/// ```
#[must_use]
pub fn parse_word_list(text: &str) -> WordPools {
    parse_lines(text.lines())
}

/// Pools built from the embedded default list
#[must_use]
pub fn default_pools() -> WordPools {
    parse_lines(EMBEDDED_WORDS.iter().copied())
}

/// Load pools from a file
///
/// Any length with fewer than [`MIN_POOL_SIZE`] words uses the embedded pool
/// for that length instead.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use battlewords::wordlists::load_from_file;
///
/// let report = load_from_file("data/wordlist.txt").unwrap();
/// println!("Loaded words from {}", report.source());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<LoadReport> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let report = with_fallback(parse_word_list(&content));

    info!(
        path = %path.display(),
        source = report.source(),
        "Loaded word list"
    );
    Ok(report)
}

/// Replace undersized pools with the embedded ones
#[must_use]
pub fn with_fallback(mut pools: WordPools) -> LoadReport {
    let mut embedded = default_pools();
    let mut fallback_lengths = Vec::new();

    for length in WORD_LENGTHS {
        let size = pools.get(&length).map_or(0, Vec::len);
        if size < MIN_POOL_SIZE {
            warn!(
                length,
                size,
                minimum = MIN_POOL_SIZE,
                "Word pool too small, using embedded words"
            );
            pools.insert(length, embedded.remove(&length).unwrap_or_default());
            fallback_lengths.push(length);
        } else {
            info!(length, size, "Word pool ready");
        }
    }

    LoadReport {
        pools,
        fallback_lengths,
    }
}

fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> WordPools {
    let mut pools: WordPools = WORD_LENGTHS.iter().map(|&len| (len, Vec::new())).collect();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for line in lines {
        let Some(word) = normalize_line(line) else {
            continue;
        };
        if let Some(pool) = pools.get_mut(&word.len())
            && seen.insert(word.clone())
        {
            pool.push(word);
        }
    }

    pools
}

fn normalize_line(line: &str) -> Option<String> {
    let entry = line.split('#').next()?.trim();
    if entry.is_empty() || !entry.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(entry.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filters_and_uppercases() {
        let pools = parse_word_list("tree\nboat\nriver\nforest\nab\ntoolonger\nfr0g\n");
        assert_eq!(pools[&4], vec!["TREE", "BOAT"]);
        assert_eq!(pools[&5], vec!["RIVER"]);
        assert_eq!(pools[&6], vec!["FOREST"]);
        assert_eq!(pools.len(), 3);
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let text = "# header\n\n   \nWIND # inline\n  # indented comment\nLION\n";
        let pools = parse_word_list(text);
        assert_eq!(pools[&4], vec!["WIND", "LION"]);
    }

    #[test]
    fn parse_dedupes_preserving_order() {
        let pools = parse_word_list("MOON\nmoon\nGLOW\nMoon\nGAME\n");
        assert_eq!(pools[&4], vec!["MOON", "GLOW", "GAME"]);
    }

    #[test]
    fn parse_rejects_inner_whitespace() {
        let pools = parse_word_list("ICE CREAM\nHOT DOG\n");
        assert!(pools.values().all(Vec::is_empty));
    }

    #[test]
    fn parse_empty_input() {
        let pools = parse_word_list("");
        assert_eq!(pools.len(), 3);
        assert!(pools.values().all(Vec::is_empty));
    }

    #[test]
    fn fallback_replaces_small_pools() {
        let big: Vec<String> = default_pools()[&5].clone();
        let mut pools = parse_word_list("TREE\nBOAT\n");
        pools.insert(5, big.clone());

        let report = with_fallback(pools);
        assert_eq!(report.fallback_lengths, vec![4, 6]);
        assert_eq!(report.pools[&5], big);
        assert_eq!(report.pools[&4], default_pools()[&4]);
        assert_eq!(report.source(), "file+embedded");
    }

    #[test]
    fn fallback_all_lengths() {
        let report = with_fallback(WordPools::new());
        assert_eq!(report.fallback_lengths, vec![4, 5, 6]);
        assert_eq!(report.source(), "embedded");
        assert_eq!(report.pools, default_pools());
    }

    #[test]
    fn no_fallback_when_pools_large_enough() {
        let report = with_fallback(default_pools());
        assert!(report.fallback_lengths.is_empty());
        assert_eq!(report.source(), "file");
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/battlewords/words.txt").is_err());
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "battlewords-loader-{}.txt",
            std::process::id()
        ));
        fs::write(&path, "TREE\nBOAT\n").unwrap();

        let report = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(report.fallback_lengths, vec![4, 5, 6]);
    }
}
