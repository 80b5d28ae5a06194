//! Battlewords
//!
//! A single-player word-hunting game: six hidden words are placed on a square
//! grid, the player reveals cells one at a time and guesses words for points.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use battlewords::core::Coord;
//! use battlewords::game::GameState;
//! use battlewords::generator::generate;
//! use battlewords::wordlists::default_pools;
//!
//! let puzzle = generate(12, &default_pools(), Some(1234), 5000).unwrap();
//! let mut state = GameState::new(puzzle, 12);
//!
//! state.reveal(Coord::new(0, 0));
//! println!("{}", state.last_action());
//! ```

// Core domain types
pub mod core;

// Puzzle generation and validation
pub mod generator;

// Game rules and scoring
pub mod game;

// Word lists
pub mod wordlists;

// Shared game settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
