//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_board, print_game_summary, print_generation, print_radar,
    print_solution, print_status,
};
pub use formatters::{CellView, EMPTY, HIDDEN, PULSE, cell_view, render_puzzle, render_radar};
