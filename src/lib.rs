//! Skyscrapers Checker
//!
//! Validates a completed skyscrapers puzzle board against the grid
//! rules.
//!
//! This library provides:
//! - Board parsing from fixed-format text lines
//! - Completeness, uniqueness and skyline-visibility checks
//! - Column checking through transposition of the same row checks
//! - Configuration management for the CLI binary

pub mod config;
pub mod loader;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use loader::read_board_lines;
pub use parser::{parse_board, Board, Cell, FormatError};
pub use validation::validate_board;
