//! Grid Loader
//!
//! Reads a board file into ordered, trimmed text lines. The core
//! checks only ever see the resulting string slices; everything about
//! files stays here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a board file and return its lines, surrounding whitespace
/// stripped, in file order.
pub fn read_board_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}
