//! Board Parser
//!
//! Turns trimmed text lines into a typed, square `Board`.
//! Focused solely on the grid format; rule checking lives in
//! `crate::validation`.

pub mod board;
pub mod cell;

pub use board::Board;
pub use cell::Cell;

use thiserror::Error;

/// A malformed grid. Rule violations (duplicates, visibility
/// mismatches, unfilled cells) are never format errors; they are the
/// ordinary `false` verdict of validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("board is empty")]
    Empty,

    #[error("board side must be at least 3 cells, got {0}")]
    TooSmall(usize),

    #[error("board is not square: {row_count} rows but row {row} is {len} cells wide")]
    NotSquare {
        row: usize,
        len: usize,
        row_count: usize,
    },

    #[error("invalid character {ch:?} at row {row}, column {col}")]
    InvalidChar { ch: char, row: usize, col: usize },

    #[error("unfilled-cell marker '?' outside the interior at row {row}, column {col}")]
    MisplacedUnknown { row: usize, col: usize },

    #[error("no-hint marker '*' inside the interior at row {row}, column {col}")]
    MisplacedNoHint { row: usize, col: usize },

    #[error("digit {height} in the corner at row {row}, column {col}; corners carry no hint")]
    DigitInCorner { height: u8, row: usize, col: usize },

    #[error("height {height} at row {row}, column {col} exceeds the maximum of {max} for this board")]
    HeightOutOfRange {
        height: u8,
        row: usize,
        col: usize,
        max: u8,
    },
}

/// Parse a sequence of equal-length lines into a `Board`.
///
/// This is the main entry point for parsing. Enforces squareness, the
/// digit/`*`/`?` alphabet, `?` only in interior positions, `*` only in
/// border and hint positions, corners free of digits, and heights
/// within `1..=N-2`. The column checks reuse the row checks against the
/// transposed grid, a trick that is only sound for square grids, so
/// non-square input is rejected here rather than producing a wrong
/// verdict later.
pub fn parse_board<S: AsRef<str>>(lines: &[S]) -> Result<Board, FormatError> {
    let n = lines.len();
    if n == 0 {
        return Err(FormatError::Empty);
    }
    if n < 3 {
        return Err(FormatError::TooSmall(n));
    }
    let max_height = (n - 2) as u8;

    // Shape before content: a ragged or non-square grid is reported as
    // such even when it also contains stray characters.
    for (row_idx, line) in lines.iter().enumerate() {
        let len = line.as_ref().chars().count();
        if len != n {
            return Err(FormatError::NotSquare {
                row: row_idx,
                len,
                row_count: n,
            });
        }
    }

    let mut rows = Vec::with_capacity(n);
    for (row_idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let mut cells = Vec::with_capacity(n);
        for (col_idx, ch) in line.chars().enumerate() {
            let cell = Cell::from_char(ch).ok_or(FormatError::InvalidChar {
                ch,
                row: row_idx,
                col: col_idx,
            })?;
            match cell {
                Cell::Unknown if !is_interior(row_idx, col_idx, n) => {
                    return Err(FormatError::MisplacedUnknown {
                        row: row_idx,
                        col: col_idx,
                    });
                }
                Cell::NoHint if is_interior(row_idx, col_idx, n) => {
                    return Err(FormatError::MisplacedNoHint {
                        row: row_idx,
                        col: col_idx,
                    });
                }
                Cell::Height(h) if is_corner(row_idx, col_idx, n) => {
                    return Err(FormatError::DigitInCorner {
                        height: h,
                        row: row_idx,
                        col: col_idx,
                    });
                }
                Cell::Height(h) if h > max_height => {
                    return Err(FormatError::HeightOutOfRange {
                        height: h,
                        row: row_idx,
                        col: col_idx,
                        max: max_height,
                    });
                }
                _ => {}
            }
            cells.push(cell);
        }
        rows.push(cells);
    }

    Ok(Board::from_rows(rows))
}

fn is_interior(row: usize, col: usize, n: usize) -> bool {
    row > 0 && row < n - 1 && col > 0 && col < n - 1
}

fn is_corner(row: usize, col: usize, n: usize) -> bool {
    (row == 0 || row == n - 1) && (col == 0 || col == n - 1)
}
