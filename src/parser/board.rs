//! Board Model
//!
//! Immutable square grid of cells. Squareness is guaranteed by
//! construction: only the parser builds boards, and the transpose of a
//! square board is square again. The row checks rely on this to reuse
//! their skip-first/last-line policy against columns.

use std::fmt;

use crate::parser::cell::Cell;

/// A parsed skyscrapers board.
///
/// Rows 0 and N-1 are hint rows; columns 0 and N-1 of every other row
/// are hint cells; everything in between is interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Build a board from pre-validated rows.
    ///
    /// Callers (the parser, `transposed`) must hand in a square grid.
    pub(crate) fn from_rows(rows: Vec<Vec<Cell>>) -> Board {
        debug_assert!(rows.iter().all(|r| r.len() == rows.len()));
        Board { rows }
    }

    /// Side length, border included.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &[Cell] {
        &self.rows[index]
    }

    /// Column projection: row i of the result is column i of `self`.
    ///
    /// Lets the row-oriented checks serve columns unchanged. The
    /// original board is left untouched.
    pub fn transposed(&self) -> Board {
        let n = self.size();
        let rows = (0..n)
            .map(|col| self.rows.iter().map(|row| row[col]).collect())
            .collect();
        Board { rows }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
