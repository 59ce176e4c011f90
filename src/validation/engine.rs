//! Rule Checks
//!
//! Core board validation separated from parsing and CLI concerns. All
//! checks are pure functions over an immutable `Board`; column rules
//! reuse the row-oriented checks against the transposed grid.

use log::debug;

use crate::parser::{Board, Cell};

/// True iff no cell of the board is the unfilled marker '?'.
pub fn check_completeness(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row.iter().all(|cell| *cell != Cell::Unknown))
}

/// True iff every interior row holds no repeated height.
///
/// Rows 0 and N-1 carry column hints, not buildings, and are never
/// checked. That skip policy is what lets `check_columns` run this
/// unchanged against the transposed grid. Unfilled cells are not
/// duplicates of each other; completeness owns that failure mode.
pub fn check_row_uniqueness(board: &Board) -> bool {
    let n = board.size();
    for row in board.rows().iter().take(n - 1).skip(1) {
        let mut seen = [false; 10];
        for cell in &row[1..n - 1] {
            if let Some(height) = cell.height() {
                if seen[height as usize] {
                    return false;
                }
                seen[height as usize] = true;
            }
        }
    }
    true
}

/// Skyline check for a single line, looking from its left end.
///
/// `line` is a full board line, hint cells included; `pivot` is the
/// expected number of visible buildings. The first interior building is
/// always visible; a later one is visible iff strictly taller than
/// everything before it. Equal heights never add visibility. To check
/// the opposite direction, pass the line reversed and the other hint.
///
/// A line too short to have an interior, or one whose interior holds a
/// cell without a height, cannot match any pivot.
pub fn left_to_right_check(line: &[Cell], pivot: u8) -> bool {
    visible_from_left(line) == Some(u32::from(pivot))
}

fn visible_from_left(line: &[Cell]) -> Option<u32> {
    if line.len() < 3 {
        return None;
    }
    let mut heights = line[1..line.len() - 1].iter().map(|cell| cell.height());

    let mut tallest = heights.next()??;
    let mut visible = 1;
    for height in heights {
        let height = height?;
        if height > tallest {
            tallest = height;
            visible += 1;
        }
    }
    Some(visible)
}

/// True iff every interior row satisfies both of its edge hints.
///
/// A '*' hint constrains nothing. The right-hand hint is checked by
/// reversing the row and reusing the left-to-right scan.
pub fn check_horizontal_visibility(board: &Board) -> bool {
    let n = board.size();
    for row in board.rows().iter().take(n - 1).skip(1) {
        if let Some(pivot) = row[0].height() {
            if !left_to_right_check(row, pivot) {
                return false;
            }
        }
        if let Some(pivot) = row[n - 1].height() {
            let reversed: Vec<Cell> = row.iter().rev().copied().collect();
            if !left_to_right_check(&reversed, pivot) {
                return false;
            }
        }
    }
    true
}

/// Column compliance: uniqueness and visibility of the transposed grid.
///
/// Sound only because boards are square, which the parser enforces.
pub fn check_columns(board: &Board) -> bool {
    let transposed = board.transposed();
    check_row_uniqueness(&transposed) && check_horizontal_visibility(&transposed)
}

/// Full verdict for a board: finished, row-compliant, column-compliant.
///
/// The short-circuiting is an optimization; all four checks are pure
/// functions of the same board. Callers get a bare boolean, so the
/// failing stage is only surfaced through debug logging.
pub fn validate_board(board: &Board) -> bool {
    if !check_completeness(board) {
        debug!("board has unfilled cells");
        return false;
    }
    if !check_row_uniqueness(board) {
        debug!("duplicate height in a row");
        return false;
    }
    if !check_horizontal_visibility(board) {
        debug!("row visibility hint not satisfied");
        return false;
    }
    if !check_columns(board) {
        debug!("column uniqueness or visibility not satisfied");
        return false;
    }
    true
}
