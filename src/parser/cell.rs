//! Grid Alphabet
//!
//! Typed representation of a single board character.
//! No validation logic or I/O concerns - pure data representation.

/// One cell of the board grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A building height or hint digit, '1'..='9'
    Height(u8),
    /// '*' - a border position carrying no hint
    NoHint,
    /// '?' - an interior position not yet filled in
    Unknown,
}

impl Cell {
    /// Convert a board character into a cell.
    ///
    /// Returns `None` for anything outside the board alphabet;
    /// the parser turns that into a format error with a position.
    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            '*' => Some(Cell::NoHint),
            '?' => Some(Cell::Unknown),
            '1'..='9' => Some(Cell::Height(ch as u8 - b'0')),
            _ => None,
        }
    }

    /// The height this cell carries, if any.
    ///
    /// `NoHint` and `Unknown` have no height, which is exactly the
    /// "no constraint" / "not countable" case the checks branch on.
    pub fn height(self) -> Option<u8> {
        match self {
            Cell::Height(h) => Some(h),
            Cell::NoHint | Cell::Unknown => None,
        }
    }

    /// Render the cell back to its text form.
    pub fn to_char(self) -> char {
        match self {
            Cell::Height(h) => (b'0' + h) as char,
            Cell::NoHint => '*',
            Cell::Unknown => '?',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_digits() {
        assert_eq!(Cell::from_char('1'), Some(Cell::Height(1)));
        assert_eq!(Cell::from_char('9'), Some(Cell::Height(9)));
    }

    #[test]
    fn test_from_char_markers() {
        assert_eq!(Cell::from_char('*'), Some(Cell::NoHint));
        assert_eq!(Cell::from_char('?'), Some(Cell::Unknown));
    }

    #[test]
    fn test_from_char_rejects_everything_else() {
        assert_eq!(Cell::from_char('0'), None);
        assert_eq!(Cell::from_char('a'), None);
        assert_eq!(Cell::from_char(' '), None);
        assert_eq!(Cell::from_char('.'), None);
    }

    #[test]
    fn test_height() {
        assert_eq!(Cell::Height(4).height(), Some(4));
        assert_eq!(Cell::NoHint.height(), None);
        assert_eq!(Cell::Unknown.height(), None);
    }

    #[test]
    fn test_char_round_trip() {
        for ch in ['1', '5', '9', '*', '?'] {
            assert_eq!(Cell::from_char(ch).unwrap().to_char(), ch);
        }
    }
}
