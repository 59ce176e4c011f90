//! Validation Engine
//!
//! Clean separation of rule checking from parsing and I/O concerns.

pub mod engine;

pub use engine::{
    check_columns, check_completeness, check_horizontal_visibility, check_row_uniqueness,
    left_to_right_check, validate_board,
};
