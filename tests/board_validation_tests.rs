use skyscrapers_checker::validation::{
    check_columns, check_completeness, check_horizontal_visibility, check_row_uniqueness,
};
use skyscrapers_checker::{parse_board, validate_board, Board, FormatError};

const SOLVED: [&str; 7] = [
    "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
];

fn solved_with(row: usize, line: &'static str) -> Board {
    let mut lines = SOLVED;
    lines[row] = line;
    parse_board(&lines).expect("board should parse")
}

#[test]
fn solved_board_passes_every_check() {
    let board = parse_board(&SOLVED).unwrap();

    assert!(check_completeness(&board));
    assert!(check_row_uniqueness(&board));
    assert!(check_horizontal_visibility(&board));
    assert!(check_columns(&board));
    assert!(validate_board(&board));
}

#[test]
fn unfinished_board_fails_overall() {
    let lines = [
        "***21**", "4?????*", "4?????*", "*?????5", "*?????*", "*?????*", "*2*1***",
    ];
    let board = parse_board(&lines).unwrap();

    assert!(!check_completeness(&board));
    assert!(!validate_board(&board));
}

#[test]
fn row_duplicate_fails_overall() {
    let board = solved_with(1, "452453*");
    assert!(!check_row_uniqueness(&board));
    assert!(!validate_board(&board));
}

#[test]
fn column_duplicate_fails_overall() {
    let board = solved_with(5, "*41232*");
    assert!(!check_columns(&board));
    assert!(!validate_board(&board));
}

#[test]
fn row_visibility_mismatch_fails_overall() {
    let board = solved_with(1, "452413*");
    assert!(!check_horizontal_visibility(&board));
    assert!(!validate_board(&board));
}

#[test]
fn verdict_is_stable_across_runs() {
    let board = parse_board(&SOLVED).unwrap();
    let first = validate_board(&board);
    let second = validate_board(&board);
    assert_eq!(first, second);
    assert!(first);
}

#[test]
fn transposing_twice_restores_the_board() {
    let board = parse_board(&SOLVED).unwrap();
    assert_eq!(board.transposed().transposed(), board);
}

#[test]
fn non_square_input_is_a_format_error() {
    let lines = ["***21**", "412453*", "423145*"];
    assert!(matches!(
        parse_board(&lines),
        Err(FormatError::NotSquare { .. })
    ));
}

#[test]
fn end_to_end_from_a_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", SOLVED.join("\n")).unwrap();

    let lines = skyscrapers_checker::read_board_lines(file.path()).unwrap();
    let board = parse_board(&lines).unwrap();
    assert!(validate_board(&board));
}

#[test]
fn end_to_end_rejects_garbage_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "not a board\nat all").unwrap();

    let lines = skyscrapers_checker::read_board_lines(file.path()).unwrap();
    assert!(parse_board(&lines).is_err());
}
