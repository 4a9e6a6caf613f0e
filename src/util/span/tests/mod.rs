//! Position unit tests

use crate::util::span::Position;

#[test]
fn display_is_line_colon_column() {
    assert_eq!(Position::new(3, 7).to_string(), "3:7");
}

#[test]
fn default_is_origin() {
    let pos = Position::default();
    assert_eq!(pos.line, 0);
    assert_eq!(pos.column, 0);
}

#[test]
fn positions_compare_by_value() {
    assert_eq!(Position::new(1, 2), Position::new(1, 2));
    assert_ne!(Position::new(1, 2), Position::new(2, 1));
}
