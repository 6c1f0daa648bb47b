use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_labels_and_notes() {
    let loc = Location::new(2, 4, 10);
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("expected expression")
        .with_label(loc, "here")
        .with_note("first")
        .with_note("second");

    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.labels, vec![Label::primary(loc, "here")]);
    assert_eq!(diag.notes, vec!["first".to_string(), "second".to_string()]);
    assert_eq!(diag.primary_loc(), Some(loc));
}

#[test]
fn display_is_header_line() {
    let diag = expected_expression(Location::START, "`)`");
    assert_eq!(
        diag.to_string(),
        "error[E1002]: expected expression, found `)`"
    );
}

#[test]
fn unclosed_delimiter_points_at_both_ends() {
    let open = Location::new(1, 1, 0);
    let close = Location::new(1, 7, 6);
    let diag = unclosed_delimiter(open, close);

    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.message, "unclosed delimiter `(`");
    assert_eq!(diag.primary_loc(), Some(close));
    assert_eq!(diag.labels[0].message, "expected `)`");
    assert_eq!(diag.labels[1], Label::secondary(open, "unclosed delimiter opened here"));
}

#[test]
fn lexer_constructors_use_lexer_codes() {
    let loc = Location::START;
    assert_eq!(unterminated_string(loc).code, ErrorCode::E0001);
    assert_eq!(unexpected_character(loc, '#').code, ErrorCode::E0002);
    assert_eq!(integer_too_large(loc).code, ErrorCode::E0003);
}

#[test]
fn unexpected_character_escapes_control_chars() {
    let diag = unexpected_character(Location::START, '\u{7}');
    assert_eq!(diag.message, "unexpected character `\\u{7}`");
}

#[test]
fn unexpected_token_message() {
    let diag = unexpected_token(Location::START, "end of input", "`)`");
    assert_eq!(diag.message, "expected end of input, found `)`");
    assert_eq!(diag.code, ErrorCode::E1001);
}
