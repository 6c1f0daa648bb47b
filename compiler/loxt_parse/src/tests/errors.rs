//! Failure modes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{parse, ParseError, ParseErrorKind};
use loxt_diagnostic::ErrorCode;
use loxt_ir::{Location, TokenTag};
use loxt_lexer::lex;
use pretty_assertions::assert_eq;

fn parse_err(source: &str) -> ParseError {
    let stream = lex(source);
    match parse(&stream) {
        Ok(_) => panic!("expected {source:?} to fail"),
        Err(e) => e,
    }
}

#[test]
fn test_stray_close_paren() {
    let err = parse_err(")");
    assert_eq!(
        err,
        ParseError::new(
            ParseErrorKind::ExpectedExpression,
            TokenTag::RightParen,
            Location::START
        )
    );
    assert_eq!(err.code(), ErrorCode::E1002);
    assert_eq!(err.to_string(), "1:1: expected expression, found `)`");
}

#[test]
fn test_empty_input() {
    let err = parse_err("");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(err.found, TokenTag::Eof);
    assert_eq!(err.loc, Location::START);
}

#[test]
fn test_missing_right_operand() {
    let err = parse_err("1 +");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(err.found, TokenTag::Eof);
    assert_eq!(err.loc, Location::new(1, 4, 3));
}

#[test]
fn test_identifiers_are_not_expressions() {
    let err = parse_err("x + 1");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(err.found, TokenTag::Identifier);
}

#[test]
fn test_lex_error_token() {
    let err = parse_err("1 + #");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(err.found, TokenTag::Error);
    assert_eq!(err.loc, Location::new(1, 5, 4));
}

#[test]
fn test_unclosed_paren_at_end() {
    let err = parse_err("(1 + 2");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnclosedParen {
            open: Location::START
        }
    );
    assert_eq!(err.found, TokenTag::Eof);
    assert_eq!(err.loc, Location::new(1, 7, 6));
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(
        err.to_string(),
        "1:7: expected `)` to close `(` at 1:1, found end of input"
    );
}

#[test]
fn test_unclosed_paren_before_token() {
    let err = parse_err("1 * (2 3)");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnclosedParen {
            open: Location::new(1, 5, 4)
        }
    );
    assert_eq!(err.found, TokenTag::Number);
    assert_eq!(err.loc, Location::new(1, 8, 7));
}

#[test]
fn test_trailing_tokens() {
    let err = parse_err("1 2");
    assert_eq!(err.kind, ParseErrorKind::ExpectedEndOfInput);
    assert_eq!(err.found, TokenTag::Number);
    assert_eq!(err.loc, Location::new(1, 3, 2));
    assert_eq!(err.code(), ErrorCode::E1001);

    let err = parse_err("(1))");
    assert_eq!(err.kind, ParseErrorKind::ExpectedEndOfInput);
    assert_eq!(err.found, TokenTag::RightParen);
}

#[test]
fn test_diagnostics() {
    let diag = parse_err("(1").to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.primary_loc(), Some(Location::new(1, 3, 2)));
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.labels[1].loc, Location::START);

    let diag = parse_err("1 ;").to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "expected end of input, found `;`");

    let diag = parse_err("*").to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.message, "expected expression, found `*`");
}
