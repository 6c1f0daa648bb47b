use super::*;
use loxt_lexer::lex;

#[test]
fn starts_at_first_token() {
    let stream = lex("1 + 2");
    let cursor = Cursor::new(stream.tokens());
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.current_tag(), TokenTag::Number);
    assert_eq!(cursor.current_loc(), Location::START);
    assert!(!cursor.is_at_end());
}

#[test]
fn check_never_consumes() {
    let stream = lex("(");
    let cursor = Cursor::new(stream.tokens());
    assert!(cursor.check(TokenTag::LeftParen));
    assert!(cursor.check(TokenTag::LeftParen));
    assert!(!cursor.check(TokenTag::RightParen));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn advance_returns_consumed_token() {
    let stream = lex("nil true");
    let mut cursor = Cursor::new(stream.tokens());
    assert_eq!(cursor.advance().kind, TokenKind::Nil);
    assert_eq!(cursor.current_kind(), TokenKind::True);
    assert_eq!(cursor.advance().loc, Location::new(1, 5, 4));
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 2);
}

#[test]
fn empty_stream_is_at_end() {
    let stream = lex("");
    let cursor = Cursor::new(stream.tokens());
    assert!(cursor.is_at_end());
    assert!(cursor.check(TokenTag::Eof));
}
