use super::*;
use crate::LexErrorKind;
use loxt_ir::Location;
use pretty_assertions::assert_eq;

#[test]
fn identifiers_dedup_in_first_seen_order() {
    let mut stream = TokenStream::new("");
    let foo = stream.intern_identifier("foo");
    let bar = stream.intern_identifier("bar");
    let foo_again = stream.intern_identifier("foo");

    assert_eq!(foo, foo_again);
    assert_eq!(foo.raw(), 0);
    assert_eq!(bar.raw(), 1);
    assert_eq!(stream.identifier_count(), 2);
    assert_eq!(stream.identifier(bar), "bar");
}

#[test]
fn literals_get_fresh_ids() {
    let mut stream = TokenStream::new("");
    let a = stream.push_string("x");
    let b = stream.push_string("x");
    let n = stream.push_number(7);
    let m = stream.push_number(7);

    assert_ne!(a, b);
    assert_ne!(n, m);
    assert_eq!(stream.string_literal(b), "x");
    assert_eq!(stream.number_literal(m), 7);
}

#[test]
fn push_error_adds_inline_token_and_sets_flag() {
    let mut stream = TokenStream::new("#");
    assert!(!stream.has_error());

    let loc = Location::START;
    stream.push_error(LexError::new(LexErrorKind::UnexpectedChar('#'), loc));

    assert!(stream.has_error());
    assert_eq!(stream.tokens(), &[Token::new(TokenKind::Error, loc)]);
    assert_eq!(stream.errors().len(), 1);
}

#[test]
fn render_formats() {
    let mut stream = TokenStream::new("");
    let ident = stream.intern_identifier("foo");
    let string = stream.push_string("abc");
    let number = stream.push_number(123);
    let at = Location::new(2, 5, 9);

    assert_eq!(
        stream.render(&Token::new(TokenKind::Identifier(ident), at)),
        "{kind: Identifier, line: 2, column: 5, identifier: foo}"
    );
    assert_eq!(
        stream.render(&Token::new(TokenKind::String(string), at)),
        "{kind: String, line: 2, column: 5, literal: \"abc\"}"
    );
    assert_eq!(
        stream.render(&Token::new(TokenKind::Number(number), at)),
        "{kind: Number, line: 2, column: 5, literal: 123}"
    );
    assert_eq!(
        stream.render(&Token::new(TokenKind::LessEqual, at)),
        "{kind: LessEqual, line: 2, column: 5}"
    );
}

#[test]
fn literal_lookup_reads_the_same_tables() {
    let mut stream = TokenStream::new("");
    let ident = stream.intern_identifier("x");
    let string = stream.push_string("s");
    let number = stream.push_number(42);

    let lookup: &dyn LiteralLookup = &stream;
    assert_eq!(lookup.identifier(ident), "x");
    assert_eq!(lookup.string(string), "s");
    assert_eq!(lookup.number(number), 42);
}
