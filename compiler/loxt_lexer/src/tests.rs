#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use loxt_ir::{Location, TokenTag};
use pretty_assertions::assert_eq;

fn tags(source: &str) -> Vec<TokenTag> {
    lex(source).iter().map(Token::tag).collect()
}

fn locs(source: &str) -> Vec<(u32, u32)> {
    lex(source)
        .iter()
        .map(|t| (t.loc.line, t.loc.column))
        .collect()
}

// === Basic tokens ===

#[test]
fn empty_source_is_just_eof() {
    let stream = lex("");
    assert_eq!(stream.tokens(), &[Token::new(TokenKind::Eof, Location::START)]);
    assert!(!stream.has_error());
}

#[test]
fn arithmetic() {
    let stream = lex("1+2*3");
    assert_eq!(
        stream.iter().map(Token::tag).collect::<Vec<_>>(),
        [
            TokenTag::Number,
            TokenTag::Plus,
            TokenTag::Number,
            TokenTag::Asterisk,
            TokenTag::Number,
            TokenTag::Eof,
        ]
    );
    assert_eq!(locs("1+2*3"), [(1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6)]);
    let values: Vec<u64> = stream
        .iter()
        .filter_map(|t| t.kind.literal())
        .map(|id| stream.number_literal(id))
        .collect();
    assert_eq!(values, [1, 2, 3]);
}

#[test]
fn punctuation() {
    assert_eq!(
        tags("(){},.-+;/*"),
        [
            TokenTag::LeftParen,
            TokenTag::RightParen,
            TokenTag::LeftBrace,
            TokenTag::RightBrace,
            TokenTag::Comma,
            TokenTag::Period,
            TokenTag::Minus,
            TokenTag::Plus,
            TokenTag::SemiColon,
            TokenTag::BackSlash,
            TokenTag::Asterisk,
            TokenTag::Eof,
        ]
    );
}

#[test]
fn punctuation_kind_names() {
    let stream = lex(". ; * /");
    let rendered: Vec<_> = stream.iter().map(|t| stream.render(t)).collect();
    assert_eq!(
        rendered,
        [
            "{kind: Period, line: 1, column: 1}",
            "{kind: SemiColon, line: 1, column: 3}",
            "{kind: Asterisk, line: 1, column: 5}",
            "{kind: BackSlash, line: 1, column: 7}",
            "{kind: Eof, line: 1, column: 8}",
        ]
    );
}

#[test]
fn two_character_operators_are_greedy() {
    assert_eq!(
        tags("!= == <= >= ! = < >"),
        [
            TokenTag::BangEqual,
            TokenTag::EqualEqual,
            TokenTag::LessEqual,
            TokenTag::GreaterEqual,
            TokenTag::Bang,
            TokenTag::Equal,
            TokenTag::Less,
            TokenTag::Greater,
            TokenTag::Eof,
        ]
    );
    // `!==` is `!=` then `=`.
    assert_eq!(
        tags("!=="),
        [TokenTag::BangEqual, TokenTag::Equal, TokenTag::Eof]
    );
}

// === Comments and whitespace ===

#[test]
fn line_comment_produces_no_token() {
    let stream = lex("1 // two\n3");
    assert_eq!(
        stream.iter().map(Token::tag).collect::<Vec<_>>(),
        [TokenTag::Number, TokenTag::Number, TokenTag::Eof]
    );
    assert_eq!(stream.tokens()[1].loc, Location::new(2, 1, 9));
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(tags("// nothing here"), [TokenTag::Eof]);
}

#[test]
fn single_slash_is_division() {
    assert_eq!(
        tags("6 / 2"),
        [TokenTag::Number, TokenTag::BackSlash, TokenTag::Number, TokenTag::Eof]
    );
}

#[test]
fn newline_bumps_line_and_resets_column() {
    assert_eq!(locs("a\n  b\n\tc"), [(1, 1), (2, 3), (3, 2), (3, 3)]);
}

#[test]
fn crlf_is_whitespace() {
    let stream = lex("1\r\n2");
    assert!(!stream.has_error());
    assert_eq!(stream.tokens()[1].loc, Location::new(2, 1, 3));
}

#[test]
fn eof_after_trailing_newline() {
    let stream = lex("1\n");
    assert_eq!(stream.tokens().last().unwrap().loc, Location::new(2, 1, 2));
}

// === Literals ===

#[test]
fn string_body_excludes_quotes() {
    let stream = lex(r#""abc""#);
    let TokenKind::String(id) = stream.tokens()[0].kind else {
        panic!("expected string, got {:?}", stream.tokens()[0]);
    };
    assert_eq!(stream.string_literal(id), "abc");
}

#[test]
fn empty_string() {
    let stream = lex(r#""""#);
    let id = stream.tokens()[0].kind.literal().unwrap();
    assert_eq!(stream.string_literal(id), "");
}

#[test]
fn multiline_string_advances_location() {
    let stream = lex("\"a\nbc\" x");
    assert_eq!(stream.tokens()[0].loc, Location::new(1, 1, 0));
    assert_eq!(stream.tokens()[1].loc, Location::new(2, 5, 7));
}

#[test]
fn literals_are_not_deduplicated() {
    let stream = lex(r#"1 1 "s" "s""#);
    let ids: Vec<_> = stream.iter().filter_map(|t| t.kind.literal()).collect();
    assert_eq!(ids.len(), 4);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[2], ids[3]);
}

#[test]
fn largest_number_fits() {
    let stream = lex("18446744073709551615");
    let id = stream.tokens()[0].kind.literal().unwrap();
    assert_eq!(stream.number_literal(id), u64::MAX);
    assert!(!stream.has_error());
}

#[test]
fn number_overflow_is_an_error_token() {
    let stream = lex("18446744073709551616 7");
    assert_eq!(
        stream.iter().map(Token::tag).collect::<Vec<_>>(),
        [TokenTag::Error, TokenTag::Number, TokenTag::Eof]
    );
    assert_eq!(
        stream.errors(),
        &[LexError::new(LexErrorKind::IntOverflow, Location::START)]
    );
}

#[test]
fn digits_then_letters_split() {
    assert_eq!(
        tags("123abc"),
        [TokenTag::Number, TokenTag::Identifier, TokenTag::Eof]
    );
}

// === Identifiers and keywords ===

#[test]
fn identifiers_are_interned() {
    let stream = lex("foo bar foo");
    let ids: Vec<_> = stream.iter().filter_map(|t| t.kind.ident()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[0], ids[2]);
    assert_ne!(ids[0], ids[1]);
    assert_eq!(stream.identifier_count(), 2);
    assert_eq!(stream.identifier(ids[1]), "bar");
}

#[test]
fn keywords_carry_no_payload() {
    let stream = lex("and class else false fun for if nil or print return super this true var while");
    assert_eq!(stream.identifier_count(), 0);
    let kinds: Vec<_> = stream.iter().map(|t| t.kind).collect();
    let expected: Vec<_> = TokenKind::KEYWORDS
        .iter()
        .map(|&(_, kind)| kind)
        .chain([TokenKind::Eof])
        .collect();
    assert_eq!(kinds, expected);
}

#[test]
fn keyword_prefixes_are_identifiers() {
    assert_eq!(
        tags("classy _while or_else"),
        [
            TokenTag::Identifier,
            TokenTag::Identifier,
            TokenTag::Identifier,
            TokenTag::Eof,
        ]
    );
}

// === Errors ===

#[test]
fn unexpected_character_continues_scanning() {
    let stream = lex("1 # 2");
    assert_eq!(
        stream.iter().map(Token::tag).collect::<Vec<_>>(),
        [TokenTag::Number, TokenTag::Error, TokenTag::Number, TokenTag::Eof]
    );
    assert_eq!(stream.tokens()[1].loc, Location::new(1, 3, 2));
    assert_eq!(stream.tokens()[2].loc, Location::new(1, 5, 4));
    assert!(stream.has_error());
    assert_eq!(
        stream.errors(),
        &[LexError::new(
            LexErrorKind::UnexpectedChar('#'),
            Location::new(1, 3, 2)
        )]
    );
}

#[test]
fn each_bad_character_is_reported() {
    let stream = lex("@#$");
    assert_eq!(stream.errors().len(), 3);
    assert_eq!(locs("@#$"), [(1, 1), (1, 2), (1, 3), (1, 4)]);
}

#[test]
fn multibyte_unexpected_character() {
    let stream = lex("é+1");
    assert_eq!(
        stream.iter().map(Token::tag).collect::<Vec<_>>(),
        [TokenTag::Error, TokenTag::Plus, TokenTag::Number, TokenTag::Eof]
    );
    assert_eq!(stream.errors()[0].kind, LexErrorKind::UnexpectedChar('é'));
    assert_eq!(stream.tokens()[1].loc, Location::new(1, 2, 2));
}

#[test]
fn unterminated_string_stops_at_end_of_input() {
    let stream = lex("1 \"abc\n+ 2");
    assert_eq!(
        stream.iter().map(Token::tag).collect::<Vec<_>>(),
        [TokenTag::Number, TokenTag::Error, TokenTag::Eof]
    );
    assert_eq!(stream.tokens()[1].loc, Location::new(1, 3, 2));
    assert_eq!(stream.errors()[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(stream.tokens()[2].loc, Location::new(2, 4, 10));
}

#[test]
fn error_codes_and_diagnostics() {
    let stream = lex("# \"x");
    let codes: Vec<_> = stream.errors().iter().map(LexError::code).collect();
    assert_eq!(
        codes,
        [
            loxt_diagnostic::ErrorCode::E0002,
            loxt_diagnostic::ErrorCode::E0001
        ]
    );
    let diag = stream.errors()[1].to_diagnostic();
    assert_eq!(diag.primary_loc(), Some(Location::new(1, 3, 2)));
    assert_eq!(stream.errors()[0].to_string(), "1:1: unexpected character '#'");
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_lex {
    use super::super::lex;
    use loxt_ir::TokenKind;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn stream_always_ends_with_eof(source in any::<String>()) {
            let stream = lex(&source);
            let last = stream.tokens().last().copied();
            prop_assert_eq!(last.map(|t| t.kind), Some(TokenKind::Eof));
            prop_assert_eq!(
                stream.iter().filter(|t| t.kind == TokenKind::Eof).count(),
                1
            );
        }

        #[test]
        fn error_tokens_match_error_list(source in "[ -~\n\té]{0,64}") {
            let stream = lex(&source);
            let error_tokens: Vec<_> = stream
                .iter()
                .filter(|t| t.kind == TokenKind::Error)
                .map(|t| t.loc)
                .collect();
            let error_locs: Vec<_> = stream.errors().iter().map(|e| e.loc).collect();
            prop_assert_eq!(error_tokens, error_locs);
            prop_assert_eq!(stream.has_error(), !stream.errors().is_empty());
        }

        #[test]
        fn locations_increase(source in "[ -~\n]{0,64}") {
            let stream = lex(&source);
            for pair in stream.tokens().windows(2) {
                prop_assert!(pair[0].loc.offset < pair[1].loc.offset
                    || pair[1].kind == TokenKind::Eof);
                prop_assert!(pair[0].loc <= pair[1].loc);
            }
        }
    }
}
