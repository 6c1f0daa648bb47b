//! Raw scanning layer.
//!
//! `logos` recognizes lexeme boundaries only. Interning, keyword
//! resolution, literal parsing and locations are attached later by the
//! cooking loop in `lex`.

use logos::Logos;

/// Raw token from logos, before cooking.
///
/// Longest match gives the greedy two-character operators (`!=` over `!`)
/// and makes `//` a comment rather than two slashes.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Period,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    SemiColon,
    #[token("/")]
    BackSlash,
    #[token("*")]
    Asterisk,

    #[token("!=")]
    BangEqual,
    #[token("!")]
    Bang,
    #[token("==")]
    EqualEqual,
    #[token("=")]
    Equal,
    #[token(">=")]
    GreaterEqual,
    #[token(">")]
    Greater,
    #[token("<=")]
    LessEqual,
    #[token("<")]
    Less,

    /// Decimal digits only; the value is parsed while cooking so overflow
    /// can be reported instead of silently dropped.
    #[regex(r"[0-9]+")]
    Number,

    /// May span lines.
    #[regex(r#""[^"]*""#)]
    String,

    /// Opening quote with no closing quote before end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    /// Identifier or keyword; resolved by `keywords::lookup`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
}
