//! Token catalogue for the loxt lexer.
//!
//! `TokenKind` carries payloads (interned identifier ids, literal ids);
//! `TokenTag` is its fieldless mirror, used wherever only the kind matters.

use std::fmt;

/// Position of a lexeme in the source.
///
/// `line` and `column` are 1-based and count characters; `offset` is the
/// 0-based byte offset of the lexeme's first byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Location {
    /// Start of any source: line 1, column 1, byte 0.
    pub const START: Location = Location {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Location {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Interned identifier. Equal spellings share one id within a token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct IdentId(u32);

impl IdentId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        IdentId(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Literal table entry. Each literal occurrence gets its own id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct LiteralId(u32);

impl LiteralId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        LiteralId(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Period,
    Minus,
    Plus,
    SemiColon,
    /// `/`. The kind names of this catalogue are a fixed external format.
    BackSlash,
    Asterisk,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier(IdentId),
    String(LiteralId),
    Number(LiteralId),

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// Lexical error; details live in the stream's error list.
    Error,
    Eof,
}

impl TokenKind {
    /// Reserved words and the kinds they lex to.
    pub const KEYWORDS: [(&'static str, TokenKind); 16] = [
        ("and", TokenKind::And),
        ("class", TokenKind::Class),
        ("else", TokenKind::Else),
        ("false", TokenKind::False),
        ("fun", TokenKind::Fun),
        ("for", TokenKind::For),
        ("if", TokenKind::If),
        ("nil", TokenKind::Nil),
        ("or", TokenKind::Or),
        ("print", TokenKind::Print),
        ("return", TokenKind::Return),
        ("super", TokenKind::Super),
        ("this", TokenKind::This),
        ("true", TokenKind::True),
        ("var", TokenKind::Var),
        ("while", TokenKind::While),
    ];

    pub const fn tag(self) -> TokenTag {
        match self {
            TokenKind::LeftParen => TokenTag::LeftParen,
            TokenKind::RightParen => TokenTag::RightParen,
            TokenKind::LeftBrace => TokenTag::LeftBrace,
            TokenKind::RightBrace => TokenTag::RightBrace,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Period => TokenTag::Period,
            TokenKind::Minus => TokenTag::Minus,
            TokenKind::Plus => TokenTag::Plus,
            TokenKind::SemiColon => TokenTag::SemiColon,
            TokenKind::BackSlash => TokenTag::BackSlash,
            TokenKind::Asterisk => TokenTag::Asterisk,
            TokenKind::Bang => TokenTag::Bang,
            TokenKind::BangEqual => TokenTag::BangEqual,
            TokenKind::Equal => TokenTag::Equal,
            TokenKind::EqualEqual => TokenTag::EqualEqual,
            TokenKind::Greater => TokenTag::Greater,
            TokenKind::GreaterEqual => TokenTag::GreaterEqual,
            TokenKind::Less => TokenTag::Less,
            TokenKind::LessEqual => TokenTag::LessEqual,
            TokenKind::Identifier(_) => TokenTag::Identifier,
            TokenKind::String(_) => TokenTag::String,
            TokenKind::Number(_) => TokenTag::Number,
            TokenKind::And => TokenTag::KwAnd,
            TokenKind::Class => TokenTag::KwClass,
            TokenKind::Else => TokenTag::KwElse,
            TokenKind::False => TokenTag::KwFalse,
            TokenKind::Fun => TokenTag::KwFun,
            TokenKind::For => TokenTag::KwFor,
            TokenKind::If => TokenTag::KwIf,
            TokenKind::Nil => TokenTag::KwNil,
            TokenKind::Or => TokenTag::KwOr,
            TokenKind::Print => TokenTag::KwPrint,
            TokenKind::Return => TokenTag::KwReturn,
            TokenKind::Super => TokenTag::KwSuper,
            TokenKind::This => TokenTag::KwThis,
            TokenKind::True => TokenTag::KwTrue,
            TokenKind::Var => TokenTag::KwVar,
            TokenKind::While => TokenTag::KwWhile,
            TokenKind::Error => TokenTag::Error,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    /// Kind name as used in token dumps (`"LeftParen"`, `"Number"`, ...).
    #[inline]
    pub const fn name(self) -> &'static str {
        self.tag().name()
    }

    /// Interned identifier, if this is an identifier token.
    pub const fn ident(self) -> Option<IdentId> {
        match self {
            TokenKind::Identifier(id) => Some(id),
            _ => None,
        }
    }

    /// Literal id, if this is a string or number token.
    pub const fn literal(self) -> Option<LiteralId> {
        match self {
            TokenKind::String(id) | TokenKind::Number(id) => Some(id),
            _ => None,
        }
    }
}

/// Fieldless discriminant of [`TokenKind`].
///
/// Grouped by category in contiguous ranges:
///
/// | Range | Category    |
/// |-------|-------------|
/// | 0-10  | Punctuation |
/// | 11-18 | Operators   |
/// | 19-21 | Literals    |
/// | 22-37 | Keywords    |
/// | 38-39 | Special     |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    // === Punctuation (0-10) ===
    LeftParen = 0,
    RightParen = 1,
    LeftBrace = 2,
    RightBrace = 3,
    Comma = 4,
    Period = 5,
    Minus = 6,
    Plus = 7,
    SemiColon = 8,
    BackSlash = 9,
    Asterisk = 10,

    // === Operators (11-18) ===
    Bang = 11,
    BangEqual = 12,
    Equal = 13,
    EqualEqual = 14,
    Greater = 15,
    GreaterEqual = 16,
    Less = 17,
    LessEqual = 18,

    // === Literals (19-21) ===
    Identifier = 19,
    String = 20,
    Number = 21,

    // === Keywords (22-37) ===
    KwAnd = 22,
    KwClass = 23,
    KwElse = 24,
    KwFalse = 25,
    KwFun = 26,
    KwFor = 27,
    KwIf = 28,
    KwNil = 29,
    KwOr = 30,
    KwPrint = 31,
    KwReturn = 32,
    KwSuper = 33,
    KwThis = 34,
    KwTrue = 35,
    KwVar = 36,
    KwWhile = 37,

    // === Special (38-39) ===
    Error = 38,
    Eof = 39,
}

impl TokenTag {
    /// Kind name used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::LeftBrace => "LeftBrace",
            Self::RightBrace => "RightBrace",
            Self::Comma => "Comma",
            Self::Period => "Period",
            Self::Minus => "Minus",
            Self::Plus => "Plus",
            Self::SemiColon => "SemiColon",
            Self::BackSlash => "BackSlash",
            Self::Asterisk => "Asterisk",
            Self::Bang => "Bang",
            Self::BangEqual => "BangEqual",
            Self::Equal => "Equal",
            Self::EqualEqual => "EqualEqual",
            Self::Greater => "Greater",
            Self::GreaterEqual => "GreaterEqual",
            Self::Less => "Less",
            Self::LessEqual => "LessEqual",
            Self::Identifier => "Identifier",
            Self::String => "String",
            Self::Number => "Number",
            Self::KwAnd => "And",
            Self::KwClass => "Class",
            Self::KwElse => "Else",
            Self::KwFalse => "False",
            Self::KwFun => "Fun",
            Self::KwFor => "For",
            Self::KwIf => "If",
            Self::KwNil => "Nil",
            Self::KwOr => "Or",
            Self::KwPrint => "Print",
            Self::KwReturn => "Return",
            Self::KwSuper => "Super",
            Self::KwThis => "This",
            Self::KwTrue => "True",
            Self::KwVar => "Var",
            Self::KwWhile => "While",
            Self::Error => "Error",
            Self::Eof => "Eof",
        }
    }

    /// Human-friendly description for error messages.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::Comma => "`,`",
            Self::Period => "`.`",
            Self::Minus => "`-`",
            Self::Plus => "`+`",
            Self::SemiColon => "`;`",
            Self::BackSlash => "`/`",
            Self::Asterisk => "`*`",
            Self::Bang => "`!`",
            Self::BangEqual => "`!=`",
            Self::Equal => "`=`",
            Self::EqualEqual => "`==`",
            Self::Greater => "`>`",
            Self::GreaterEqual => "`>=`",
            Self::Less => "`<`",
            Self::LessEqual => "`<=`",
            Self::Identifier => "identifier",
            Self::String => "string literal",
            Self::Number => "number literal",
            Self::KwAnd => "`and`",
            Self::KwClass => "`class`",
            Self::KwElse => "`else`",
            Self::KwFalse => "`false`",
            Self::KwFun => "`fun`",
            Self::KwFor => "`for`",
            Self::KwIf => "`if`",
            Self::KwNil => "`nil`",
            Self::KwOr => "`or`",
            Self::KwPrint => "`print`",
            Self::KwReturn => "`return`",
            Self::KwSuper => "`super`",
            Self::KwThis => "`this`",
            Self::KwTrue => "`true`",
            Self::KwVar => "`var`",
            Self::KwWhile => "`while`",
            Self::Error => "invalid token",
            Self::Eof => "end of input",
        }
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        let raw = self as u8;
        raw >= Self::KwAnd as u8 && raw <= Self::KwWhile as u8
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: kind (with payload) plus where it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub loc: Location,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, loc: Location) -> Self {
        Token { kind, loc }
    }

    #[inline]
    pub const fn tag(&self) -> TokenTag {
        self.kind.tag()
    }
}
