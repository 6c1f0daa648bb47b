use std::fmt;

/// Error codes for every loxt diagnostic.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Character that starts no token
    E0002,
    /// Integer literal does not fit in 64 bits
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
        }
    }

    /// One-line explanation, suitable for `loxt explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E0003 => "integer literal too large",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Parse a code from its `E####` spelling.
    pub fn from_str_opt(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
