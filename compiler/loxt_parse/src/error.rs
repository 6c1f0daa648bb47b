//! Parse errors.

use loxt_diagnostic::{
    expected_expression, unclosed_delimiter, unexpected_token, Diagnostic, ErrorCode,
};
use loxt_ir::{Location, TokenTag};
use thiserror::Error;

/// What the parser was unable to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A primary expression was required but the current token cannot
    /// start one.
    #[error("expected expression")]
    ExpectedExpression,
    /// A `(` was never matched by a `)`.
    #[error("expected `)` to close `(` at {open}")]
    UnclosedParen { open: Location },
    /// A complete expression was followed by more tokens.
    #[error("expected end of input")]
    ExpectedEndOfInput,
}

/// The first error the parser hit. Parsing stops there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{loc}: {kind}, found {}", .found.describe())]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Kind of the offending token.
    pub found: TokenTag,
    /// Location of the offending token.
    pub loc: Location,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, found: TokenTag, loc: Location) -> Self {
        ParseError { kind, found, loc }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
            ParseErrorKind::UnclosedParen { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedEndOfInput => ErrorCode::E1001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let found = self.found.describe();
        match self.kind {
            ParseErrorKind::ExpectedExpression => expected_expression(self.loc, found),
            ParseErrorKind::UnclosedParen { open } => unclosed_delimiter(open, self.loc),
            ParseErrorKind::ExpectedEndOfInput => {
                unexpected_token(self.loc, "end of input", found)
            }
        }
    }
}
