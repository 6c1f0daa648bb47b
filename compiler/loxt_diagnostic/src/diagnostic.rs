use std::fmt;

use loxt_ir::Location;

use crate::ErrorCode;

/// A source location with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub loc: Location,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    /// The main error location.
    pub fn primary(loc: Location, message: impl Into<String>) -> Self {
        Label {
            loc,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Related context.
    pub fn secondary(loc: Location, message: impl Into<String>) -> Self {
        Label {
            loc,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A reportable problem: code, message, where it happened, and any notes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(mut self, loc: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(loc, message));
        self
    }

    pub fn with_secondary_label(mut self, loc: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(loc, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Location of the first primary label.
    pub fn primary_loc(&self) -> Option<Location> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.loc)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

// Constructors for the common cases, shared by the lexer and parser.

/// Create an "unterminated string" diagnostic.
pub fn unterminated_string(open: Location) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message("unterminated string literal")
        .with_label(open, "string starts here")
        .with_note("strings end at the next `\"`; none was found before end of input")
}

/// Create an "unexpected character" diagnostic.
pub fn unexpected_character(loc: Location, ch: char) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message(format!("unexpected character `{}`", ch.escape_debug()))
        .with_label(loc, "no token starts with this character")
}

/// Create an "integer literal too large" diagnostic.
pub fn integer_too_large(loc: Location) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0003)
        .with_message("integer literal is too large")
        .with_label(loc, "does not fit in 64 bits")
        .with_note(format!("the largest number literal is {}", u64::MAX))
}

/// Create an "unexpected token" diagnostic.
pub fn unexpected_token(loc: Location, expected: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("expected {expected}, found {found}"))
        .with_label(loc, format!("expected {expected}"))
}

/// Create an "expected expression" diagnostic.
pub fn expected_expression(loc: Location, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(format!("expected expression, found {found}"))
        .with_label(loc, "expected expression here")
}

/// Create an "unclosed delimiter" diagnostic for a `(` left open at `open`.
///
/// Parentheses are the only delimiter the grammar has.
pub fn unclosed_delimiter(open: Location, close: Location) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1003)
        .with_message("unclosed delimiter `(`")
        .with_label(close, "expected `)`")
        .with_secondary_label(open, "unclosed delimiter opened here")
}

#[cfg(test)]
mod tests;
