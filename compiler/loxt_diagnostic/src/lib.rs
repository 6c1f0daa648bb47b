//! Diagnostics for the loxt front end.
//!
//! Every reportable problem carries:
//! - an error code, for searchability (`loxt explain E1002`)
//! - a one-line message saying what went wrong
//! - a primary label saying where, plus optional secondary labels
//! - optional notes
//!
//! Lexer and parser errors stay as typed enums inside their crates and are
//! converted to [`Diagnostic`]s only at the reporting boundary.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{
    expected_expression, integer_too_large, unclosed_delimiter, unexpected_character,
    unexpected_token, unterminated_string, Diagnostic, Label,
};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
