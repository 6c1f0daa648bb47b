//! Debug commands: `lex` and `parse` for inspecting one phase at a time.

use loxt_diagnostic::ColorMode;

use super::{read_file, report_diagnostics};
use crate::FrontEnd;

/// Lex a file and print the token stream.
///
/// Lexical errors are part of the listing; the exit code is 1 if there
/// were any.
pub fn lex_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    let front = FrontEnd::run(&content);
    print!("{}", front.token_listing());

    let lex_errors: Vec<_> = front
        .diagnostics
        .iter()
        .filter(|d| d.code.is_lexer_error())
        .cloned()
        .collect();
    if report_diagnostics(&lex_errors, &content, path, color) {
        std::process::exit(1);
    }
}

/// Parse a file and print its tree as an S-expression.
pub fn parse_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    let front = FrontEnd::run(&content);
    if let Some(sexp) = front.sexp() {
        println!("{sexp}");
    }
    if report_diagnostics(&front.diagnostics, &content, path, color) {
        std::process::exit(1);
    }
}
