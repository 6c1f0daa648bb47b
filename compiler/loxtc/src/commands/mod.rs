//! Command handlers for the `loxt` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading input
//! and reporting diagnostics live here.

use std::io::IsTerminal;

use loxt_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter, TerminalEmitter};

mod debug;
mod explain;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::{explain_error, explanation};
pub use repl::{run_repl, PROMPT};
pub use run::run_file;

/// Read a source file, or exit with a message.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Render `diagnostics` on stderr followed by the summary line.
///
/// Returns true if anything was reported.
pub(crate) fn report_diagnostics(
    diagnostics: &[Diagnostic],
    source: &str,
    path: &str,
    color: ColorMode,
) -> bool {
    if diagnostics.is_empty() {
        return false;
    }
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(color, is_tty, source, path);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
    true
}
