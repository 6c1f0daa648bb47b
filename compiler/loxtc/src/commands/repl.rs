//! Interactive prompt.

use std::io::{self, BufRead, Write};

use loxt_diagnostic::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::FrontEnd;

pub const PROMPT: &str = "loxt> ";

/// Read lines from `input` until it ends, lexing and parsing each one.
///
/// For every line the token listing is written to `output`, followed by
/// the tree or the line's diagnostics. Errors never end the session.
///
/// # Errors
/// Only I/O errors on `input` or `output`.
pub fn run_repl<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    color: ColorMode,
    is_tty: bool,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        let source = line.trim_end_matches(['\n', '\r']);

        let front = FrontEnd::run(source);
        write!(output, "{}", front.token_listing())?;
        if let Some(sexp) = front.sexp() {
            writeln!(output, "{sexp}")?;
        }
        if front.has_errors() {
            let mut emitter =
                TerminalEmitter::with_color_mode(&mut output, color, is_tty, source, "<repl>");
            emitter.emit_all(&front.diagnostics);
            emitter.flush();
        }
    }
}
