//! Terminal Emitter
//!
//! Human-readable diagnostic output with source snippets and optional ANSI
//! color.

use std::io::{self, Write};

use loxt_ir::Location;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter for diagnostics against one source file.
///
/// Output shape:
///
/// ```text
/// error[E1003]: unclosed delimiter `(`
///  --> demo.lox:1:7
///   |
/// 1 | (1 + 2
///   |       ^ expected `)`
/// 1 | (1 + 2
///   | - unclosed delimiter opened here
///
/// ```
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: &'src str,
    path: &'src str,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create an emitter writing to `writer`.
    ///
    /// `is_tty` says whether `writer` is a terminal; it decides color under
    /// [`ColorMode::Auto`].
    pub fn with_color_mode(
        writer: W,
        mode: ColorMode,
        is_tty: bool,
        source: &'src str,
        path: &'src str,
    ) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source,
            path,
        }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_bold(&mut self, text: &str) {
        self.write_colored(text, colors::BOLD);
    }

    /// Text of a 1-based line, without its terminator. Lines past the end
    /// (an end-of-input location after a trailing newline) are empty.
    fn line_text(&self, line: u32) -> &'src str {
        let index = (line as usize).saturating_sub(1);
        self.source.lines().nth(index).unwrap_or("")
    }

    fn write_snippet(&mut self, label: &Label, gutter: usize) {
        let text = self.line_text(label.loc.line);
        let number = label.loc.line.to_string();
        let _ = writeln!(self.writer, "{number:>gutter$} | {text}");

        // Mirror tabs so the marker lines up under the column.
        let pad: String = text
            .chars()
            .take((label.loc.column as usize).saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let _ = write!(self.writer, "{:gutter$} | {pad}", "");

        let (marker, color) = if label.is_primary {
            ('^', colors::ERROR)
        } else {
            ('-', colors::SECONDARY)
        };
        let marked = format!("{marker} {}", label.message);
        self.write_colored(&marked, color);
        let _ = writeln!(self.writer);
    }
}

/// Width of the line-number gutter for the given labels.
fn gutter_width(labels: &[Label]) -> usize {
    labels
        .iter()
        .map(|l| l.loc.line.to_string().len())
        .max()
        .unwrap_or(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        let code = format!("[{}]", diagnostic.code);
        self.write_bold(&code);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let gutter = gutter_width(&diagnostic.labels);
        if let Some(Location { line, column, .. }) = diagnostic
            .primary_loc()
            .or_else(|| diagnostic.labels.first().map(|l| l.loc))
        {
            let _ = writeln!(
                self.writer,
                "{:gutter$}--> {}:{line}:{column}",
                "", self.path
            );
            let _ = writeln!(self.writer, "{:gutter$} |", "");
        }

        for label in &diagnostic.labels {
            self.write_snippet(label, gutter);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "{:gutter$} = ", "");
            self.write_bold("note");
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(self.writer, ": aborting due to {error_count} previous errors");
        }
    }
}

impl<'src> TerminalEmitter<'src, io::Stderr> {
    /// Emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool, source: &'src str, path: &'src str) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty, source, path)
    }
}
