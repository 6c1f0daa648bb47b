//! The default command: lex and parse a file, printing both results.

use loxt_diagnostic::ColorMode;

use super::{read_file, report_diagnostics};
use crate::FrontEnd;

/// Print the token listing, then the tree if the file parsed.
pub fn run_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    let front = FrontEnd::run(&content);
    print!("{}", front.token_listing());
    if let Some(sexp) = front.sexp() {
        println!("{sexp}");
    }
    if report_diagnostics(&front.diagnostics, &content, path, color) {
        std::process::exit(1);
    }
}
