//! One pass of the front end over a source text.

use std::fmt::Write as _;

use loxt_diagnostic::Diagnostic;
use loxt_ir::{Ast, SexpPrinter, SourcePrinter};
use loxt_lexer::{lex, LexError, TokenStream};
use loxt_parse::parse;
use tracing::debug;

/// Tokens, tree and diagnostics for one source text.
///
/// The parser only runs over a clean token stream: when the lexer reports
/// anything, `ast` is `None` and the lexical diagnostics are all that is
/// reported.
pub struct FrontEnd<'src> {
    pub tokens: TokenStream<'src>,
    pub ast: Option<Ast>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'src> FrontEnd<'src> {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(source: &'src str) -> Self {
        let tokens = lex(source);
        let mut diagnostics: Vec<Diagnostic> =
            tokens.errors().iter().map(LexError::to_diagnostic).collect();

        let ast = if diagnostics.is_empty() {
            match parse(&tokens) {
                Ok(ast) => Some(ast),
                Err(err) => {
                    diagnostics.push(err.to_diagnostic());
                    None
                }
            }
        } else {
            None
        };

        debug!(
            diagnostics = diagnostics.len(),
            parsed = ast.is_some(),
            "front end finished"
        );
        FrontEnd {
            tokens,
            ast,
            diagnostics,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// One rendered token per line, then the lexer's error flag as `0` or `1`.
    pub fn token_listing(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&self.tokens.render(token));
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", u8::from(self.tokens.has_error()));
        out
    }

    /// The tree as an S-expression, if parsing succeeded.
    pub fn sexp(&self) -> Option<String> {
        let ast = self.ast.as_ref()?;
        Some(SexpPrinter::new(&self.tokens).print(ast))
    }

    /// The tree printed back as source text, if parsing succeeded.
    pub fn source_text(&self) -> Option<String> {
        let ast = self.ast.as_ref()?;
        Some(SourcePrinter::new(&self.tokens).print(ast))
    }
}
