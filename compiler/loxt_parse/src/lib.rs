//! Precedence-climbing parser for loxt expressions.
//!
//! Builds an [`Ast`] whose tree has a synthetic `Root` node with exactly one
//! child: the parsed expression. Parsing stops at the first error.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use loxt_ir::{Ast, Expr, ExprKind, ExprTree};
use loxt_lexer::TokenStream;
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    tree: ExprTree,
}

impl<'a> Parser<'a> {
    /// Create a parser over a lexed stream.
    ///
    /// `Error` tokens are not skipped; the parser reports them as
    /// unexpected where an expression was required.
    pub fn new(tokens: &'a TokenStream<'_>) -> Self {
        Parser {
            cursor: Cursor::new(tokens.tokens()),
            tree: ExprTree::with_capacity(tokens.len() + 1),
        }
    }

    /// Parse one expression followed by end of input.
    ///
    /// # Errors
    /// The first [`ParseError`] encountered. No partial tree is returned.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(mut self) -> Result<Ast, ParseError> {
        let start = self.cursor.current_loc();
        let root = self.tree.push_root(Expr::new(ExprKind::Root, start));
        let expr = self.expression(root)?;
        if !self.cursor.is_at_end() {
            return Err(self.error(ParseErrorKind::ExpectedEndOfInput));
        }
        debug!(nodes = self.tree.len(), "parsed expression");
        Ok(Ast::new(self.tree, root, expr))
    }

    /// Error of `kind` at the current token.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        let token = self.cursor.current();
        ParseError::new(kind, token.tag(), token.loc)
    }
}

/// Parse a lexed stream into an [`Ast`].
///
/// # Errors
/// See [`Parser::parse`].
pub fn parse(tokens: &TokenStream<'_>) -> Result<Ast, ParseError> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests;
