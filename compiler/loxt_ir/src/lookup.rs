//! Literal resolution without a dependency on the lexer.

use crate::{IdentId, LiteralId};

/// Resolves the ids carried by tokens and AST nodes back to their values.
///
/// Implemented by the lexer's token stream. Printers and other AST
/// consumers accept any implementor, which keeps `loxt_ir` free of a
/// dependency on `loxt_lexer`.
pub trait LiteralLookup {
    /// Spelling of an interned identifier.
    fn identifier(&self, id: IdentId) -> &str;

    /// Contents of a string literal, quotes excluded.
    fn string(&self, id: LiteralId) -> &str;

    /// Value of an integer literal.
    fn number(&self, id: LiteralId) -> u64;
}
