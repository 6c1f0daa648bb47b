//! Expression grammar.
//!
//! ```text
//! expression -> equality
//! equality   -> comparison ( ( "!=" | "==" ) comparison )*
//! comparison -> term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       -> factor ( ( "-" | "+" ) factor )*
//! factor     -> unary ( ( "/" | "*" ) unary )*
//! unary      -> ( "!" | "-" ) unary | primary
//! primary    -> NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
//! ```
//!
//! Every rule takes the node its result hangs under and returns the node it
//! built. Binary levels build left-associative chains in place: the left
//! operand is parsed first as a child of `parent`, then, for each operator,
//! a new `Binary` node is pushed under `parent` and the left operand is
//! moved beneath it with `make_parent`.

mod operators;

use loxt_ir::{BinaryOp, Expr, ExprId, ExprKind, TokenKind, TokenTag};
use loxt_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{ParseError, ParseErrorKind, Parser};

/// A grammar rule that parses one operand under the given parent.
type Rule<'a> = fn(&mut Parser<'a>, ExprId) -> Result<ExprId, ParseError>;

impl<'a> Parser<'a> {
    /// Parse an expression as the next child of `parent`.
    pub(crate) fn expression(&mut self, parent: ExprId) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.equality(parent))
    }

    /// `==` `!=`
    fn equality(&mut self, parent: ExprId) -> Result<ExprId, ParseError> {
        let mut lhs = self.comparison(parent)?;
        while let Some(op) = self.match_equality_op() {
            lhs = self.fold_binary(parent, lhs, op, Self::comparison)?;
        }
        Ok(lhs)
    }

    /// `<` `<=` `>` `>=`
    fn comparison(&mut self, parent: ExprId) -> Result<ExprId, ParseError> {
        let mut lhs = self.term(parent)?;
        while let Some(op) = self.match_comparison_op() {
            lhs = self.fold_binary(parent, lhs, op, Self::term)?;
        }
        Ok(lhs)
    }

    /// `+` `-`
    fn term(&mut self, parent: ExprId) -> Result<ExprId, ParseError> {
        let mut lhs = self.factor(parent)?;
        while let Some(op) = self.match_additive_op() {
            lhs = self.fold_binary(parent, lhs, op, Self::factor)?;
        }
        Ok(lhs)
    }

    /// `*` `/`
    fn factor(&mut self, parent: ExprId) -> Result<ExprId, ParseError> {
        let mut lhs = self.unary(parent)?;
        while let Some(op) = self.match_multiplicative_op() {
            lhs = self.fold_binary(parent, lhs, op, Self::unary)?;
        }
        Ok(lhs)
    }

    /// Consume the operator at the cursor and make `lhs` the left operand of
    /// a new `Binary` node under `parent`. The right operand is parsed with
    /// `rhs` directly beneath the new node.
    fn fold_binary(
        &mut self,
        parent: ExprId,
        lhs: ExprId,
        op: BinaryOp,
        rhs: Rule<'a>,
    ) -> Result<ExprId, ParseError> {
        let loc = self.cursor.advance().loc;
        let binary = self
            .tree
            .push_child(parent, Expr::new(ExprKind::Binary(op), loc));
        self.tree.make_parent(binary, lhs);
        rhs(self, binary)?;
        Ok(binary)
    }

    /// `!` `-`, right-recursive.
    fn unary(&mut self, parent: ExprId) -> Result<ExprId, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.primary(parent);
        };
        let loc = self.cursor.advance().loc;
        let unary = self
            .tree
            .push_child(parent, Expr::new(ExprKind::Unary(op), loc));
        ensure_sufficient_stack(|| self.unary(unary))?;
        Ok(unary)
    }

    fn primary(&mut self, parent: ExprId) -> Result<ExprId, ParseError> {
        let token = *self.cursor.current();
        debug!(
            pos = self.cursor.position(),
            tag = %token.tag(),
            loc = %token.loc,
            "parse_primary"
        );

        let kind = match token.kind {
            TokenKind::Number(lit) => ExprKind::Number(lit),
            TokenKind::String(lit) => ExprKind::String(lit),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Nil => ExprKind::Nil,
            TokenKind::LeftParen => return self.group(parent),
            _ => return Err(self.error(ParseErrorKind::ExpectedExpression)),
        };
        self.cursor.advance();
        Ok(self.tree.push_child(parent, Expr::new(kind, token.loc)))
    }

    /// `( expression )`, kept in the tree as a `Paren` node.
    fn group(&mut self, parent: ExprId) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().loc;
        let paren = self
            .tree
            .push_child(parent, Expr::new(ExprKind::Paren, open));
        self.expression(paren)?;
        if !self.cursor.check(TokenTag::RightParen) {
            return Err(self.error(ParseErrorKind::UnclosedParen { open }));
        }
        self.cursor.advance();
        Ok(paren)
    }
}
