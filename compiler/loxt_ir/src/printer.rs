//! Renderers built on [`Visitor`].
//!
//! [`SourcePrinter`] writes concrete syntax that lexes and parses back to the
//! same tree shape. [`SexpPrinter`] writes a fully parenthesized prefix form
//! for debugging and test expectations.

use crate::ast::{Ast, BinaryOp, ExprId, UnaryOp};
use crate::lookup::LiteralLookup;
use crate::token::LiteralId;
use crate::visitor::Visitor;

/// Renders an AST back to loxt source.
///
/// Parenthesized groups are kept as written; no other parentheses are added.
pub struct SourcePrinter<'l, L: LiteralLookup + ?Sized> {
    lookup: &'l L,
    out: String,
}

impl<'l, L: LiteralLookup + ?Sized> SourcePrinter<'l, L> {
    pub fn new(lookup: &'l L) -> Self {
        SourcePrinter {
            lookup,
            out: String::new(),
        }
    }

    /// Render the expression under the root.
    pub fn print(mut self, ast: &Ast) -> String {
        self.visit_expr(ast, ast.root());
        self.out
    }
}

impl<'ast, L: LiteralLookup + ?Sized> Visitor<'ast> for SourcePrinter<'_, L> {
    fn visit_binary(&mut self, ast: &'ast Ast, _id: ExprId, op: BinaryOp, lhs: ExprId, rhs: ExprId) {
        self.visit_expr(ast, lhs);
        self.out.push(' ');
        self.out.push_str(op.as_symbol());
        self.out.push(' ');
        self.visit_expr(ast, rhs);
    }

    fn visit_paren(&mut self, ast: &'ast Ast, _id: ExprId, inner: ExprId) {
        self.out.push('(');
        self.visit_expr(ast, inner);
        self.out.push(')');
    }

    fn visit_unary(&mut self, ast: &'ast Ast, _id: ExprId, op: UnaryOp, operand: ExprId) {
        self.out.push_str(op.as_symbol());
        self.visit_expr(ast, operand);
    }

    fn visit_number(&mut self, _ast: &'ast Ast, _id: ExprId, lit: LiteralId) {
        self.out.push_str(&self.lookup.number(lit).to_string());
    }

    fn visit_string(&mut self, _ast: &'ast Ast, _id: ExprId, lit: LiteralId) {
        self.out.push('"');
        self.out.push_str(self.lookup.string(lit));
        self.out.push('"');
    }

    fn visit_bool(&mut self, _ast: &'ast Ast, _id: ExprId, value: bool) {
        self.out.push_str(if value { "true" } else { "false" });
    }

    fn visit_nil(&mut self, _ast: &'ast Ast, _id: ExprId) {
        self.out.push_str("nil");
    }
}

/// Renders an AST as S-expressions: `(+ 1 (* 2 3))`, `(group x)`, `(- x)`.
///
/// The root itself is not printed.
pub struct SexpPrinter<'l, L: LiteralLookup + ?Sized> {
    lookup: &'l L,
    out: String,
}

impl<'l, L: LiteralLookup + ?Sized> SexpPrinter<'l, L> {
    pub fn new(lookup: &'l L) -> Self {
        SexpPrinter {
            lookup,
            out: String::new(),
        }
    }

    pub fn print(mut self, ast: &Ast) -> String {
        self.visit_expr(ast, ast.root());
        self.out
    }

    /// Render the subtree rooted at `id`.
    pub fn print_subtree(mut self, ast: &Ast, id: ExprId) -> String {
        self.visit_expr(ast, id);
        self.out
    }

    fn list(&mut self, head: &str, ast: &Ast, items: &[ExprId]) {
        self.out.push('(');
        self.out.push_str(head);
        for &item in items {
            self.out.push(' ');
            self.visit_expr(ast, item);
        }
        self.out.push(')');
    }
}

impl<'ast, L: LiteralLookup + ?Sized> Visitor<'ast> for SexpPrinter<'_, L> {
    fn visit_binary(&mut self, ast: &'ast Ast, _id: ExprId, op: BinaryOp, lhs: ExprId, rhs: ExprId) {
        self.list(op.as_symbol(), ast, &[lhs, rhs]);
    }

    fn visit_paren(&mut self, ast: &'ast Ast, _id: ExprId, inner: ExprId) {
        self.list("group", ast, &[inner]);
    }

    fn visit_unary(&mut self, ast: &'ast Ast, _id: ExprId, op: UnaryOp, operand: ExprId) {
        self.list(op.as_symbol(), ast, &[operand]);
    }

    fn visit_number(&mut self, _ast: &'ast Ast, _id: ExprId, lit: LiteralId) {
        self.out.push_str(&self.lookup.number(lit).to_string());
    }

    fn visit_string(&mut self, _ast: &'ast Ast, _id: ExprId, lit: LiteralId) {
        self.out.push('"');
        self.out.push_str(self.lookup.string(lit));
        self.out.push('"');
    }

    fn visit_bool(&mut self, _ast: &'ast Ast, _id: ExprId, value: bool) {
        self.out.push_str(if value { "true" } else { "false" });
    }

    fn visit_nil(&mut self, _ast: &'ast Ast, _id: ExprId) {
        self.out.push_str("nil");
    }
}

#[cfg(test)]
mod tests;
