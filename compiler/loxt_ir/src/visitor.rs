//! AST visitor.
//!
//! `visit_expr` reads a node's kind and dispatches to the matching
//! `visit_*` method with the node's operands already resolved. Each
//! `visit_*` method defaults to a `walk_*` function that visits the
//! children in source order; override the methods you care about and call
//! the `walk_*` function to keep descending.
//!
//! The dispatch `match` is exhaustive, so adding an [`ExprKind`] variant
//! fails to compile until every visitor handles it.
//!
//! # Example
//!
//! ```text
//! struct CountNumbers(usize);
//!
//! impl<'ast> Visitor<'ast> for CountNumbers {
//!     fn visit_number(&mut self, _ast: &'ast Ast, _id: ExprId, _lit: LiteralId) {
//!         self.0 += 1;
//!     }
//! }
//! ```

use loxt_stack::ensure_sufficient_stack;

use crate::ast::{Ast, BinaryOp, ExprId, ExprKind, UnaryOp};
use crate::token::LiteralId;

/// AST visitor trait.
///
/// The visitor may mutate its own state; the AST stays immutable.
pub trait Visitor<'ast> {
    /// Visit any node, dispatching on its kind.
    fn visit_expr(&mut self, ast: &'ast Ast, id: ExprId) {
        walk_expr(self, ast, id);
    }

    fn visit_root(&mut self, ast: &'ast Ast, id: ExprId, expr: ExprId) {
        walk_root(self, ast, id, expr);
    }

    fn visit_binary(&mut self, ast: &'ast Ast, id: ExprId, op: BinaryOp, lhs: ExprId, rhs: ExprId) {
        walk_binary(self, ast, id, op, lhs, rhs);
    }

    fn visit_paren(&mut self, ast: &'ast Ast, id: ExprId, inner: ExprId) {
        walk_paren(self, ast, id, inner);
    }

    fn visit_unary(&mut self, ast: &'ast Ast, id: ExprId, op: UnaryOp, operand: ExprId) {
        walk_unary(self, ast, id, op, operand);
    }

    fn visit_number(&mut self, _ast: &'ast Ast, _id: ExprId, _lit: LiteralId) {}

    fn visit_string(&mut self, _ast: &'ast Ast, _id: ExprId, _lit: LiteralId) {}

    fn visit_bool(&mut self, _ast: &'ast Ast, _id: ExprId, _value: bool) {}

    fn visit_nil(&mut self, _ast: &'ast Ast, _id: ExprId) {}
}

/// Dispatch on the node's kind. Grows the stack on demand, so nesting depth
/// is bounded by memory rather than the native stack.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, ast: &'ast Ast, id: ExprId) {
    ensure_sufficient_stack(|| match ast.kind(id) {
        ExprKind::Root => visitor.visit_root(ast, id, ast.operand(id)),
        ExprKind::Binary(op) => {
            let (lhs, rhs) = ast.binary_operands(id);
            visitor.visit_binary(ast, id, op, lhs, rhs);
        }
        ExprKind::Paren => visitor.visit_paren(ast, id, ast.operand(id)),
        ExprKind::Unary(op) => visitor.visit_unary(ast, id, op, ast.operand(id)),
        ExprKind::Number(lit) => visitor.visit_number(ast, id, lit),
        ExprKind::String(lit) => visitor.visit_string(ast, id, lit),
        ExprKind::Bool(value) => visitor.visit_bool(ast, id, value),
        ExprKind::Nil => visitor.visit_nil(ast, id),
    });
}

pub fn walk_root<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    ast: &'ast Ast,
    _id: ExprId,
    expr: ExprId,
) {
    visitor.visit_expr(ast, expr);
}

pub fn walk_binary<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    ast: &'ast Ast,
    _id: ExprId,
    _op: BinaryOp,
    lhs: ExprId,
    rhs: ExprId,
) {
    visitor.visit_expr(ast, lhs);
    visitor.visit_expr(ast, rhs);
}

pub fn walk_paren<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    ast: &'ast Ast,
    _id: ExprId,
    inner: ExprId,
) {
    visitor.visit_expr(ast, inner);
}

pub fn walk_unary<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    ast: &'ast Ast,
    _id: ExprId,
    _op: UnaryOp,
    operand: ExprId,
) {
    visitor.visit_expr(ast, operand);
}
