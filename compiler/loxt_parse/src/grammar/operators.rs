//! Operator matching helpers.
//!
//! Each helper looks at the current token without consuming it.

use loxt_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::EqualEqual => Some(BinaryOp::Eq),
            TokenKind::BangEqual => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Greater => Some(BinaryOp::Gt),
            TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
            TokenKind::Less => Some(BinaryOp::Lt),
            TokenKind::LessEqual => Some(BinaryOp::LtEq),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Plus => Some(BinaryOp::Add),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::BackSlash => Some(BinaryOp::Div),
            TokenKind::Asterisk => Some(BinaryOp::Mul),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}
