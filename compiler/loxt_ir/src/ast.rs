//! Expression AST.
//!
//! Expressions are nodes of an [`ExprTree`]; operands are children, in source
//! order. Every finished tree has the same shape at the top: a single
//! [`ExprKind::Root`] node whose only child is the parsed expression.
//!
//! Child counts per kind:
//!
//! | Kind      | Children          |
//! |-----------|-------------------|
//! | `Root`    | 1 (the expression) |
//! | `Binary`  | 2 (lhs, rhs)      |
//! | `Unary`   | 1 (operand)       |
//! | `Paren`   | 1 (inner)         |
//! | literals  | 0                 |

use std::fmt;

use crate::token::{LiteralId, Location};
use crate::tree::{NodeId, Tree};

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Equality
    Eq,
    NotEq,
    // Comparison
    Gt,
    GtEq,
    Lt,
    LtEq,
    // Arithmetic
    Sub,
    Add,
    Div,
    Mul,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Sub => "-",
            Self::Add => "+",
            Self::Div => "/",
            Self::Mul => "*",
        }
    }

    /// Binding tier; lower binds tighter.
    ///
    /// - 1: `*` `/`
    /// - 2: `+` `-`
    /// - 3: `<` `>` `<=` `>=`
    /// - 4: `==` `!=`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 1,
            Self::Add | Self::Sub => 2,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 3,
            Self::Eq | Self::NotEq => 4,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Unary (prefix) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical not: `!`
    Not,
    /// Negation: `-`
    Neg,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// What a node is. Operands are the node's children, not fields.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Synthetic top of every tree.
    Root,
    Binary(BinaryOp),
    /// Parenthesized group.
    Paren,
    Number(LiteralId),
    String(LiteralId),
    Bool(bool),
    Unary(UnaryOp),
    Nil,
}

/// Node payload: kind plus the location of the token that produced it.
///
/// For `Binary` and `Unary` that is the operator token, for `Paren` the
/// opening parenthesis.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub loc: Location,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, loc: Location) -> Self {
        Expr { kind, loc }
    }
}

pub type ExprTree = Tree<Expr>;
pub type ExprId = NodeId<Expr>;

/// A parsed expression: the tree plus its two fixed entry points.
#[derive(Clone, Debug)]
pub struct Ast {
    tree: ExprTree,
    root: ExprId,
    expr: ExprId,
}

impl Ast {
    /// Wrap a finished tree. `root` must be the tree's `Root` node and `expr`
    /// its only child.
    pub fn new(tree: ExprTree, root: ExprId, expr: ExprId) -> Self {
        debug_assert_eq!(tree.root(), Some(root));
        debug_assert_eq!(tree[root].kind, ExprKind::Root);
        debug_assert_eq!(tree.node(root).children(), &[expr]);
        Ast { tree, root, expr }
    }

    #[inline]
    pub fn root(&self) -> ExprId {
        self.root
    }

    /// The expression under `Root`.
    #[inline]
    pub fn expr(&self) -> ExprId {
        self.expr
    }

    #[inline]
    pub fn tree(&self) -> &ExprTree {
        &self.tree
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.tree[id]
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> ExprKind {
        self.tree[id].kind
    }

    #[inline]
    pub fn loc(&self, id: ExprId) -> Location {
        self.tree[id].loc
    }

    /// Number of nodes, `Root` included.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Always false: a finished tree holds at least `Root` and its child.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Left and right operands of a `Binary` node.
    ///
    /// # Panics
    /// If `id` does not have exactly two children.
    pub fn binary_operands(&self, id: ExprId) -> (ExprId, ExprId) {
        match self.tree.node(id).children() {
            &[lhs, rhs] => (lhs, rhs),
            other => panic!(
                "{:?} node {id:?} has {} children, expected 2",
                self.kind(id),
                other.len()
            ),
        }
    }

    /// Single child of a `Root`, `Unary` or `Paren` node.
    ///
    /// # Panics
    /// If `id` does not have exactly one child.
    pub fn operand(&self, id: ExprId) -> ExprId {
        match self.tree.node(id).children() {
            &[only] => only,
            other => panic!(
                "{:?} node {id:?} has {} children, expected 1",
                self.kind(id),
                other.len()
            ),
        }
    }
}
