//! loxt IR - the data structures shared by every front-end phase.
//!
//! - [`tree`]: a generic arena tree with stable [`NodeId`]s and subtree
//!   reparenting
//! - [`token`]: source locations, interned ids and the closed token catalogue
//! - [`ast`]: the expression payload stored in the tree, plus [`Ast`]
//! - [`visitor`]: closed-variant traversal over an [`Ast`]
//! - [`printer`]: visitor-based renderers (source text and S-expressions)
//!
//! # Design
//!
//! - **Index, don't point**: tree nodes are referenced by `NodeId<T>`, a typed
//!   `u32` index, so references survive reparenting and growth.
//! - **Append only**: nothing is ever removed from a tree; the whole tree is
//!   dropped at once.
//! - **Closed sums**: token kinds and expression kinds are enums matched
//!   exhaustively at every consumer.

pub mod ast;
mod lookup;
pub mod printer;
pub mod token;
pub mod tree;
pub mod visitor;

pub use ast::{Ast, BinaryOp, Expr, ExprId, ExprKind, ExprTree, UnaryOp};
pub use lookup::LiteralLookup;
pub use printer::{SexpPrinter, SourcePrinter};
pub use token::{IdentId, LiteralId, Location, Token, TokenKind, TokenTag};
pub use tree::{Node, NodeId, Tree, TreeShapeError};
pub use visitor::Visitor;
