use super::*;
use crate::ast::{Expr, ExprKind, ExprTree};
use crate::token::{IdentId, Location};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Literals {
    strings: Vec<&'static str>,
    numbers: Vec<u64>,
}

impl LiteralLookup for Literals {
    fn identifier(&self, _id: IdentId) -> &str {
        unreachable!("printers never resolve identifiers")
    }

    fn string(&self, id: LiteralId) -> &str {
        self.strings[id.index()]
    }

    fn number(&self, id: LiteralId) -> u64 {
        self.numbers[id.index()]
    }
}

/// Builds `-(1 + "two") == nil` the way the parser would.
fn sample() -> (Ast, Literals) {
    let at = Location::START;
    let literals = Literals {
        strings: vec!["two"],
        numbers: vec![1],
    };

    let mut tree = ExprTree::new();
    let root = tree.push_root(Expr::new(ExprKind::Root, at));
    let neg = tree.push_child(root, Expr::new(ExprKind::Unary(UnaryOp::Neg), at));
    let paren = tree.push_child(neg, Expr::new(ExprKind::Paren, at));
    let one = tree.push_child(paren, Expr::new(ExprKind::Number(LiteralId::new(0)), at));
    let add = tree.push_child(paren, Expr::new(ExprKind::Binary(BinaryOp::Add), at));
    tree.make_parent(add, one);
    tree.push_child(add, Expr::new(ExprKind::String(LiteralId::new(0)), at));
    let eq = tree.push_child(root, Expr::new(ExprKind::Binary(BinaryOp::Eq), at));
    tree.make_parent(eq, neg);
    tree.push_child(eq, Expr::new(ExprKind::Nil, at));

    (Ast::new(tree, root, eq), literals)
}

#[test]
fn source_printer_renders_concrete_syntax() {
    let (ast, literals) = sample();
    assert_eq!(
        SourcePrinter::new(&literals).print(&ast),
        r#"-(1 + "two") == nil"#
    );
}

#[test]
fn sexp_printer_renders_prefix_form() {
    let (ast, literals) = sample();
    assert_eq!(
        SexpPrinter::new(&literals).print(&ast),
        r#"(== (- (group (+ 1 "two"))) nil)"#
    );
}

#[test]
fn sexp_printer_subtree() {
    let (ast, literals) = sample();
    let (lhs, _) = ast.binary_operands(ast.expr());
    assert_eq!(
        SexpPrinter::new(&literals).print_subtree(&ast, lhs),
        r#"(- (group (+ 1 "two")))"#
    );
}

#[test]
fn booleans() {
    let literals = Literals::default();
    let mut tree = ExprTree::new();
    let root = tree.push_root(Expr::new(ExprKind::Root, Location::START));
    let not = tree.push_child(root, Expr::new(ExprKind::Unary(UnaryOp::Not), Location::START));
    tree.push_child(not, Expr::new(ExprKind::Bool(false), Location::START));
    let ast = Ast::new(tree, root, not);

    assert_eq!(SourcePrinter::new(&literals).print(&ast), "!false");
    assert_eq!(SexpPrinter::new(&literals).print(&ast), "(! false)");
}
