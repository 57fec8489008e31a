use std::{fmt::Display, mem};

use super::expressions::{BinaryExpr, LetExpr};

/// Binary operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Mul,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "ADD"),
            BinaryOperator::Mul => write!(f, "MUL"),
        }
    }
}

/// Expression
///
/// Every node of the tree. The parser is the only producer; consumers match
/// on the variants directly. Children are owned, so the tree has no sharing
/// and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral(i64),
    FloatLiteral(f64),
    /// A reference to a `let`-bound name. Carries no value; it is resolved by
    /// the checker.
    Identifier(String),
    Binary(BinaryExpr),
    Let(LetExpr),
}

impl Expr {
    pub fn int(value: i64) -> Self {
        Expr::IntLiteral(value)
    }

    pub fn float(value: f64) -> Self {
        debug_assert!(value.is_finite(), "float literal must be finite");
        Expr::FloatLiteral(value)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "identifier must not be empty");
        Expr::Identifier(name)
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOperator::Add, left, right)
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOperator::Mul, left, right)
    }

    pub fn let_binding(name: impl Into<String>, init: Expr, body: Expr) -> Self {
        Expr::Let(LetExpr {
            name: name.into(),
            init: Box::new(init),
            body: Box::new(body),
        })
    }

    fn is_compound(&self) -> bool {
        matches!(self, Expr::Binary(_) | Expr::Let(_))
    }

    /// Moves compound children out into `into`, leaving literals behind.
    fn detach_children(&mut self, into: &mut Vec<Expr>) {
        let (first, second) = match self {
            Expr::Binary(binary) => (&mut binary.left, &mut binary.right),
            Expr::Let(let_expr) => (&mut let_expr.init, &mut let_expr.body),
            _ => return,
        };

        for child in [first, second] {
            if child.is_compound() {
                into.push(mem::replace(child.as_mut(), Expr::IntLiteral(0)));
            }
        }
    }
}

// Left-folded chains are as deep as they are long; dropping them through
// nested `Box` destructors would recurse once per node.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}
