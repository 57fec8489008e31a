use super::ast::{BinaryOperator, Expr};

/// Binary Expression
/// `left operator right`, where left-associative chains nest on the left.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Let Expression
/// `let name = init in body`.
///
/// `init` is evaluated in the enclosing scope; `name` is only visible inside
/// `body`, where it shadows any outer binding of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct LetExpr {
    pub name: String,
    pub init: Box<Expr>,
    pub body: Box<Expr>,
}
