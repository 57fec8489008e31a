use std::fmt::{Display, Formatter, Result};

use super::ast::Expr;

const INDENT: usize = 2;

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // Walked with an explicit stack; folded operator chains can be far
        // deeper than the call stack allows.
        let mut pending = vec![(self, 0usize)];

        while let Some((expr, depth)) = pending.pop() {
            let pad = depth * INDENT;
            match expr {
                Expr::IntLiteral(value) => writeln!(f, "{:pad$}INTEGER LIT. <{}>", "", value)?,
                Expr::FloatLiteral(value) => writeln!(f, "{:pad$}FLOAT LIT. <{:.6}>", "", value)?,
                Expr::Identifier(name) => writeln!(f, "{:pad$}IDENTIFIER <{}>", "", name)?,
                Expr::Binary(binary) => {
                    writeln!(f, "{:pad$}BINARY OP. <{}>", "", binary.operator)?;
                    pending.push((binary.right.as_ref(), depth + 1));
                    pending.push((binary.left.as_ref(), depth + 1));
                }
                Expr::Let(let_expr) => {
                    writeln!(f, "{:pad$}LET <{}>", "", let_expr.name)?;
                    pending.push((let_expr.body.as_ref(), depth + 1));
                    pending.push((let_expr.init.as_ref(), depth + 1));
                }
            }
        }

        Ok(())
    }
}
