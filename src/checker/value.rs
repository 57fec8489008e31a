use std::fmt::Display;

use crate::ast::ast::BinaryOperator;

/// Result of evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    /// Stands in for an identifier that no enclosing `let` binds. Absorbs
    /// every arithmetic operation it takes part in.
    Unknown,
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            Value::Unknown => None,
        }
    }

    /// Applies `operator` to `self` and `rhs`.
    ///
    /// Two integers stay an integer unless the result overflows `i64`, in
    /// which case it is computed as a float. Any float operand makes the
    /// result a float.
    pub fn apply(self, operator: BinaryOperator, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Unknown, _) | (_, Value::Unknown) => Value::Unknown,
            (Value::Int(left), Value::Int(right)) => {
                let exact = match operator {
                    BinaryOperator::Add => left.checked_add(right),
                    BinaryOperator::Mul => left.checked_mul(right),
                };
                match exact {
                    Some(value) => Value::Int(value),
                    None => Value::float_op(operator, left as f64, right as f64),
                }
            }
            (left, right) => match (left.as_f64(), right.as_f64()) {
                (Some(left), Some(right)) => Value::float_op(operator, left, right),
                _ => Value::Unknown,
            },
        }
    }

    fn float_op(operator: BinaryOperator, left: f64, right: f64) -> Value {
        match operator {
            BinaryOperator::Add => Value::Float(left + right),
            BinaryOperator::Mul => Value::Float(left * right),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{:?}", value),
            Value::Unknown => write!(f, "unknown"),
        }
    }
}
