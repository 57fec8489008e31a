//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a single expression tree. It is a predictive LL(1)
//! parser over a grammar with left recursion already eliminated:
//!
//! - `parser`: token cursor, syntax error construction, entry points
//! - `expr`: one function per non-terminal
//!
//! The first syntax error aborts the parse; there is no recovery.

pub mod expr;
pub mod parser;

#[cfg(test)]
mod tests;
