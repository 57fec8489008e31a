//! Semantic checking module.
//!
//! This module resolves identifiers against their enclosing `let` bindings
//! and evaluates the expression at the same time. It produces a verdict
//! (whether every identifier resolved) alongside the numeric value.
//!
//! The checker maintains a scope stack that mirrors `let` nesting: an entry is
//! pushed for each `let` body and popped when the body has been checked.

pub mod checker;
pub mod scope;
pub mod value;
