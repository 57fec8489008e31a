//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts expression text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of the `let`/`in` keywords, identifiers and numeric literals
//! - Token position tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;
