//! Error types and error handling for the parser and checker.
//!
//! This module defines the error types shared by every phase. It includes:
//!
//! - Error structures with source position information
//! - Error variants for lexing, parsing and checking
//! - Helpful error messages and suggestions

pub mod errors;
