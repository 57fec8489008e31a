//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct: the token cursor, the
//! expectation helpers that turn grammar violations into syntax errors, the
//! nesting guard, and the `parse` entry points. The productions themselves
//! live in `expr.rs`.

use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenSet},
    Position,
};

use super::expr::parse_s;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of nested parenthesised or `let` expressions.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions { max_depth: 256 }
    }
}

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream and a cursor into it. There is exactly one token
/// of lookahead: `current_token`. Running past the last token is not an
/// error by itself; it is reported as end-of-stream by whichever production
/// needed another token.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source being parsed
    file: Rc<String>,
    options: ParserOptions,
    /// Current nesting depth of parenthesised and `let` expressions
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>, options: ParserOptions) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            options,
            depth: 0,
        }
    }

    /// Returns the current token without advancing, or `None` at end of stream.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Advances to the next token and returns the consumed one.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes a token of the given kind.
    ///
    /// # Returns
    ///
    /// The consumed token, or a syntax error naming `expected_kind` and what
    /// was found instead (a token kind or the end of the stream).
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() == Some(expected_kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }

        Err(self.unexpected(&[expected_kind]))
    }

    /// Builds the syntax error for the current lookahead when none of
    /// `expected` matched.
    pub fn unexpected(&self, expected: &[TokenKind]) -> Error {
        let expected = TokenSet::of(expected);
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    found: token.kind,
                },
                token.span.start.clone(),
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEndOfStream { expected },
                self.get_position(),
            ),
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Enters one level of nesting, failing once the configured limit is passed.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.options.max_depth,
                },
                self.get_position(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth -= 1;
    }

    /// Returns the current position in the source.
    ///
    /// At end of stream this is the end of the last token, so diagnostics
    /// point just past the input.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start.clone(),
            None => match self.tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Rc::clone(&self.file)),
            },
        }
    }
}

/// Parses a token stream into a single expression with default options.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source name
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, Error> {
    parse_with_options(tokens, file, ParserOptions::default())
}

/// Parses a token stream into a single expression.
///
/// The whole stream must form exactly one expression: an empty stream or
/// leftover tokens are syntax errors. The first error aborts the parse.
pub fn parse_with_options(
    tokens: Vec<Token>,
    file: Rc<String>,
    options: ParserOptions,
) -> Result<Expr, Error> {
    debug!(tokens = tokens.len(), max_depth = options.max_depth, "parsing");
    let mut parser = Parser::new(tokens, file, options);
    parse_s(&mut parser)
}
