//! Productions of the expression grammar.
//!
//! ```text
//! S   -> E
//! E   -> T E'
//! E'  -> PLUS T E'  |  ε
//! T   -> F T'
//! T'  -> STAR F T'  |  ε
//! F   -> LPAREN E RPAREN | INT_LIT | FLOAT_LIT | IDENTIFIER
//!      | LET IDENTIFIER EQUALS E IN E
//! ```
//!
//! Each non-terminal is one function that branches on the current token
//! only. The tail productions `E'` and `T'` are unrolled into loops that fold
//! each new operand onto the operand accumulated so far, which keeps `+` and
//! `*` left-associative.

use tracing::trace;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// Tokens that can start an `E`, `T` or `F`.
pub const EXPR_START: [TokenKind; 5] = [
    TokenKind::OpenParen,
    TokenKind::IntLit,
    TokenKind::FloatLit,
    TokenKind::Identifier,
    TokenKind::Let,
];

/// Tokens that could continue an `E` whose tails `T'` and `E'` chose ε.
pub const TAIL_START: [TokenKind; 2] = [TokenKind::Star, TokenKind::Plus];

pub fn parse_s(parser: &mut Parser) -> Result<Expr, Error> {
    if !parser.has_tokens() {
        return Err(parser.unexpected(&EXPR_START));
    }

    let expr = parse_e(parser)?;

    if let Some(token) = parser.current_token() {
        return Err(Error::new(
            ErrorImpl::TrailingInput { found: token.kind },
            token.span.start.clone(),
        ));
    }

    Ok(expr)
}

pub fn parse_e(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_t(parser)?;
    parse_e_tail(parser, left)
}

/// `E' -> PLUS T E' | ε`, folding onto `left`.
///
/// Any token other than `PLUS` selects ε; whoever needs the next terminal
/// reports it if it does not fit.
pub fn parse_e_tail(parser: &mut Parser, mut left: Expr) -> Result<Expr, Error> {
    while parser.current_token_kind() == Some(TokenKind::Plus) {
        parser.advance();
        let right = parse_t(parser)?;
        left = Expr::add(left, right);
    }

    Ok(left)
}

pub fn parse_t(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_f(parser)?;
    parse_t_tail(parser, left)
}

/// `T' -> STAR F T' | ε`, folding onto `left`.
pub fn parse_t_tail(parser: &mut Parser, mut left: Expr) -> Result<Expr, Error> {
    while parser.current_token_kind() == Some(TokenKind::Star) {
        parser.advance();
        let right = parse_f(parser)?;
        left = Expr::mul(left, right);
    }

    Ok(left)
}

pub fn parse_f(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(token) = parser.current_token() else {
        return Err(parser.unexpected(&EXPR_START));
    };
    trace!(token = %token, "F");

    let kind = token.kind;
    match kind {
        TokenKind::OpenParen => parse_grouping_expr(parser),
        TokenKind::IntLit => {
            let value = token.value.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;
            parser.advance();
            Ok(Expr::int(value))
        }
        TokenKind::FloatLit => {
            let value = token
                .value
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| {
                    Error::new(
                        ErrorImpl::NumberParseError {
                            token: token.value.clone(),
                        },
                        token.span.start.clone(),
                    )
                })?;
            parser.advance();
            Ok(Expr::float(value))
        }
        TokenKind::Identifier => {
            let name = token.value.clone();
            parser.advance();
            Ok(Expr::identifier(name))
        }
        TokenKind::Let => parse_let_expr(parser),
        _ => Err(parser.unexpected(&EXPR_START)),
    }
}

/// Consumes `kind`, which the grammar places right after an `E`.
///
/// A mismatch is reported against `kind` and the tail operators, since the
/// `E` could also have continued there.
fn expect_after_e(parser: &mut Parser, kind: TokenKind) -> Result<Token, Error> {
    if parser.current_token_kind() == Some(kind) {
        if let Some(token) = parser.advance() {
            return Ok(token);
        }
    }

    let mut expected = TAIL_START.to_vec();
    expected.push(kind);
    Err(parser.unexpected(&expected))
}

/// `F -> LPAREN E RPAREN`
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    parser.enter_nested()?;

    let expr = parse_e(parser)?;
    expect_after_e(parser, TokenKind::CloseParen)?;

    parser.leave_nested();
    Ok(expr)
}

/// `F -> LET IDENTIFIER EQUALS E IN E`
pub fn parse_let_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::Let)?;
    parser.enter_nested()?;

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Equals)?;
    let init = parse_e(parser)?;
    expect_after_e(parser, TokenKind::In)?;
    let body = parse_e(parser)?;

    parser.leave_nested();
    Ok(Expr::let_binding(name, init, body))
}
