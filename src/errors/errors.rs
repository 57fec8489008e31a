use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{TokenKind, TokenSet},
    Position,
};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether the error was raised by the grammar rather than the lexer or checker.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnexpectedToken { .. }
                | ErrorImpl::UnexpectedEndOfStream { .. }
                | ErrorImpl::TrailingInput { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfStream { .. } => "UnexpectedEndOfStream",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnresolvedIdentifier { .. } => "UnresolvedIdentifier",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected {}, found {}", expected, found))
            }
            ErrorImpl::UnexpectedEndOfStream { expected } => {
                ErrorTip::Suggestion(format!("expected {}, found end of input", expected))
            }
            ErrorImpl::TrailingInput { found } => ErrorTip::Suggestion(format!(
                "expected one of {}, {} or end of input, found {}",
                TokenKind::Star,
                TokenKind::Plus,
                found
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expression nests deeper than {} levels",
                limit
            )),
            ErrorImpl::UnresolvedIdentifier { name } => {
                ErrorTip::Suggestion(format!("`{}` is not bound by any enclosing let", name))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("syntax error: expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenSet, found: TokenKind },
    #[error("syntax error: expected {expected}, found end of stream")]
    UnexpectedEndOfStream { expected: TokenSet },
    #[error("syntax error: unexpected trailing input ({found})")]
    TrailingInput { found: TokenKind },
    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
    #[error("identifier {name:?} is not bound")]
    UnresolvedIdentifier { name: String },
}
