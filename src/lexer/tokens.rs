use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("in", TokenKind::In);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    Let,
    In,

    Equals, // =
    Plus,
    Star,

    OpenParen,
    CloseParen,

    IntLit,
    FloatLit,
    Identifier,
}

impl TokenKind {
    /// Kinds whose lexeme carries a value the parser needs.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::IntLit | TokenKind::FloatLit | TokenKind::Identifier
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Let => "LET",
            TokenKind::In => "IN",
            TokenKind::Equals => "EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::Star => "STAR",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::IntLit => "INT_LIT",
            TokenKind::FloatLit => "FLOAT_LIT",
            TokenKind::Identifier => "IDENTIFIER",
        };
        write!(f, "{}", name)
    }
}

/// The token kinds a grammar position would have accepted.
///
/// Kept in insertion order so diagnostics list alternatives the way the
/// grammar states them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet(Vec<TokenKind>);

impl TokenSet {
    pub fn of(kinds: &[TokenKind]) -> Self {
        let mut set = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if !set.contains(kind) {
                set.push(*kind);
            }
        }
        TokenSet(set)
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0.contains(&kind)
    }
}

impl Display for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "nothing"),
            [single] => write!(f, "{}", single),
            many => {
                write!(f, "one of ")?;
                for (i, kind) in many.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", kind)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.has_value() {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
