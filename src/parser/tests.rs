//! Unit tests for the parser module.
//!
//! Covers precedence and associativity, literals, grouping, `let` bindings,
//! and every syntax error surface.

use std::rc::Rc;

use super::parser::{parse, parse_with_options, ParserOptions};
use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{TokenKind, TokenSet},
    },
};

fn parse_source(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string(), Some("test.expr".to_string())).unwrap();
    parse(tokens, Rc::new("test.expr".to_string()))
}

fn int(value: i64) -> Expr {
    Expr::int(value)
}

fn id(name: &str) -> Expr {
    Expr::identifier(name)
}

#[test]
fn test_parse_single_literals() {
    assert_eq!(parse_source("42").unwrap(), Expr::IntLiteral(42));
    assert_eq!(parse_source("3.25").unwrap(), Expr::FloatLiteral(3.25));
    assert_eq!(parse_source("1.5E+2").unwrap(), Expr::FloatLiteral(150.0));
    assert_eq!(parse_source("abc").unwrap(), Expr::Identifier("abc".to_string()));
}

#[test]
fn test_parse_integer_round_trip() {
    for n in [0i64, 1, 7, 1234, 65536, i64::MAX] {
        assert_eq!(parse_source(&n.to_string()).unwrap(), Expr::IntLiteral(n));
    }
}

#[test]
fn test_parse_float_round_trip() {
    for text in ["0.5", "2.75", "10.0", "123.456"] {
        let expected: f64 = text.parse().unwrap();
        assert_eq!(parse_source(text).unwrap(), Expr::FloatLiteral(expected));
    }
}

#[test]
fn test_parse_multiplication_binds_tighter() {
    assert_eq!(
        parse_source("1 + 2 * 3").unwrap(),
        Expr::add(int(1), Expr::mul(int(2), int(3)))
    );
    assert_eq!(
        parse_source("1 * 2 + 3").unwrap(),
        Expr::add(Expr::mul(int(1), int(2)), int(3))
    );
}

#[test]
fn test_parse_addition_is_left_associative() {
    assert_eq!(
        parse_source("a + b + c").unwrap(),
        Expr::add(Expr::add(id("a"), id("b")), id("c"))
    );
    assert_eq!(
        parse_source("1 + 2 + 3 + 4").unwrap(),
        Expr::add(Expr::add(Expr::add(int(1), int(2)), int(3)), int(4))
    );
}

#[test]
fn test_parse_multiplication_is_left_associative() {
    assert_eq!(
        parse_source("a * b * c").unwrap(),
        Expr::mul(Expr::mul(id("a"), id("b")), id("c"))
    );
}

#[test]
fn test_parse_mixed_chain() {
    assert_eq!(
        parse_source("a * b + c * d + e").unwrap(),
        Expr::add(
            Expr::add(Expr::mul(id("a"), id("b")), Expr::mul(id("c"), id("d"))),
            id("e")
        )
    );
}

#[test]
fn test_parse_parentheses_override_precedence() {
    assert_eq!(
        parse_source("(1 + 2) * 3").unwrap(),
        Expr::mul(Expr::add(int(1), int(2)), int(3))
    );
    assert_eq!(
        parse_source("a + (b + c)").unwrap(),
        Expr::add(id("a"), Expr::add(id("b"), id("c")))
    );
}

#[test]
fn test_parse_parenthesization_is_idempotent() {
    for source in ["1", "x", "1 + 2 * 3", "let x = 1 in x", "(a + b) * c"] {
        let plain = parse_source(source).unwrap();
        assert_eq!(parse_source(&format!("({})", source)).unwrap(), plain);
        assert_eq!(parse_source(&format!("(({}))", source)).unwrap(), plain);
    }
}

#[test]
fn test_parse_let_binding() {
    assert_eq!(
        parse_source("let x = 1 in x").unwrap(),
        Expr::let_binding("x", int(1), id("x"))
    );
}

#[test]
fn test_parse_let_body_extends_right() {
    assert_eq!(
        parse_source("let x = 1 + 2 in x * 3 + 4").unwrap(),
        Expr::let_binding(
            "x",
            Expr::add(int(1), int(2)),
            Expr::add(Expr::mul(id("x"), int(3)), int(4))
        )
    );
}

#[test]
fn test_parse_nested_let() {
    assert_eq!(
        parse_source("let x = 1 in let x = 2 in x").unwrap(),
        Expr::let_binding("x", int(1), Expr::let_binding("x", int(2), id("x")))
    );
    assert_eq!(
        parse_source("let x = let y = 2 in y in x").unwrap(),
        Expr::let_binding("x", Expr::let_binding("y", int(2), id("y")), id("x"))
    );
}

#[test]
fn test_parse_let_as_operand() {
    assert_eq!(
        parse_source("(let x = 2 in x) + x").unwrap(),
        Expr::add(Expr::let_binding("x", int(2), id("x")), id("x"))
    );
    assert_eq!(
        parse_source("1 + let x = 2 in x").unwrap(),
        Expr::add(int(1), Expr::let_binding("x", int(2), id("x")))
    );
}

#[test]
fn test_parse_error_missing_close_paren() {
    let error = parse_source("(1 + 2").unwrap_err();

    assert!(error.is_syntax_error());
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedEndOfStream {
            expected: TokenSet::of(&[TokenKind::Star, TokenKind::Plus, TokenKind::CloseParen])
        }
    );
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_parse_error_wrong_token_instead_of_close_paren() {
    let error = parse_source("(1 + 2 in").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenSet::of(&[TokenKind::Star, TokenKind::Plus, TokenKind::CloseParen]),
            found: TokenKind::In,
        }
    );
    assert_eq!(error.get_position().0, 7);
}

#[test]
fn test_parse_error_lists_every_continuation_after_operand() {
    let error = parse_source("(1 2").unwrap_err();

    assert_eq!(
        error.to_string(),
        "syntax error: expected one of STAR, PLUS, RPAREN, found INT_LIT"
    );
    assert_eq!(error.get_position().0, 3);

    let error = parse_source("1 2").unwrap_err();
    assert_eq!(
        error.get_tip().to_string(),
        "expected one of STAR, PLUS or end of input, found INT_LIT"
    );
}

#[test]
fn test_parse_error_trailing_input() {
    let error = parse_source("1 2").unwrap_err();

    assert!(error.is_syntax_error());
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::TrailingInput {
            found: TokenKind::IntLit
        }
    );
    assert_eq!(error.get_position().0, 2);

    let error = parse_source("(1) )").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::TrailingInput {
            found: TokenKind::CloseParen
        }
    );
}

#[test]
fn test_parse_error_empty_stream() {
    let error = parse(vec![], Rc::new("test.expr".to_string())).unwrap_err();

    match error.get_kind() {
        ErrorImpl::UnexpectedEndOfStream { expected } => {
            assert!(expected.contains(TokenKind::IntLit));
            assert!(expected.contains(TokenKind::Let));
        }
        other => panic!("expected end-of-stream error, got {:?}", other),
    }
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_parse_error_dangling_operator() {
    let error = parse_source("1 +").unwrap_err();
    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnexpectedEndOfStream { .. }
    ));

    let error = parse_source("1 + * 2").unwrap_err();
    match error.get_kind() {
        ErrorImpl::UnexpectedToken { found, .. } => assert_eq!(*found, TokenKind::Star),
        other => panic!("expected unexpected-token error, got {:?}", other),
    }
}

#[test]
fn test_parse_error_leading_operator() {
    let error = parse_source("+ 1").unwrap_err();
    match error.get_kind() {
        ErrorImpl::UnexpectedToken { expected, found } => {
            assert_eq!(*found, TokenKind::Plus);
            assert!(expected.contains(TokenKind::OpenParen));
        }
        other => panic!("expected unexpected-token error, got {:?}", other),
    }
}

#[test]
fn test_parse_error_malformed_let() {
    let error = parse_source("let = 1 in 2").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenSet::of(&[TokenKind::Identifier]),
            found: TokenKind::Equals,
        }
    );

    let error = parse_source("let x 1 in 2").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenSet::of(&[TokenKind::Equals]),
            found: TokenKind::IntLit,
        }
    );

    let error = parse_source("let x = 1 x").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenSet::of(&[TokenKind::Star, TokenKind::Plus, TokenKind::In]),
            found: TokenKind::Identifier,
        }
    );

    let error = parse_source("let x = 1 in").unwrap_err();
    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnexpectedEndOfStream { .. }
    ));
}

#[test]
fn test_parse_error_integer_overflow() {
    let error = parse_source("99999999999999999999").unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(!error.is_syntax_error());
}

#[test]
fn test_parse_error_float_overflow() {
    let error = parse_source("1.0E999").unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_parse_nesting_limit() {
    let options = ParserOptions { max_depth: 3 };
    let parse_nested = |source: &str| {
        let tokens = tokenize(source.to_string(), None).unwrap();
        parse_with_options(tokens, Rc::new("shell".to_string()), options)
    };

    assert!(parse_nested("(((1)))").is_ok());
    assert!(parse_nested("((let x = 1 in x))").is_ok());

    let error = parse_nested("((((1))))").unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::NestingTooDeep { limit: 3 });
}

#[test]
fn test_parse_default_limit_allows_ordinary_nesting() {
    let source = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(parse_source(&source).unwrap(), Expr::IntLiteral(1));
}

fn let_chain(depth: usize) -> String {
    let mut source: String = (0..depth).map(|i| format!("let x{} = {} in ", i, i)).collect();
    source.push_str("x0");
    source
}

#[test]
fn test_parse_let_chain_within_default_limit() {
    let mut current = &parse_source(&let_chain(200)).unwrap();
    let mut depth = 0;
    while let Expr::Let(let_expr) = current {
        depth += 1;
        current = let_expr.body.as_ref();
    }

    assert_eq!(depth, 200);
    assert_eq!(current, &id("x0"));
}

#[test]
fn test_parse_let_chain_past_default_limit() {
    let error = parse_source(&let_chain(300)).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NestingTooDeep {
            limit: ParserOptions::default().max_depth
        }
    );
}

#[test]
fn test_parse_long_flat_chain_under_default_limit() {
    let source = vec!["1"; 100_000].join(" + ");
    let ast = parse_source(&source).unwrap();

    // Every fold lands on the left spine.
    let mut current = &ast;
    let mut folds = 0;
    while let Expr::Binary(binary) = current {
        assert_eq!(binary.right.as_ref(), &int(1));
        folds += 1;
        current = binary.left.as_ref();
    }

    assert_eq!(folds, 99_999);
    assert_eq!(current, &int(1));
}
