use tracing::{debug, trace, warn};

use crate::{
    ast::ast::{BinaryOperator, Expr},
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{scope::ScopeStack, value::Value};

/// What to do when an identifier is not bound by any enclosing `let`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Report it through `CheckResult::well_formed` and keep evaluating.
    #[default]
    Tolerate,
    /// Fail the check with `ErrorImpl::UnresolvedIdentifier`.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckerOptions {
    pub unresolved: UnresolvedPolicy,
}

/// Verdict and value of a checked expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckResult {
    /// Every identifier in the expression resolved.
    pub well_formed: bool,
    pub value: Value,
}

impl CheckResult {
    fn literal(value: Value) -> Self {
        CheckResult {
            well_formed: true,
            value,
        }
    }
}

/// Walks an expression, tracking `let` scopes, and evaluates it.
///
/// A checker owns its scope stack; every `check` starts and ends with it
/// empty.
#[derive(Debug, Default)]
pub struct SemanticChecker {
    scopes: ScopeStack,
    unresolved: Vec<String>,
}

impl SemanticChecker {
    pub fn new() -> Self {
        SemanticChecker::default()
    }

    /// Checks `expr`. Unresolved identifiers make the result ill-formed but
    /// never fail the check.
    pub fn check(&mut self, expr: &Expr) -> CheckResult {
        self.unresolved.clear();
        let result = self.check_expr(expr);
        debug_assert!(self.scopes.is_empty(), "scope stack left unbalanced");
        result
    }

    /// Names that failed to resolve during the last `check`, in the order
    /// they were encountered.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    // Walked with an explicit work list; folded operator chains can be far
    // deeper than the call stack allows. Each `Apply` and `Unbind` runs after
    // the visits that push its operands' results.
    fn check_expr(&mut self, expr: &Expr) -> CheckResult {
        let mut steps = vec![Step::Visit(expr)];
        let mut results: Vec<CheckResult> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(expr) => match expr {
                    Expr::IntLiteral(value) => {
                        results.push(CheckResult::literal(Value::Int(*value)))
                    }
                    Expr::FloatLiteral(value) => {
                        results.push(CheckResult::literal(Value::Float(*value)))
                    }
                    Expr::Identifier(name) => {
                        let result = self.check_identifier(name);
                        results.push(result);
                    }
                    Expr::Binary(binary) => {
                        steps.push(Step::Apply(binary.operator));
                        steps.push(Step::Visit(binary.right.as_ref()));
                        steps.push(Step::Visit(binary.left.as_ref()));
                    }
                    Expr::Let(let_expr) => {
                        steps.push(Step::Unbind(let_expr.name.as_str()));
                        steps.push(Step::Visit(let_expr.body.as_ref()));
                        steps.push(Step::Bind(let_expr.name.as_str()));
                        steps.push(Step::Visit(let_expr.init.as_ref()));
                    }
                },
                Step::Apply(operator) => {
                    let right = pop_result(&mut results);
                    let left = pop_result(&mut results);
                    results.push(CheckResult {
                        well_formed: left.well_formed && right.well_formed,
                        value: left.value.apply(operator, right.value),
                    });
                }
                Step::Bind(name) => {
                    let init = pop_result(&mut results);
                    self.scopes.push(name.to_string(), init.value);
                    // Kept for `Unbind`, which folds it into the verdict.
                    results.push(init);
                    trace!(binding = name, depth = self.scopes.depth(), "scope push");
                }
                Step::Unbind(name) => {
                    let body = pop_result(&mut results);
                    let init = pop_result(&mut results);
                    self.scopes.pop();
                    trace!(binding = name, depth = self.scopes.depth(), "scope pop");
                    results.push(CheckResult {
                        well_formed: init.well_formed && body.well_formed,
                        value: body.value,
                    });
                }
            }
        }

        pop_result(&mut results)
    }

    fn check_identifier(&mut self, name: &str) -> CheckResult {
        match self.scopes.lookup(name) {
            Some(value) => {
                trace!(identifier = name, %value, "resolved");
                CheckResult {
                    well_formed: true,
                    value,
                }
            }
            None => {
                warn!(identifier = name, "unresolved identifier");
                self.unresolved.push(name.to_string());
                UNRESOLVED
            }
        }
    }
}

const UNRESOLVED: CheckResult = CheckResult {
    well_formed: false,
    value: Value::Unknown,
};

enum Step<'a> {
    Visit(&'a Expr),
    Apply(BinaryOperator),
    Bind(&'a str),
    Unbind(&'a str),
}

fn pop_result(results: &mut Vec<CheckResult>) -> CheckResult {
    // Unbalanced only if a step was scheduled without its operands.
    results.pop().expect("checker result stack underflow")
}

/// Checks `expr` in a fresh scope, tolerating unresolved identifiers.
pub fn check(expr: &Expr) -> CheckResult {
    SemanticChecker::new().check(expr)
}

/// Checks `expr` in a fresh scope under `options`.
///
/// With `UnresolvedPolicy::Reject` the first unresolved identifier is
/// returned as an error instead of an ill-formed result.
pub fn check_with_options(expr: &Expr, options: CheckerOptions) -> Result<CheckResult, Error> {
    let mut checker = SemanticChecker::new();
    let result = checker.check(expr);
    debug!(well_formed = result.well_formed, value = %result.value, "checked");

    match (options.unresolved, checker.unresolved().first()) {
        (UnresolvedPolicy::Reject, Some(name)) => Err(Error::new(
            ErrorImpl::UnresolvedIdentifier { name: name.clone() },
            Position::null(),
        )),
        _ => Ok(result),
    }
}
