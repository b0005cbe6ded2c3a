//! Property-based tests for the evaluator.
//!
//! These tests use proptest to generate random well-formed expressions over
//! `+ - * /` and the unary `v` and verify:
//! 1. Agreement with a direct two-tier evaluation (products first, then sums,
//!    each left to right)
//! 2. Idempotence: a second `calculate` on the same instance gives the same value

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::float_cmp,
    reason = "Proptest macros generate code with these patterns"
)]

use opstack_eval::{Evaluator, Token};
use proptest::prelude::*;

// -- Expression Generation Strategies --

/// An operand, optionally wrapped in a square root.
#[derive(Copy, Clone, Debug)]
struct Term {
    sqrt: bool,
    value: f64,
}

impl Term {
    fn eval(self) -> f64 {
        if self.sqrt {
            self.value.sqrt()
        } else {
            self.value
        }
    }

    fn push_tokens(self, tokens: &mut Vec<Token<'static>>) {
        if self.sqrt {
            tokens.push(Token::Operator("v"));
        }
        tokens.push(Token::Number(self.value));
    }
}

fn term_strategy() -> impl Strategy<Value = Term> {
    (any::<bool>(), -1000.0f64..1000.0).prop_map(|(sqrt, value)| Term { sqrt, value })
}

fn binary_op_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "*", "/"])
}

fn expression_strategy() -> impl Strategy<Value = (Term, Vec<(&'static str, Term)>)> {
    (
        term_strategy(),
        prop::collection::vec((binary_op_strategy(), term_strategy()), 0..12),
    )
}

fn to_tokens(first: Term, rest: &[(&'static str, Term)]) -> Vec<Token<'static>> {
    let mut tokens = Vec::new();
    first.push_tokens(&mut tokens);
    for &(op, term) in rest {
        tokens.push(Token::Operator(op));
        term.push_tokens(&mut tokens);
    }
    tokens
}

// -- Reference Evaluation --

fn combine(total: Option<f64>, op: &str, product: f64) -> f64 {
    match (total, op) {
        (None, _) => product,
        (Some(total), "-") => total - product,
        (Some(total), _) => total + product,
    }
}

/// Multiplicative runs are folded left to right, then summed left to right.
fn reference(first: Term, rest: &[(&'static str, Term)]) -> f64 {
    let mut total = None;
    let mut pending = "+";
    let mut product = first.eval();
    for &(op, term) in rest {
        match op {
            "*" => product *= term.eval(),
            "/" => product /= term.eval(),
            _ => {
                total = Some(combine(total, pending, product));
                pending = op;
                product = term.eval();
            }
        }
    }
    combine(total, pending, product)
}

fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

// -- Properties --

proptest! {
    #[test]
    fn matches_reference_precedence((first, rest) in expression_strategy()) {
        let tokens = to_tokens(first, &rest);
        let expected = reference(first, &rest);
        let actual = Evaluator::new().calculate(&tokens).unwrap();
        prop_assert!(same(actual, expected), "{tokens:?}: got {actual}, expected {expected}");
    }

    #[test]
    fn calculate_is_idempotent((first, rest) in expression_strategy()) {
        let tokens = to_tokens(first, &rest);
        let mut evaluator = Evaluator::new();
        let once = evaluator.calculate(&tokens).unwrap();
        let twice = evaluator.calculate(&tokens).unwrap();
        prop_assert!(same(once, twice));
    }

    #[test]
    fn excess_operands_are_rejected(values in prop::collection::vec(-10.0f64..10.0, 2..6)) {
        let tokens: Vec<Token<'static>> = values.into_iter().map(Token::Number).collect();
        let err = Evaluator::new().calculate(&tokens).unwrap_err();
        prop_assert_eq!(err.kind_name(), "invalid_result");
    }
}
