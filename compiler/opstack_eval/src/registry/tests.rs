#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
#![allow(clippy::float_cmp, reason = "Exact float results are expected")]

use super::*;
use crate::errors::EvalError;
use opstack_ir::{CustomOperator, OperatorKind, Priority};
use pretty_assertions::assert_eq;

fn power(args: &[f64]) -> f64 {
    match args {
        [base, exp] => base.powf(*exp),
        _ => f64::NAN,
    }
}

#[test]
fn empty_registry() {
    let registry = OperatorRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.has("+"));
}

#[test]
fn standard_operators_registered() {
    let registry = OperatorRegistry::standard();
    assert_eq!(registry.len(), 5);
    for symbol in ["*", "/", "+", "-", "v"] {
        assert!(registry.has(symbol), "missing {symbol}");
    }

    let mut symbols: Vec<_> = registry.symbols().collect();
    symbols.sort_unstable();
    assert_eq!(symbols, vec!["*", "+", "-", "/", "v"]);
}

#[test]
fn get_returns_descriptor() {
    let registry = OperatorRegistry::standard();
    let sqrt = registry.get("v").unwrap();
    assert_eq!(sqrt.priority(), Priority::High);
    assert_eq!(sqrt.arity(), 1);
}

#[test]
fn get_unknown_symbol_fails() {
    let registry = OperatorRegistry::standard();
    let err = registry.get("^").unwrap_err();
    assert_eq!(
        err,
        EvalError::UnknownOperator {
            symbol: "^".to_string()
        }
    );
    assert!(err.to_string().contains('^'));
}

#[test]
fn register_custom_operator() {
    let mut registry = OperatorRegistry::standard();
    let pow = OperatorDescriptor::new(
        "^",
        Priority::High,
        OperatorKind::Custom(CustomOperator::binary(power)),
    );
    assert!(registry.register(pow).is_none());
    assert!(registry.has("^"));
    assert_eq!(registry.get("^").unwrap().evaluate(&[2.0, 10.0]), 1024.0);
}

#[test]
fn register_last_write_wins() {
    let mut registry = OperatorRegistry::standard();
    let low_mul = OperatorDescriptor::new("*", Priority::Low, OperatorKind::Mul);

    let replaced = registry.register(low_mul).unwrap();
    assert_eq!(replaced.priority(), Priority::Medium);
    assert_eq!(registry.get("*").unwrap().priority(), Priority::Low);
    assert_eq!(registry.len(), 5);
}

#[test]
fn collect_from_descriptors() {
    let registry: OperatorRegistry = OperatorDescriptor::standard()
        .into_iter()
        .filter(|d| d.arity() == 2)
        .collect();
    assert_eq!(registry.len(), 4);
    assert!(!registry.has("v"));
}
