//! Operator registry.
//!
//! Maps symbols to operator descriptors. A registry is assembled once,
//! handed to an evaluator, and only read from afterwards.

use opstack_ir::OperatorDescriptor;
use rustc_hash::FxHashMap;

use crate::errors::{unknown_operator, EvalError};

/// Lookup table from operator symbol to descriptor.
#[derive(Clone, Debug, Default)]
pub struct OperatorRegistry {
    operators: FxHashMap<&'static str, OperatorDescriptor>,
}

impl OperatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the standard operators.
    ///
    /// See [`OperatorDescriptor::standard`].
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for descriptor in OperatorDescriptor::standard() {
            registry.register(descriptor);
        }
        registry
    }

    /// Register `descriptor` under its symbol.
    ///
    /// Last write wins: an operator already registered under the same
    /// symbol is replaced and returned.
    pub fn register(&mut self, descriptor: OperatorDescriptor) -> Option<OperatorDescriptor> {
        let replaced = self.operators.insert(descriptor.symbol(), descriptor);
        if replaced.is_some() {
            tracing::debug!(symbol = descriptor.symbol(), "operator overridden");
        }
        replaced
    }

    /// Check whether an operator is registered under `symbol`.
    pub fn has(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    /// Look up the operator registered under `symbol`.
    pub fn get(&self, symbol: &str) -> Result<&OperatorDescriptor, EvalError> {
        self.operators
            .get(symbol)
            .ok_or_else(|| unknown_operator(symbol))
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Registered symbols, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operators.keys().copied()
    }
}

impl FromIterator<OperatorDescriptor> for OperatorRegistry {
    fn from_iter<I: IntoIterator<Item = OperatorDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for descriptor in iter {
            registry.register(descriptor);
        }
        registry
    }
}

#[cfg(test)]
mod tests;
