//! Evaluator configuration.
//!
//! The operator table is explicit configuration: it is assembled here and
//! frozen when the evaluator is built. There is no process-wide table.

use opstack_ir::OperatorDescriptor;

use crate::evaluator::Evaluator;
use crate::registry::OperatorRegistry;

/// Builder for [`Evaluator`].
///
/// Starts from the standard operator set.
#[derive(Clone, Debug)]
pub struct EvaluatorBuilder {
    registry: OperatorRegistry,
}

impl EvaluatorBuilder {
    /// Create a builder holding the standard operators.
    pub fn new() -> Self {
        EvaluatorBuilder {
            registry: OperatorRegistry::standard(),
        }
    }

    /// Drop every operator registered so far, standard ones included.
    #[must_use]
    pub fn without_standard_operators(mut self) -> Self {
        self.registry = OperatorRegistry::new();
        self
    }

    /// Add an operator, replacing any registered under the same symbol.
    #[must_use]
    pub fn operator(mut self, descriptor: OperatorDescriptor) -> Self {
        self.registry.register(descriptor);
        self
    }

    /// Replace the whole operator table.
    #[must_use]
    pub fn registry(mut self, registry: OperatorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator::with_registry(self.registry)
    }
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
