//! The evaluator: drives the registry and both stacks over a token sequence.
//!
//! Evaluation is a simplified shunting-yard pass that reduces eagerly
//! instead of emitting postfix output:
//!
//! 1. **Reset** both stacks.
//! 2. **Scan** the tokens. Numbers go to the operand stack; operators go to
//!    the operator stack, and whatever they displace is reduced at once.
//! 3. **Drain** the operators still pending, top first.
//! 4. **Finalize** by taking the single value left on the operand stack.
//!
//! The first failure aborts the evaluation and is returned as is.

use opstack_ir::Token;

use crate::builder::EvaluatorBuilder;
use crate::errors::{EvalError, EvalResult};
use crate::registry::OperatorRegistry;
use crate::shared::SharedRegistry;
use crate::stack::{OperandStack, OperatorStack};

/// Operator-precedence evaluator.
///
/// `calculate` takes `&mut self`: one instance runs one evaluation at a
/// time. Evaluators on other threads can share the same registry through
/// [`SharedRegistry`].
#[derive(Debug)]
pub struct Evaluator {
    registry: SharedRegistry,
    operands: OperandStack,
    operators: OperatorStack,
}

impl Evaluator {
    /// Create an evaluator over the standard operators.
    pub fn new() -> Self {
        Self::with_registry(OperatorRegistry::standard())
    }

    /// Create an evaluator over `registry`.
    pub fn with_registry(registry: OperatorRegistry) -> Self {
        Self::with_shared_registry(SharedRegistry::new(registry))
    }

    /// Create an evaluator over a registry shared with other evaluators.
    pub fn with_shared_registry(registry: SharedRegistry) -> Self {
        Evaluator {
            registry,
            operands: OperandStack::new(),
            operators: OperatorStack::new(),
        }
    }

    /// Start configuring an evaluator. See [`EvaluatorBuilder`].
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Evaluate `tokens` and return the resulting value.
    ///
    /// # Example
    ///
    /// ```
    /// use opstack_eval::{Evaluator, Token};
    ///
    /// let mut evaluator = Evaluator::new();
    /// let tokens = [Token::Number(2.0), Token::Operator("+"), Token::Number(3.0),
    ///               Token::Operator("*"), Token::Number(4.0)];
    /// assert_eq!(evaluator.calculate(&tokens), Ok(14.0));
    /// ```
    pub fn calculate(&mut self, tokens: &[Token<'_>]) -> EvalResult {
        let result = self.evaluate(tokens);
        tracing::debug!(tokens = tokens.len(), ?result, "calculate");
        result
    }

    fn evaluate(&mut self, tokens: &[Token<'_>]) -> EvalResult {
        self.operands.clear();
        self.operators.clear();

        self.scan(tokens)?;
        self.drain()?;
        self.operands.result()
    }

    fn scan(&mut self, tokens: &[Token<'_>]) -> Result<(), EvalError> {
        for token in tokens {
            match *token {
                Token::Number(value) => self.operands.push(value),
                Token::Operator(symbol) => {
                    let operator = *self.registry.get(symbol)?;
                    for displaced in self.operators.push(operator) {
                        self.operands.reduce(&displaced)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn drain(&mut self) -> Result<(), EvalError> {
        while !self.operators.is_empty() {
            let operator = self.operators.pop()?;
            self.operands.reduce(&operator)?;
        }
        Ok(())
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
