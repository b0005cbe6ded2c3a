//! The operand and operator stacks.
//!
//! Both stacks are owned by an `Evaluator` and cleared at the start of
//! every evaluation; nothing on them outlives a single `calculate` call.

use opstack_ir::OperatorDescriptor;
use smallvec::SmallVec;

use crate::errors::{invalid_result, operand_underflow, operator_underflow, EvalError};

/// Operators displaced by a push, in the order they were popped.
pub type Displaced = SmallVec<[OperatorDescriptor; 4]>;

/// LIFO stack of intermediate numeric values.
#[derive(Clone, Debug, Default)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an operand. Any value is accepted, finite or not.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Replace the top `arity` values with the operator's result.
    ///
    /// The earliest-pushed value becomes the first argument, so `a b -`
    /// computes `a - b`.
    pub fn reduce(&mut self, operator: &OperatorDescriptor) -> Result<(), EvalError> {
        let arity = operator.arity();
        let base = self
            .values
            .len()
            .checked_sub(arity)
            .ok_or_else(|| operand_underflow(arity, self.values.len()))?;

        let result = operator.evaluate(&self.values[base..]);
        tracing::trace!(
            operator = operator.symbol(),
            args = ?&self.values[base..],
            result,
            "reduce"
        );
        self.values.truncate(base);
        self.values.push(result);
        Ok(())
    }

    /// The sole remaining value.
    pub fn result(&self) -> Result<f64, EvalError> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            values => Err(invalid_result(values.len())),
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// LIFO stack of pending operators.
#[derive(Clone, Debug, Default)]
pub struct OperatorStack {
    operators: Vec<OperatorDescriptor>,
}

impl OperatorStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `operator`, first popping every operator on top whose priority
    /// is greater than or equal to it.
    ///
    /// The popped operators are returned in pop order; the caller must
    /// reduce each of them, in that order, before reading the next token.
    /// Popping on equal priority makes same-tier chains left-associative.
    pub fn push(&mut self, operator: OperatorDescriptor) -> Displaced {
        let mut displaced = Displaced::new();
        while let Some(top) = self.operators.last() {
            if top.priority() < operator.priority() {
                break;
            }
            displaced.extend(self.operators.pop());
        }
        tracing::trace!(
            operator = operator.symbol(),
            displaced = displaced.len(),
            depth = self.operators.len(),
            "push operator"
        );
        self.operators.push(operator);
        displaced
    }

    /// Remove and return the top operator.
    pub fn pop(&mut self) -> Result<OperatorDescriptor, EvalError> {
        self.operators.pop().ok_or_else(operator_underflow)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn clear(&mut self) {
        self.operators.clear();
    }
}
