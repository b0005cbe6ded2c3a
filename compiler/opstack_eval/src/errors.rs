//! Error types for evaluation.
//!
//! `EvalError` is the only failure type the engine produces. Every failure
//! is raised at the point of detection and returned unchanged to the
//! caller of `Evaluator::calculate`; nothing is retried or recovered.
//!
//! Factory functions (e.g., `unknown_operator()`) are the construction API
//! used inside the crate; they keep the cold paths out of line.

use std::fmt;

/// Result of a single evaluation.
pub type EvalResult = Result<f64, EvalError>;

/// Which of the two evaluation stacks ran dry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StackKind {
    Operand,
    Operator,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Operand => "operand",
            Self::Operator => "operator",
        })
    }
}

/// Evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A symbol was looked up that no registered operator carries.
    #[error("unknown operator: '{symbol}'")]
    UnknownOperator { symbol: String },

    /// A reduction or pop needed more entries than the stack holds.
    ///
    /// Raised for expressions with too many operators relative to their
    /// operands, e.g. a leading binary operator.
    #[error("{stack} stack underflow: needed {needed}, found {available}")]
    StackUnderflow {
        stack: StackKind,
        needed: usize,
        available: usize,
    },

    /// The operand stack did not end with exactly one value.
    ///
    /// Covers both empty input and operands left over for lack of an
    /// operator between them.
    #[error("there should be exactly one value in the operand stack, but found {count}")]
    InvalidResult { count: usize },
}

impl EvalError {
    /// Stable machine-readable name of the failure kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::UnknownOperator { .. } => "unknown_operator",
            Self::StackUnderflow { .. } => "stack_underflow",
            Self::InvalidResult { .. } => "invalid_result",
        }
    }
}

/// Lookup of an unregistered operator symbol.
#[cold]
pub fn unknown_operator(symbol: &str) -> EvalError {
    EvalError::UnknownOperator {
        symbol: symbol.to_string(),
    }
}

/// Reduction with fewer operands than the operator's arity.
#[cold]
pub fn operand_underflow(needed: usize, available: usize) -> EvalError {
    EvalError::StackUnderflow {
        stack: StackKind::Operand,
        needed,
        available,
    }
}

/// Pop from an empty operator stack.
#[cold]
pub fn operator_underflow() -> EvalError {
    EvalError::StackUnderflow {
        stack: StackKind::Operator,
        needed: 1,
        available: 0,
    }
}

/// Final operand stack did not hold exactly one value.
#[cold]
pub fn invalid_result(count: usize) -> EvalError {
    EvalError::InvalidResult { count }
}
