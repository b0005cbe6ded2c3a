//! Opstack Eval - operator-precedence evaluation of pre-tokenized arithmetic.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `OperatorRegistry`: symbol to descriptor lookup, frozen per evaluator
//! - `OperandStack`: intermediate values, reduced in place by operators
//! - `OperatorStack`: pending operators; pushing resolves precedence
//! - `Evaluator`: drives the above over a `Token` sequence
//!
//! # Re-exports
//!
//! This crate re-exports the vocabulary types from `opstack_ir`:
//! - `Token`, `Priority`, `OperatorKind`, `CustomOperator`, `OperatorDescriptor`

mod builder;
pub mod errors;
mod evaluator;
mod registry;
mod shared;
mod stack;
mod tracing_setup;

pub use opstack_ir::{CustomOperator, OperatorDescriptor, OperatorKind, Priority, Token};

pub use builder::EvaluatorBuilder;
pub use errors::{EvalError, EvalResult, StackKind};
pub use evaluator::Evaluator;
pub use registry::OperatorRegistry;
pub use shared::SharedRegistry;
pub use stack::{Displaced, OperandStack, OperatorStack};
pub use tracing_setup::init_tracing;
