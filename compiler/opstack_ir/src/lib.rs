//! Opstack IR - the shared vocabulary of the opstack evaluator.
//!
//! This crate has no dependencies on the engine. It defines:
//! - `Token`: a pre-classified input token (number or operator symbol)
//! - `Priority`: the precedence tier of an operator
//! - `OperatorKind` / `CustomOperator`: the evaluation rule bound to a symbol
//! - `OperatorDescriptor`: the immutable record the registry hands out
//!
//! All types are `Copy`; descriptors can be pushed onto the operator stack
//! by value without touching the heap.

mod operator;
mod token;

pub use operator::{CustomOperator, OperatorDescriptor, OperatorKind, Priority};
pub use token::Token;
