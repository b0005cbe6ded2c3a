//! Input tokens.
//!
//! Tokens are classified once, by whoever produces them. The evaluator never
//! inspects a raw value to guess whether it is a number or an operator.

use std::fmt;

/// A single element of the token sequence handed to the evaluator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// A numeric operand.
    Number(f64),
    /// An operator symbol, resolved against the registry during evaluation.
    Operator(&'a str),
}

impl<'a> Token<'a> {
    /// Returns the operand value, if this is a number.
    pub const fn as_number(self) -> Option<f64> {
        match self {
            Token::Number(value) => Some(value),
            Token::Operator(_) => None,
        }
    }

    /// Returns the operator symbol, if this is an operator.
    pub const fn as_operator(self) -> Option<&'a str> {
        match self {
            Token::Operator(symbol) => Some(symbol),
            Token::Number(_) => None,
        }
    }
}

impl From<f64> for Token<'_> {
    fn from(value: f64) -> Self {
        Token::Number(value)
    }
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(symbol: &'a str) -> Self {
        Token::Operator(symbol)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Operator(symbol) => f.write_str(symbol),
        }
    }
}
