//! Operator descriptors.
//!
//! An operator is a symbol bound to a precedence tier and an evaluation
//! rule. The standard rules are enum variants dispatched by pattern
//! matching; callers that need something else supply a plain function
//! pointer through `CustomOperator`.

use std::fmt;
use std::num::NonZeroUsize;

/// Precedence tier of an operator.
///
/// Only the relative order matters: `High` binds tighter than `Medium`,
/// which binds tighter than `Low`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric rank of the tier (`Low` = 0, `Medium` = 1, `High` = 2).
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// A caller-supplied evaluation rule with a declared arity.
#[derive(Copy, Clone)]
pub struct CustomOperator {
    arity: NonZeroUsize,
    rule: fn(&[f64]) -> f64,
}

impl CustomOperator {
    const TWO: NonZeroUsize = match NonZeroUsize::new(2) {
        Some(n) => n,
        None => NonZeroUsize::MIN,
    };

    /// A rule taking two operands, the default arity.
    pub const fn binary(rule: fn(&[f64]) -> f64) -> Self {
        Self::with_arity(Self::TWO, rule)
    }

    /// A rule taking a single operand.
    pub const fn unary(rule: fn(&[f64]) -> f64) -> Self {
        Self::with_arity(NonZeroUsize::MIN, rule)
    }

    /// A rule taking `arity` operands.
    ///
    /// The rule receives its arguments in the order they appeared in the
    /// token sequence.
    pub const fn with_arity(arity: NonZeroUsize, rule: fn(&[f64]) -> f64) -> Self {
        CustomOperator { arity, rule }
    }

    pub const fn arity(self) -> usize {
        self.arity.get()
    }
}

impl fmt::Debug for CustomOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomOperator")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Evaluation rule of an operator.
#[derive(Copy, Clone, Debug)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    /// Unary square root.
    Sqrt,
    Custom(CustomOperator),
}

impl OperatorKind {
    /// Number of operands the rule consumes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div => 2,
            Self::Sqrt => 1,
            Self::Custom(custom) => custom.arity(),
        }
    }

    /// Apply the rule to `args`, given in left-to-right order.
    ///
    /// Follows IEEE 754 semantics: dividing by zero yields an infinity and
    /// the square root of a negative number yields NaN. A built-in rule
    /// handed the wrong number of arguments also yields NaN.
    pub fn evaluate(self, args: &[f64]) -> f64 {
        match (self, args) {
            (Self::Add, &[a, b]) => a + b,
            (Self::Sub, &[a, b]) => a - b,
            (Self::Mul, &[a, b]) => a * b,
            (Self::Div, &[a, b]) => a / b,
            (Self::Sqrt, &[x]) => x.sqrt(),
            (Self::Custom(custom), _) => (custom.rule)(args),
            _ => f64::NAN,
        }
    }
}

/// Immutable record of an operator: symbol, precedence tier and rule.
#[derive(Copy, Clone, Debug)]
pub struct OperatorDescriptor {
    symbol: &'static str,
    priority: Priority,
    kind: OperatorKind,
}

impl OperatorDescriptor {
    pub const fn new(symbol: &'static str, priority: Priority, kind: OperatorKind) -> Self {
        OperatorDescriptor {
            symbol,
            priority,
            kind,
        }
    }

    /// The standard operator set: `*` `/` `+` `-` and unary `v` (square root).
    pub const fn standard() -> [OperatorDescriptor; 5] {
        [
            Self::new("*", Priority::Medium, OperatorKind::Mul),
            Self::new("/", Priority::Medium, OperatorKind::Div),
            Self::new("+", Priority::Low, OperatorKind::Add),
            Self::new("-", Priority::Low, OperatorKind::Sub),
            Self::new("v", Priority::High, OperatorKind::Sqrt),
        ]
    }

    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub const fn priority(&self) -> Priority {
        self.priority
    }

    pub const fn kind(&self) -> OperatorKind {
        self.kind
    }

    pub const fn arity(&self) -> usize {
        self.kind.arity()
    }

    /// Apply this operator's rule to exactly `arity()` arguments.
    pub fn evaluate(&self, args: &[f64]) -> f64 {
        self.kind.evaluate(args)
    }
}

impl fmt::Display for OperatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}
