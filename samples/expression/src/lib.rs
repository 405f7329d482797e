//! Arithmetic expression evaluator built on sumkit.
//!
//! An [`Expression`] is evaluated two ways:
//!
//! - [`Expression::evaluate`] returns `Disjunction<EvaluationError, i64>` and
//!   sequences operands through `right_view().flat_map(..)`
//! - [`Expression::evaluate_attempt`] returns `Attempt<i64>` and sequences
//!   operands through `Attempt::flat_map`
//!
//! Operands are evaluated left to right and the first error stops evaluation.
//!
//! # Examples
//!
//! ```
//! use expression_sample::{EvaluationError, Expression};
//! use sumkit::control::Disjunction;
//!
//! let expression = Expression::add(
//!     Expression::divide(Expression::number(10), Expression::number(2)),
//!     Expression::number(3),
//! );
//! assert_eq!(expression.evaluate(), Disjunction::Right(8));
//!
//! let broken = Expression::divide(Expression::number(1), Expression::number(0));
//! assert_eq!(broken.evaluate(), Disjunction::Left(EvaluationError::DivisionByZero));
//! ```

use std::fmt;

use sumkit::control::{Attempt, Disjunction};
use thiserror::Error;

/// Errors raised while evaluating an [`Expression`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The divisor evaluated to zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The result does not fit in an `i64`.
    #[error("{operator} overflowed")]
    Overflow {
        /// The operator that overflowed.
        operator: Operator,
    },
}

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Addition,
    /// `-`
    Subtraction,
    /// `*`
    Multiplication,
    /// `/`
    Division,
}

impl Operator {
    /// Applies the operator with checked arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::DivisionByZero`] for a zero divisor and
    /// [`EvaluationError::Overflow`] when the result does not fit in an `i64`.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvaluationError> {
        let result = match self {
            Self::Addition => left.checked_add(right),
            Self::Subtraction => left.checked_sub(right),
            Self::Multiplication => left.checked_mul(right),
            Self::Division if right == 0 => return Err(EvaluationError::DivisionByZero),
            Self::Division => left.checked_div(right),
        };
        result.ok_or(EvaluationError::Overflow { operator: self })
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}

/// An arithmetic expression over `i64`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// A literal.
    Number(i64),
    /// `left <operator> right`
    Binary {
        /// The operator joining both operands.
        operator: Operator,
        /// The left operand.
        left: Box<Expression>,
        /// The right operand.
        right: Box<Expression>,
    },
}

impl Expression {
    /// A literal expression.
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::Number(value)
    }

    /// `left + right`
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::binary(Operator::Addition, left, right)
    }

    /// `left - right`
    #[must_use]
    pub fn subtract(left: Self, right: Self) -> Self {
        Self::binary(Operator::Subtraction, left, right)
    }

    /// `left * right`
    #[must_use]
    pub fn multiply(left: Self, right: Self) -> Self {
        Self::binary(Operator::Multiplication, left, right)
    }

    /// `left / right`
    #[must_use]
    pub fn divide(left: Self, right: Self) -> Self {
        Self::binary(Operator::Division, left, right)
    }

    fn binary(operator: Operator, left: Self, right: Self) -> Self {
        Self::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluates into a disjunction with the error on the left.
    #[must_use]
    pub fn evaluate(&self) -> Disjunction<EvaluationError, i64> {
        match self {
            Self::Number(value) => Disjunction::Right(*value),
            Self::Binary {
                operator,
                left,
                right,
            } => left
                .evaluate()
                .right_view()
                .flat_map(|left_value| {
                    right
                        .evaluate()
                        .right_view()
                        .flat_map(|right_value| Disjunction::from(operator.apply(left_value, right_value)))
                        .into_disjunction()
                })
                .into_disjunction(),
        }
    }

    /// Evaluates into an attempt; errors are carried as `EvaluationError`.
    ///
    /// ```
    /// use expression_sample::{EvaluationError, Expression};
    ///
    /// let broken = Expression::divide(Expression::number(1), Expression::number(0));
    /// let failure = broken.evaluate_attempt();
    /// assert!(failure.error().exists(|error| error.is::<EvaluationError>()));
    /// ```
    #[must_use]
    pub fn evaluate_attempt(&self) -> Attempt<i64> {
        match self {
            Self::Number(value) => Attempt::success(*value),
            Self::Binary {
                operator,
                left,
                right,
            } => left.evaluate_attempt().flat_map(|left_value| {
                right
                    .evaluate_attempt()
                    .flat_map(|right_value| Attempt::from(operator.apply(left_value, right_value)))
            }),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(formatter, "{value}"),
            Self::Binary {
                operator,
                left,
                right,
            } => write!(formatter, "({left} {operator} {right})"),
        }
    }
}
