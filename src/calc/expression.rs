//! Reduction expressions and the evaluator contract.

use crate::calc::operator::OperatorTag;
use thiserror::Error;

/// Errors that can occur when evaluating an expression
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("No operands provided")]
    EmptyOperands,

    #[error("Unknown operator")]
    UnknownOperator,
}

/// Anything the read loop can build up token by token and then evaluate.
///
/// A fresh evaluator is created for every expression (`Default`), given an
/// operator, fed operands one at a time and evaluated once.
pub trait Evaluator {
    /// Reduce the operands to a single value.
    ///
    /// Fails with `EmptyOperands` before looking at the operator.
    fn evaluate(&self) -> Result<f64, EvalError>;

    fn operator(&self) -> Option<OperatorTag>;

    fn set_operator(&mut self, operator: OperatorTag);

    fn operands(&self) -> &[f64];

    fn set_operands(&mut self, operands: Vec<f64>);

    fn push_operand(&mut self, operand: f64);
}

/// An operator applied to an ordered list of operands.
///
/// # Example
///
/// ```rust
/// use reckon::calc::{Evaluator, Expression, OperatorTag};
///
/// let mut exp = Expression::new(OperatorTag::Avg);
/// exp.set_operands(vec![5.0, 10.0, 15.0, 20.0]);
///
/// assert_eq!(exp.evaluate(), Ok(12.5));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expression {
    operator: Option<OperatorTag>,
    operands: Vec<f64>,
}

impl Expression {
    pub fn new(operator: OperatorTag) -> Self {
        Self {
            operator: Some(operator),
            operands: Vec::new(),
        }
    }

    pub fn with_operands(mut self, operands: impl Into<Vec<f64>>) -> Self {
        self.operands = operands.into();
        self
    }
}

impl Evaluator for Expression {
    fn evaluate(&self) -> Result<f64, EvalError> {
        if self.operands.is_empty() {
            return Err(EvalError::EmptyOperands);
        }
        let operator = self.operator.ok_or(EvalError::UnknownOperator)?;
        Ok(operator.reduce(&self.operands))
    }

    fn operator(&self) -> Option<OperatorTag> {
        self.operator
    }

    fn set_operator(&mut self, operator: OperatorTag) {
        self.operator = Some(operator);
    }

    fn operands(&self) -> &[f64] {
        &self.operands
    }

    fn set_operands(&mut self, operands: Vec<f64>) {
        self.operands = operands;
    }

    fn push_operand(&mut self, operand: f64) {
        self.operands.push(operand);
    }
}
