//! The reduction calculator: operators, expressions, tokens and the rule
//! table that orders them.
//!
//! An expression is `OPERATOR (":" | ",") OPERAND ("," OPERAND)* "\n"`.
//! The rule table accepts exactly that shape, and lets a new expression
//! follow a completed one.

mod expression;
mod operator;
mod rules;
mod token;

pub use expression::{EvalError, Evaluator, Expression};
pub use operator::{OperatorTag, ParseOperatorError};
pub use rules::{calculator_machine, calculator_rules, CalcState};
pub use token::{Input, Token};
