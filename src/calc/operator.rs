//! Reduction operators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The reduction applied to an expression's operands.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OperatorTag {
    Sum,
    Min,
    Max,
    Avg,
}

/// Token spelling of each operator, indexed by discriminant.
const OPERATOR_NAMES: [(OperatorTag, &str); 4] = [
    (OperatorTag::Sum, "SUM"),
    (OperatorTag::Min, "MIN"),
    (OperatorTag::Max, "MAX"),
    (OperatorTag::Avg, "AVG"),
];

impl OperatorTag {
    pub const ALL: [OperatorTag; 4] = [Self::Sum, Self::Min, Self::Max, Self::Avg];

    /// The upper-case token for this operator, as printed in results.
    pub fn name(self) -> &'static str {
        OPERATOR_NAMES[self as usize].1
    }

    /// Look up a normalized (upper-case) token.
    pub fn from_token(token: &str) -> Option<Self> {
        OPERATOR_NAMES
            .iter()
            .find(|(_, name)| *name == token)
            .map(|(tag, _)| *tag)
    }

    /// Apply the reduction. `operands` must not be empty.
    pub(crate) fn reduce(self, operands: &[f64]) -> f64 {
        match self {
            Self::Sum => operands.iter().sum(),
            Self::Min => operands[1..]
                .iter()
                .fold(operands[0], |min, &n| if n < min { n } else { min }),
            Self::Max => operands[1..]
                .iter()
                .fold(operands[0], |max, &n| if n > max { n } else { max }),
            Self::Avg => operands.iter().sum::<f64>() / operands.len() as f64,
        }
    }
}

impl fmt::Display for OperatorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name an operator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown operator '{0}'")]
pub struct ParseOperatorError(pub String);

impl FromStr for OperatorTag {
    type Err = ParseOperatorError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(&s.trim().to_uppercase()).ok_or_else(|| ParseOperatorError(s.to_string()))
    }
}
