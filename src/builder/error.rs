//! Build errors for state machines.

use thiserror::Error;

/// Errors that can occur when building state machines.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No transition rules defined. Add at least one rule")]
    NoRules,

    #[error("Both a shared rule set and individual rules were given. Use one or the other")]
    ConflictingRules,
}
