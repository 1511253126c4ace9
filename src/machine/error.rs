//! Errors raised while driving a state machine.

use thiserror::Error;

/// Errors that can occur when feeding input to a machine
#[derive(Debug, Error, PartialEq)]
pub enum MachineError<S, I> {
    /// No rule for the current state accepted the input. The machine's
    /// state is unchanged.
    #[error("No matching rule for input {input:?} in state {state:?}")]
    NoMatchingRule { input: I, state: S },
}

impl<S, I> MachineError<S, I> {
    /// The input that was rejected.
    pub fn input(&self) -> &I {
        match self {
            Self::NoMatchingRule { input, .. } => input,
        }
    }

    /// The machine's state when the input was rejected.
    pub fn state(&self) -> &S {
        match self {
            Self::NoMatchingRule { state, .. } => state,
        }
    }
}
