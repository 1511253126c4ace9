//! Builder API for state machine construction.
//!
//! [`StateMachineBuilder`] assembles rules, an optional explicit initial
//! state and an observer. [`state_enum!`](crate::state_enum) declares a
//! state enum with its `State` implementation.

pub mod error;
mod machine;
mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
