//! Core state machine types.
//!
//! - State definitions via the `State` trait
//! - Guard predicates over machine input
//! - Transition history
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
