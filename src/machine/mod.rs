//! Rule-driven finite state machine.
//!
//! # Key Concepts
//!
//! - **Rules**: `(from, to, guard)` triples, scanned in declaration order
//! - **Observer**: a narrow `TransitionObserver` notified after each move
//! - **Machine**: owns the current state and history; shares the rule table
//!
//! Declaration order is significant. When two rules share a source state and
//! both guards accept an input, the one declared first is taken.

mod error;
#[allow(clippy::module_inception)]
mod machine;
mod observer;
mod rule;

pub use error::MachineError;
pub use machine::{BoxedObserver, StateMachine};
pub use observer::TransitionObserver;
pub use rule::{RuleSet, TransitionRule};
