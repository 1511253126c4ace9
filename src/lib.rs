//! Reckon: a line-oriented reduction calculator driven by a generic state
//! machine.
//!
//! The crate has two halves. The generic half is a small finite state
//! machine library: ordered transition rules guarded by predicates over
//! arbitrary input, an observer notified on each transition, and a recorded
//! history. The calculator half instantiates it with a fixed rule table and
//! drives it from a read loop that tokenizes a character stream.
//!
//! # Core Concepts
//!
//! - **State**: type-safe state representation via the `State` trait
//! - **Rules**: `(from, to, guard)` triples; the first match wins
//! - **Observer**: `TransitionObserver`, notified once per accepted input
//! - **Repl**: tokenizer and driver that prints `<OPERATOR>: <result>` lines
//!
//! # Example
//!
//! ```rust
//! use reckon::calc::{calculator_machine, CalcState, Input, Token};
//!
//! let mut machine = calculator_machine();
//!
//! assert_eq!(machine.process(Input::token("sum")), Ok(CalcState::Operator));
//! assert_eq!(machine.process(Input::token("10")), Ok(CalcState::Operand));
//! assert_eq!(machine.process(Token::newline().into()), Ok(CalcState::Sentinel));
//!
//! // An operand cannot follow a completed expression.
//! assert!(machine.process(Input::token("5")).is_err());
//! assert_eq!(machine.current_state(), &CalcState::Sentinel);
//! ```

pub mod builder;
pub mod calc;
pub mod core;
pub mod machine;
pub mod repl;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use machine::{MachineError, RuleSet, StateMachine, TransitionObserver, TransitionRule};
