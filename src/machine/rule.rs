//! Transition rules and shared rule tables.

use crate::core::{Guard, State};
use std::sync::Arc;

/// A rule table shared read-only between any number of machines.
pub type RuleSet<S, I> = Arc<[TransitionRule<S, I>]>;

/// Moves the machine from `from` to `to` when `guard` accepts the input.
#[derive(Debug)]
pub struct TransitionRule<S: State, I> {
    pub from: S,
    pub to: S,
    pub guard: Guard<I>,
}

impl<S: State, I> TransitionRule<S, I> {
    pub fn new<F>(from: S, to: S, predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        Self {
            from,
            to,
            guard: Guard::new(predicate),
        }
    }

    /// Whether this rule applies in `current` for `input`.
    ///
    /// The source state is compared before the guard runs.
    pub fn matches(&self, current: &S, input: &I) -> bool {
        *current == self.from && self.guard.check(input)
    }
}
