//! Synchronous rule-driven state machine.

use crate::builder::BuildError;
use crate::core::{State, StateHistory};
use crate::machine::error::MachineError;
use crate::machine::observer::TransitionObserver;
use crate::machine::rule::RuleSet;
use log::debug;
use std::fmt::Debug;

/// Boxed observer owned by a machine.
pub type BoxedObserver<S, I> = Box<dyn TransitionObserver<S, I>>;

/// A finite state machine driven by an ordered rule table.
///
/// Rules are scanned in declaration order and the first rule whose source
/// state equals the current state and whose guard accepts the input wins.
/// A machine is meant to be driven by one caller; the rule table itself is
/// shared and immutable.
pub struct StateMachine<S: State, I> {
    rules: RuleSet<S, I>,
    initial: S,
    current: S,
    observer: Option<BoxedObserver<S, I>>,
    history: StateHistory<S>,
}

impl<S: State, I: Debug> StateMachine<S, I> {
    /// Create a machine whose initial state is the source state of the
    /// first rule.
    ///
    /// This derivation is kept for compatibility with rule tables written
    /// with their entry rule first. Use [`StateMachineBuilder::initial`] to
    /// name the initial state explicitly.
    ///
    /// [`StateMachineBuilder::initial`]: crate::builder::StateMachineBuilder::initial
    pub fn new(
        rules: RuleSet<S, I>,
        observer: Option<BoxedObserver<S, I>>,
    ) -> Result<Self, BuildError> {
        let initial = rules
            .first()
            .map(|rule| rule.from.clone())
            .ok_or(BuildError::NoRules)?;
        Ok(Self::with_initial(rules, initial, observer))
    }

    pub(crate) fn with_initial(
        rules: RuleSet<S, I>,
        initial: S,
        observer: Option<BoxedObserver<S, I>>,
    ) -> Self {
        Self {
            rules,
            current: initial.clone(),
            initial,
            observer,
            history: StateHistory::new(),
        }
    }

    /// Feed one input, notifying the machine's own observer on success.
    ///
    /// Returns the new state. On failure the state is unchanged and the
    /// error hands the input back together with the current state.
    pub fn process(&mut self, input: I) -> Result<S, MachineError<S, I>> {
        let (from, to, input) = self.advance(input)?;
        if let Some(observer) = self.observer.as_mut() {
            observer.state_changed(&from, &to, &input);
        }
        Ok(to)
    }

    /// Feed one input, notifying `observer` instead of the owned observer.
    ///
    /// This lets a caller that owns the machine also act as its observer
    /// without the machine holding a reference back to it.
    pub fn process_with(
        &mut self,
        input: I,
        observer: &mut dyn TransitionObserver<S, I>,
    ) -> Result<S, MachineError<S, I>> {
        let (from, to, input) = self.advance(input)?;
        observer.state_changed(&from, &to, &input);
        Ok(to)
    }

    /// Return to the initial state. History is kept.
    pub fn reset(&mut self) {
        debug!("reset {} -> {}", self.current.name(), self.initial.name());
        self.current = self.initial.clone();
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// The shared rule table, for handing to another machine.
    pub fn rules(&self) -> &RuleSet<S, I> {
        &self.rules
    }

    /// Apply the first matching rule, returning the old state, the new
    /// state and the input.
    fn advance(&mut self, input: I) -> Result<(S, S, I), MachineError<S, I>> {
        let target = self
            .rules
            .iter()
            .find(|rule| rule.matches(&self.current, &input))
            .map(|rule| rule.to.clone());

        let Some(to) = target else {
            return Err(MachineError::NoMatchingRule {
                input,
                state: self.current.clone(),
            });
        };

        let from = std::mem::replace(&mut self.current, to.clone());
        debug!("{} -> {} on {:?}", from.name(), to.name(), input);
        self.history.push(from.clone(), to.clone());
        Ok((from, to, input))
    }
}
