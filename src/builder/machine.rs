//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::{BoxedObserver, RuleSet, StateMachine, TransitionObserver, TransitionRule};
use std::fmt::Debug;
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use reckon::builder::StateMachineBuilder;
/// use reckon::machine::TransitionRule;
/// use reckon::state_enum;
///
/// state_enum! {
///     enum Switch {
///         Off,
///         On,
///     }
/// }
///
/// let mut machine = StateMachineBuilder::new()
///     .initial(Switch::Off)
///     .rule(TransitionRule::new(Switch::On, Switch::Off, |i: &&str| *i == "flip"))
///     .rule(TransitionRule::new(Switch::Off, Switch::On, |i: &&str| *i == "flip"))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), &Switch::Off);
/// assert_eq!(machine.process("flip"), Ok(Switch::On));
/// ```
pub struct StateMachineBuilder<S: State, I> {
    initial: Option<S>,
    rules: Vec<TransitionRule<S, I>>,
    shared: Option<RuleSet<S, I>>,
    observer: Option<BoxedObserver<S, I>>,
}

impl<S: State, I: Debug> StateMachineBuilder<S, I> {
    pub fn new() -> Self {
        Self {
            initial: None,
            rules: Vec::new(),
            shared: None,
            observer: None,
        }
    }

    /// Set the initial state.
    ///
    /// When omitted, the source state of the first rule is used.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Append a rule. Rules keep the order in which they are added.
    pub fn rule(mut self, rule: TransitionRule<S, I>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append several rules at once.
    pub fn rules(mut self, rules: impl IntoIterator<Item = TransitionRule<S, I>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Use a rule table shared with other machines.
    pub fn shared_rules(mut self, rules: RuleSet<S, I>) -> Self {
        self.shared = Some(rules);
        self
    }

    pub fn observer(mut self, observer: impl TransitionObserver<S, I> + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn build(self) -> Result<StateMachine<S, I>, BuildError> {
        let rules: RuleSet<S, I> = match self.shared {
            Some(_) if !self.rules.is_empty() => return Err(BuildError::ConflictingRules),
            Some(shared) => shared,
            None => Arc::from(self.rules),
        };

        match self.initial {
            Some(initial) if !rules.is_empty() => {
                Ok(StateMachine::with_initial(rules, initial, self.observer))
            }
            _ => StateMachine::new(rules, self.observer),
        }
    }
}

impl<S: State, I: Debug> Default for StateMachineBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}
