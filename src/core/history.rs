//! State transition history tracking.
//!
//! Every successful transition a machine takes is recorded here, in order.
//! The history is serialisable so a session transcript can be written out.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use reckon::calc::CalcState;
/// use reckon::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: CalcState::Started,
///     to: CalcState::Operator,
///     timestamp: Utc::now(),
///     sequence: 0,
/// };
/// assert_eq!(transition.to, CalcState::Operator);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Position of this transition in the machine's lifetime, starting at 0
    pub sequence: usize,
}

/// Ordered history of state transitions.
///
/// `record` is pure and returns a new history; the owning machine appends
/// in place.
///
/// # Example
///
/// ```rust
/// use reckon::calc::CalcState;
/// use reckon::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: CalcState::Started,
///         to: CalcState::Operator,
///         timestamp: Utc::now(),
///         sequence: 0,
///     })
///     .record(StateTransition {
///         from: CalcState::Operator,
///         to: CalcState::Operand,
///         timestamp: Utc::now(),
///         sequence: 1,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&CalcState::Started, &CalcState::Operator, &CalcState::Operand]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The receiver is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    pub(crate) fn push(&mut self, from: S, to: S) {
        let sequence = self.transitions.len();
        self.transitions.push(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            sequence,
        });
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of each transition. After a machine reset the path may
    /// jump, since a reset is not a transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Phase {
        Idle,
        Busy,
        Done,
    }

    impl State for Phase {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
                Self::Done => "Done",
            }
        }
    }

    fn transition(from: Phase, to: Phase, sequence: usize) -> StateTransition<Phase> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            sequence,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_leaves_original_untouched() {
        let history = StateHistory::new();
        let updated = history.record(transition(Phase::Idle, Phase::Busy, 0));

        assert_eq!(history.len(), 0);
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn push_assigns_increasing_sequence() {
        let mut history = StateHistory::new();
        history.push(Phase::Idle, Phase::Busy);
        history.push(Phase::Busy, Phase::Done);

        let sequences: Vec<usize> = history.transitions().iter().map(|t| t.sequence).collect();
        assert_eq!(sequences, vec![0, 1]);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(Phase::Idle, Phase::Busy, 0))
            .record(transition(Phase::Busy, Phase::Done, 1));

        assert_eq!(
            history.get_path(),
            vec![&Phase::Idle, &Phase::Busy, &Phase::Done]
        );
    }

    #[test]
    fn single_transition_has_zero_duration() {
        let history = StateHistory::new().record(transition(Phase::Idle, Phase::Busy, 0));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(Phase::Idle, Phase::Busy, 0));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.transitions()[0].to, Phase::Busy);
    }
}
