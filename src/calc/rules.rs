//! The calculator's states and rule table.

use crate::calc::token::Input;
use crate::machine::{RuleSet, StateMachine, TransitionRule};
use crate::state_enum;
use std::sync::{Arc, OnceLock};

state_enum! {
    /// Where the calculator is within an expression.
    pub enum CalcState {
        /// Nothing read yet.
        Started,
        /// An operator token was accepted.
        Operator,
        /// At least one operand was accepted.
        Operand,
        /// An expression was terminated by a newline.
        Sentinel,
        /// Input ended cleanly between expressions.
        Stopped,
    }
    final: [Stopped]
}

static RULES: OnceLock<RuleSet<CalcState, Input>> = OnceLock::new();

/// The calculator's rule table.
///
/// Built once per process and shared by every machine. Order matters:
/// `Started -> Operator` comes first, which makes `Started` the initial
/// state for machines built with [`StateMachine::new`].
pub fn calculator_rules() -> RuleSet<CalcState, Input> {
    Arc::clone(RULES.get_or_init(|| {
        Arc::from(vec![
            TransitionRule::new(CalcState::Started, CalcState::Operator, Input::is_operator),
            TransitionRule::new(CalcState::Operator, CalcState::Operand, Input::is_operand),
            TransitionRule::new(CalcState::Operand, CalcState::Operand, Input::is_operand),
            TransitionRule::new(CalcState::Operand, CalcState::Sentinel, Input::is_sentinel),
            TransitionRule::new(CalcState::Sentinel, CalcState::Operator, Input::is_operator),
            TransitionRule::new(
                CalcState::Sentinel,
                CalcState::Stopped,
                Input::is_end_of_stream,
            ),
        ])
    }))
}

/// A fresh calculator machine in `Started`, with no observer.
pub fn calculator_machine() -> StateMachine<CalcState, Input> {
    StateMachine::with_initial(calculator_rules(), CalcState::Started, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::token::Token;
    use crate::core::State;
    use crate::machine::MachineError;

    fn feed(machine: &mut StateMachine<CalcState, Input>, input: Input) -> CalcState {
        machine.process(input).unwrap()
    }

    #[test]
    fn table_has_six_rules_in_order() {
        let rules = calculator_rules();
        let pairs: Vec<(CalcState, CalcState)> = rules.iter().map(|r| (r.from, r.to)).collect();

        assert_eq!(
            pairs,
            vec![
                (CalcState::Started, CalcState::Operator),
                (CalcState::Operator, CalcState::Operand),
                (CalcState::Operand, CalcState::Operand),
                (CalcState::Operand, CalcState::Sentinel),
                (CalcState::Sentinel, CalcState::Operator),
                (CalcState::Sentinel, CalcState::Stopped),
            ]
        );
    }

    #[test]
    fn table_is_built_once() {
        assert!(Arc::ptr_eq(&calculator_rules(), &calculator_rules()));
    }

    #[test]
    fn legacy_initial_state_matches_explicit_one() {
        let legacy = StateMachine::new(calculator_rules(), None).unwrap();
        assert_eq!(legacy.current_state(), calculator_machine().current_state());
        assert_eq!(legacy.current_state(), &CalcState::Started);
    }

    #[test]
    fn full_expression_walk() {
        let mut machine = calculator_machine();

        assert_eq!(feed(&mut machine, Input::token("SUM")), CalcState::Operator);
        assert_eq!(feed(&mut machine, Input::token("10")), CalcState::Operand);
        assert_eq!(feed(&mut machine, Input::token("20")), CalcState::Operand);
        assert_eq!(
            feed(&mut machine, Token::newline().into()),
            CalcState::Sentinel
        );
        assert_eq!(feed(&mut machine, Input::token("MAX")), CalcState::Operator);
        assert_eq!(feed(&mut machine, Input::token("1")), CalcState::Operand);
        feed(&mut machine, Token::newline().into());
        assert_eq!(feed(&mut machine, Input::EndOfStream), CalcState::Stopped);
        assert!(machine.current_state().is_final());
    }

    #[test]
    fn operator_then_sentinel_is_rejected() {
        let mut machine = calculator_machine();
        feed(&mut machine, Input::token("SUM"));

        let err = machine.process(Input::token("")).unwrap_err();

        assert_eq!(err.state(), &CalcState::Operator);
        assert!(matches!(err, MachineError::NoMatchingRule { .. }));
        assert_eq!(machine.current_state(), &CalcState::Operator);
    }

    #[test]
    fn end_of_stream_mid_expression_is_rejected() {
        let mut machine = calculator_machine();
        feed(&mut machine, Input::token("AVG"));
        feed(&mut machine, Input::token("3"));

        assert!(machine.process(Input::EndOfStream).is_err());
        assert_eq!(machine.current_state(), &CalcState::Operand);
    }

    #[test]
    fn operand_before_operator_is_rejected() {
        let mut machine = calculator_machine();
        let err = machine.process(Input::token("42")).unwrap_err();

        assert_eq!(
            err.to_string(),
            "No matching rule for input \"42\" in state Started"
        );
    }
}
