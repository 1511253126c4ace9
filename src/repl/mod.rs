//! The interactive read loop.
//!
//! [`Repl`] reads characters, cuts them into tokens at `,`, `:` and `\n`,
//! and feeds the tokens to the calculator's state machine. A [`Session`]
//! observes the machine and turns transitions into expressions and output.
//!
//! Every error is recovered here: rule violations, evaluation failures and
//! undecodable input become diagnostics, and reading resumes at the start of
//! the next line. Only a failure to write to one of the sinks ends the loop
//! with an error.

mod config;
mod reader;
mod session;

pub use config::{ReplConfig, DEFAULT_PRECISION};
pub use reader::{CharReader, ReadError};
pub use session::Session;

use crate::calc::{calculator_machine, CalcState, Evaluator, Expression, Input, Token};
use crate::core::StateHistory;
use crate::machine::{MachineError, StateMachine};
use log::{debug, trace, warn};
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

pub const BANNER: &str =
    "Enter expressions to evaluate followed by a newline. Type \"QUIT\" to exit.";
pub const FAREWELL: &str = "Goodbye!";
pub const INVALID_CHARACTER: &str = "Invalid character in input.";

const DELIMITERS: [char; 3] = [':', ',', '\n'];

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The `QUIT` token was read.
    Quit,
    /// The input ran out.
    EndOfStream,
}

/// Reads expressions from `R`, prints results to `W` and diagnostics to `E`.
///
/// # Example
///
/// ```rust
/// use reckon::repl::{Outcome, Repl};
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut repl = Repl::new("sum:10,20,30\n".as_bytes(), &mut out, &mut err);
///
/// assert_eq!(repl.run().unwrap(), Outcome::EndOfStream);
/// drop(repl);
/// assert_eq!(String::from_utf8(out).unwrap(), "SUM: 60.000000\n");
/// ```
pub struct Repl<R, W, E, X = Expression> {
    reader: CharReader<R>,
    machine: StateMachine<CalcState, Input>,
    session: Session<W, E, X>,
    config: ReplConfig,
    buffer: String,
    skip: bool,
}

impl<R: BufRead, W: Write, E: Write> Repl<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self::with_config(input, out, err, ReplConfig::default())
    }

    pub fn with_config(input: R, out: W, err: E, config: ReplConfig) -> Self {
        Self::with_evaluator(input, out, err, config)
    }
}

impl<R: BufRead, W: Write, E: Write, X: Evaluator + Default> Repl<R, W, E, X> {
    /// Build a loop whose expressions are `X` values.
    pub fn with_evaluator(input: R, out: W, err: E, config: ReplConfig) -> Self {
        Self {
            reader: CharReader::new(input),
            machine: calculator_machine(),
            session: Session::new(out, err, config.precision),
            config,
            buffer: String::new(),
            skip: false,
        }
    }

    /// Run until `QUIT` or end of input.
    pub fn run(&mut self) -> io::Result<Outcome> {
        if self.config.banner {
            self.session.diagnostic(BANNER)?;
        }

        loop {
            let next = match self.reader.next() {
                Some(Err(ReadError::Io(err))) => {
                    warn!("treating read failure as end of input: {err}");
                    None
                }
                next => next,
            };

            match next {
                None => {
                    self.end_of_stream();
                    return Ok(Outcome::EndOfStream);
                }
                Some(Err(err)) => {
                    debug!("{err}");
                    self.session.diagnostic(INVALID_CHARACTER)?;
                    self.abandon_line(false);
                }
                Some(Ok(ch)) => {
                    if let ControlFlow::Break(outcome) = self.handle_char(ch)? {
                        return Ok(outcome);
                    }
                }
            }
        }
    }

    pub fn state(&self) -> &CalcState {
        self.machine.current_state()
    }

    pub fn history(&self) -> &StateHistory<CalcState> {
        self.machine.history()
    }

    pub fn session(&self) -> &Session<W, E, X> {
        &self.session
    }

    pub fn into_sinks(self) -> (W, E) {
        self.session.into_sinks()
    }

    fn handle_char(&mut self, ch: char) -> io::Result<ControlFlow<Outcome>> {
        if self.skip {
            if ch == '\n' {
                self.skip = false;
            }
            return Ok(ControlFlow::Continue(()));
        }

        if !DELIMITERS.contains(&ch) {
            self.buffer.push(ch);
            return Ok(ControlFlow::Continue(()));
        }

        let token = Token::normalize(&self.buffer);
        self.buffer.clear();
        trace!("token {token:?} ended by {ch:?}");

        if token.is_quit() {
            self.session.diagnostic(FAREWELL)?;
            self.session.discard();
            return Ok(ControlFlow::Break(Outcome::Quit));
        }

        let line_ended = ch == '\n';
        if self.feed(Input::Token(token), line_ended)? && line_ended {
            self.feed(Token::newline().into(), true)?;
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Feed one input, turning a rule violation into a diagnostic.
    ///
    /// Returns whether the machine accepted the input.
    fn feed(&mut self, input: Input, line_ended: bool) -> io::Result<bool> {
        let result = self.machine.process_with(input, &mut self.session);
        self.session.take_write_error()?;

        match result {
            Ok(_) => Ok(true),
            Err(err @ MachineError::NoMatchingRule { .. }) => {
                self.session.diagnostic(&err)?;
                self.abandon_line(line_ended);
                Ok(false)
            }
        }
    }

    /// Drop the expression in progress and resume at the next line.
    ///
    /// The machine goes back to its initial state so the next line can
    /// start with an operator.
    fn abandon_line(&mut self, line_ended: bool) {
        self.session.discard();
        self.machine.reset();
        self.buffer.clear();
        self.skip = !line_ended;
    }

    fn end_of_stream(&mut self) {
        if let Err(err) = self.machine.process_with(Input::EndOfStream, &mut self.session) {
            debug!("input ended in state {}", err.state());
        }
        self.session.discard();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{EvalError, OperatorTag};

    fn run(input: &[u8]) -> (Outcome, String, String) {
        let config = ReplConfig::default().banner(false);
        let mut repl = Repl::with_config(input, Vec::new(), Vec::new(), config);
        let outcome = repl.run().unwrap();
        let (out, err) = repl.into_sinks();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn banner_is_written_first() {
        let mut repl = Repl::new(&b""[..], Vec::new(), Vec::new());
        repl.run().unwrap();
        let (_, err) = repl.into_sinks();

        assert_eq!(String::from_utf8(err).unwrap(), format!("{BANNER}\n"));
    }

    #[test]
    fn consecutive_expressions() {
        let (outcome, out, err) = run(b"sum:1,2\nmax:3,9,4\n");

        assert_eq!(outcome, Outcome::EndOfStream);
        assert_eq!(out, "SUM: 3.000000\nMAX: 9.000000\n");
        assert_eq!(err, "");
    }

    #[test]
    fn comma_may_follow_operator() {
        let (_, out, _) = run(b"avg,2,4\n");
        assert_eq!(out, "AVG: 3.000000\n");
    }

    #[test]
    fn tokens_are_trimmed_and_case_insensitive() {
        let (_, out, _) = run(b"  Min : 4 , 2.5 \n");
        assert_eq!(out, "MIN: 2.500000\n");
    }

    #[test]
    fn quit_stops_before_later_input() {
        let (outcome, out, err) = run(b"sum:1\nquit\nsum:2\n");

        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(out, "SUM: 1.000000\n");
        assert_eq!(err, format!("{FAREWELL}\n"));
    }

    #[test]
    fn quit_mid_expression() {
        let (outcome, out, _) = run(b"sum:1,quit,2\n");

        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(out, "");
    }

    #[test]
    fn rule_violation_skips_rest_of_line() {
        let (_, out, err) = run(b"sum:1,x,2\navg:2,4\n");

        assert_eq!(out, "AVG: 3.000000\n");
        assert_eq!(
            err,
            "No matching rule for input \"X\" in state Operand\n"
        );
    }

    #[test]
    fn operator_without_operands_is_a_rule_violation() {
        let (_, out, err) = run(b"sum:\nmax:1\n");

        assert_eq!(out, "MAX: 1.000000\n");
        assert_eq!(
            err,
            "No matching rule for input \"\" in state Operator\n"
        );
    }

    #[test]
    fn operator_alone_on_a_line_is_reported() {
        let (_, out, err) = run(b"sum\nsum:5\n");

        assert_eq!(out, "SUM: 5.000000\n");
        assert_eq!(
            err,
            "No matching rule for input \"\\n\" in state Operator\n"
        );
    }

    #[test]
    fn invalid_character_skips_line() {
        let (_, out, err) = run(b"sum:1,\xff2\nsum:7\n");

        assert_eq!(out, "SUM: 7.000000\n");
        assert_eq!(err, format!("{INVALID_CHARACTER}\n"));
    }

    #[test]
    fn invalid_character_does_not_leak_buffered_text() {
        let (_, out, err) = run(b"su\xffm:1\nsum:3\n");

        assert_eq!(out, "SUM: 3.000000\n");
        assert_eq!(err, format!("{INVALID_CHARACTER}\n"));
    }

    #[test]
    fn unterminated_expression_is_discarded_at_end_of_input() {
        let (outcome, out, err) = run(b"sum:1,2");

        assert_eq!(outcome, Outcome::EndOfStream);
        assert_eq!(out, "");
        assert_eq!(err, "");
    }

    #[test]
    fn end_of_input_after_expression_stops_machine() {
        let mut repl = Repl::with_config(
            &b"max:1\n"[..],
            Vec::new(),
            Vec::new(),
            ReplConfig::default().banner(false),
        );
        repl.run().unwrap();

        assert_eq!(repl.state(), &CalcState::Stopped);
        assert_eq!(repl.session().results(), 1);
        assert_eq!(
            repl.history().get_path(),
            vec![
                &CalcState::Started,
                &CalcState::Operator,
                &CalcState::Operand,
                &CalcState::Sentinel,
                &CalcState::Stopped,
            ]
        );
    }

    /// Always evaluates to a fixed value, whatever it was fed.
    #[derive(Default)]
    struct Fixed {
        operator: Option<OperatorTag>,
        operands: Vec<f64>,
    }

    impl Evaluator for Fixed {
        fn evaluate(&self) -> Result<f64, EvalError> {
            Ok(42.0)
        }

        fn operator(&self) -> Option<OperatorTag> {
            self.operator
        }

        fn set_operator(&mut self, operator: OperatorTag) {
            self.operator = Some(operator);
        }

        fn operands(&self) -> &[f64] {
            &self.operands
        }

        fn set_operands(&mut self, operands: Vec<f64>) {
            self.operands = operands;
        }

        fn push_operand(&mut self, operand: f64) {
            self.operands.push(operand);
        }
    }

    #[test]
    fn evaluator_can_be_substituted() {
        let mut repl: Repl<_, _, _, Fixed> = Repl::with_evaluator(
            &b"min:1,2\n"[..],
            Vec::new(),
            Vec::new(),
            ReplConfig::default().banner(false),
        );
        repl.run().unwrap();
        let (out, _) = repl.into_sinks();

        assert_eq!(String::from_utf8(out).unwrap(), "MIN: 42.000000\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_write_failure_ends_the_loop() {
        let mut repl = Repl::with_config(
            &b"sum:1\nsum:2\n"[..],
            Broken,
            Vec::new(),
            ReplConfig::default().banner(false),
        );

        let err = repl.run().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
