//! The read loop's transition observer.
//!
//! A `Session` owns both sinks and the expression being built. The state
//! machine calls back into it after each accepted input; the target state
//! says what the input meant.

use crate::calc::{CalcState, Evaluator, Expression, Input, OperatorTag};
use crate::machine::TransitionObserver;
use log::debug;
use std::io::{self, Write};

pub struct Session<W, E, X = Expression> {
    out: W,
    err: E,
    expression: Option<X>,
    precision: usize,
    results: usize,
    diagnostics: usize,
    write_error: Option<io::Error>,
}

impl<W: Write, E: Write, X: Evaluator + Default> Session<W, E, X> {
    pub fn new(out: W, err: E, precision: usize) -> Self {
        Self {
            out,
            err,
            expression: None,
            precision,
            results: 0,
            diagnostics: 0,
            write_error: None,
        }
    }

    /// Write one line to the diagnostic sink.
    pub fn diagnostic(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        self.diagnostics += 1;
        writeln!(self.err, "{message}")
    }

    /// Drop the expression in progress without evaluating it.
    pub fn discard(&mut self) {
        if let Some(expression) = self.expression.take() {
            debug!(
                "discarding incomplete expression with {} operand(s)",
                expression.operands().len()
            );
        }
    }

    pub fn expression(&self) -> Option<&X> {
        self.expression.as_ref()
    }

    pub fn results(&self) -> usize {
        self.results
    }

    pub fn diagnostics(&self) -> usize {
        self.diagnostics
    }

    /// Surface a write failure from inside a callback, if one happened.
    pub(crate) fn take_write_error(&mut self) -> io::Result<()> {
        match self.write_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn into_sinks(self) -> (W, E) {
        (self.out, self.err)
    }

    fn begin(&mut self, input: &Input) {
        let mut expression = X::default();
        if let Some(operator) = input.as_token().and_then(|token| token.operator()) {
            expression.set_operator(operator);
        }
        self.expression = Some(expression);
    }

    fn append(&mut self, input: &Input) {
        let Some(token) = input.as_token() else {
            return;
        };
        // Unparsable operands are dropped without a diagnostic.
        match (token.number(), self.expression.as_mut()) {
            (Some(operand), Some(expression)) => expression.push_operand(operand),
            (None, _) => debug!("ignoring unparsable operand {token:?}"),
            (Some(_), None) => debug!("operand {token:?} arrived with no expression"),
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        let Some(expression) = self.expression.take() else {
            return Ok(());
        };
        match expression.evaluate() {
            Ok(value) => {
                self.results += 1;
                let name = expression.operator().map_or("", OperatorTag::name);
                writeln!(self.out, "{name}: {value:.prec$}", prec = self.precision)
            }
            Err(err) => self.diagnostic(err),
        }
    }
}

impl<W: Write, E: Write, X: Evaluator + Default> TransitionObserver<CalcState, Input>
    for Session<W, E, X>
{
    fn state_changed(&mut self, _from: &CalcState, to: &CalcState, input: &Input) {
        match to {
            CalcState::Operator => self.begin(input),
            CalcState::Operand => self.append(input),
            CalcState::Sentinel => {
                if let Err(err) = self.finish() {
                    self.write_error.get_or_insert(err);
                }
            }
            CalcState::Started | CalcState::Stopped => {}
        }
    }
}
