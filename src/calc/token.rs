//! Tokens and machine input for the calculator.

use crate::calc::operator::OperatorTag;
use std::fmt;

/// A normalized unit of input: trimmed and upper-cased.
///
/// The newline sentinel is the only token that keeps whitespace; it is
/// built with [`Token::newline`], never by normalizing raw text.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub const NEWLINE: &'static str = "\n";

    pub fn normalize(raw: &str) -> Self {
        Token(raw.trim().to_uppercase())
    }

    pub fn newline() -> Self {
        Token(Self::NEWLINE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_newline(&self) -> bool {
        self.0 == Self::NEWLINE
    }

    pub fn is_quit(&self) -> bool {
        self.0 == "QUIT"
    }

    pub fn operator(&self) -> Option<OperatorTag> {
        OperatorTag::from_token(&self.0)
    }

    pub fn number(&self) -> Option<f64> {
        self.0.parse().ok()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the calculator's state machine is fed.
#[derive(Clone, PartialEq)]
pub enum Input {
    Token(Token),
    EndOfStream,
}

impl Input {
    pub fn token(raw: &str) -> Self {
        Input::Token(Token::normalize(raw))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Input::Token(token) => Some(token),
            Input::EndOfStream => None,
        }
    }

    pub fn is_operator(&self) -> bool {
        self.as_token().and_then(Token::operator).is_some()
    }

    pub fn is_operand(&self) -> bool {
        self.as_token().and_then(Token::number).is_some()
    }

    pub fn is_sentinel(&self) -> bool {
        self.as_token().is_some_and(Token::is_newline)
    }

    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Input::EndOfStream)
    }
}

impl From<Token> for Input {
    fn from(token: Token) -> Self {
        Input::Token(token)
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Token(token) => fmt::Debug::fmt(token, f),
            Input::EndOfStream => f.write_str("<end of stream>"),
        }
    }
}
