//! Typed calculator inputs: digits and operations.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when turning raw characters into calculator inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a digit or decimal point")]
    InvalidDigit(char),

    #[error("'{0}' is not an operation (expected one of + - * ÷)")]
    InvalidOperation(String),

    #[error("no key is bound to '{0}'")]
    UnboundKey(char),
}

/// A single digit button: `0`-`9` or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const POINT: Digit = Digit('.');

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii_digit() || ch == '.' {
            Ok(Digit(ch))
        } else {
            Err(InputError::InvalidDigit(ch))
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Symbol shown on the keypad and next to the previous operand.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operation {
    type Error = InputError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '+' => Ok(Operation::Add),
            '-' => Ok(Operation::Subtract),
            '*' => Ok(Operation::Multiply),
            '÷' | '/' => Ok(Operation::Divide),
            other => Err(InputError::InvalidOperation(other.to_string())),
        }
    }
}

impl FromStr for Operation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Operation::try_from(ch),
            _ => Err(InputError::InvalidOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
