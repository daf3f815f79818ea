use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// Priority of the unary minus. Lower values bind tighter, so this groups
/// negation with multiplication and division.
pub(crate) const UNARY_MINUS_PRIORITY: u8 = 1;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    pub fn token(&self) -> Token {
        Token::BinaryOperator(*self)
    }

    /// Lower values bind tighter.
    pub(crate) fn priority(&self) -> u8 {
        match self {
            BinaryOperator::Multiply | BinaryOperator::Divide => 1,
            BinaryOperator::Add | BinaryOperator::Subtract => 2,
        }
    }

    /// Division follows IEEE semantics, so dividing by zero yields an
    /// infinity or NaN rather than an error.
    pub fn evaluate(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
