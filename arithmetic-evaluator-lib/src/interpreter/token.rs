use crate::interpreter::operator::{BinaryOperator, UNARY_MINUS_PRIORITY};
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Copy, Clone, PartialEq)]
pub enum Token {
    Literal(f64),
    BinaryOperator(BinaryOperator),
    UnaryMinus,
    LeftParenthesis,
    RightParenthesis,
}

/// Characters that end a run of literal characters.
pub static SYMBOLS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

impl Token {
    pub fn is_symbol(character: char) -> bool {
        SYMBOLS.contains(&character)
    }

    /// Priority of an operator token, where lower values bind tighter.
    /// `None` for anything that is not an operator.
    pub fn priority(&self) -> Option<u8> {
        match self {
            Token::BinaryOperator(operator) => Some(operator.priority()),
            Token::UnaryMinus => Some(UNARY_MINUS_PRIORITY),
            Token::Literal(_) | Token::LeftParenthesis | Token::RightParenthesis => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => write!(f, "{}", value),
            Token::BinaryOperator(operator) => write!(f, "{}", operator),
            Token::UnaryMinus => write!(f, "neg"),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
