pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::Result;
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use anyhow::Context;
use log::debug;
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, made of numbers,
///   `+ - * /`, parentheses and unary minus. Spaces are ignored.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::evaluate;
///
/// let value = evaluate("-4 * ((17 - -5 * 1 + 3) / 2.5) / 4").unwrap();
/// assert_eq!(value, -10.0);
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    let postfix_tokens = to_postfix(expression)?;
    let value = evaluate_postfix(postfix_tokens)?;
    debug!("{:?} evaluated to {}", expression, value);
    Ok(value)
}

/// Converts the given expression into tokens in postfix order,
/// the order in which they are evaluated.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in postfix order.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::{to_postfix, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = to_postfix("2 + 3 * 4")?;
/// assert_eq!(tokens_to_string(&postfix_tokens)?, "2 3 4 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix(expression: &str) -> Result<Vec<Token>> {
    let tokens = lexer::tokenize(expression)?;
    parser::parse(tokens)
}

/// Prints the given tokens separated by whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::tokens_to_string;
/// use arithmetic_evaluator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![Token::Literal(5.0), Token::UnaryMinus];
/// let printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(printed_tokens, "5 neg");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> anyhow::Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
