mod infix_converter;

use crate::interpreter::error::Result;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use log::trace;

/// Reorders the given infix tokens into postfix (reverse Polish) order,
/// dropping all parentheses.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same operands and operators, in postfix format.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::parser::parse;
/// use arithmetic_evaluator::interpreter::token::Token;
/// use arithmetic_evaluator::interpreter::operator::BinaryOperator;
///
/// let infix_tokens = vec![
///     Token::Literal(2.0),
///     BinaryOperator::Add.token(),
///     Token::Literal(3.0),
/// ];
/// let postfix_tokens = parse(infix_tokens).unwrap();
/// assert_eq!(postfix_tokens[2], BinaryOperator::Add.token());
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    trace!("converted to postfix {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
