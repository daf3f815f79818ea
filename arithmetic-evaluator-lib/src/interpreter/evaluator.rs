use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::token::Token;

/// Reduces postfix tokens to the single value they describe.
///
/// # Arguments
///
/// * `postfix_tokens`: Operands and operators in postfix order, without parentheses.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::evaluator::evaluate_postfix;
/// use arithmetic_evaluator::interpreter::operator::BinaryOperator;
/// use arithmetic_evaluator::interpreter::token::Token;
///
/// // 7 3 -
/// let postfix_tokens = vec![
///     Token::Literal(7.0),
///     Token::Literal(3.0),
///     BinaryOperator::Subtract.token(),
/// ];
/// assert_eq!(evaluate_postfix(postfix_tokens).unwrap(), 4.0);
/// ```
pub fn evaluate_postfix(postfix_tokens: Vec<Token>) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Literal(value) => operands.push(value),
            Token::UnaryMinus => {
                let operand = pop_operand(&mut operands, &token)?;
                operands.push(-operand);
            }
            Token::BinaryOperator(operator) => {
                let right_operand = pop_operand(&mut operands, &token)?;
                let left_operand = pop_operand(&mut operands, &token)?;
                operands.push(operator.evaluate(left_operand, right_operand));
            }
            Token::LeftParenthesis | Token::RightParenthesis => {
                return Err(EvaluationError::malformed(
                    "parentheses can not be evaluated in postfix order",
                ));
            }
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        [] => Err(EvaluationError::malformed("no value to evaluate")),
        values => Err(EvaluationError::malformed(format!(
            "{} operands are missing an operator",
            values.len()
        ))),
    }
}

fn pop_operand(operands: &mut Vec<f64>, operator: &Token) -> Result<f64> {
    operands.pop().ok_or_else(|| {
        EvaluationError::malformed(format!("'{}' is missing an operand", operator))
    })
}
