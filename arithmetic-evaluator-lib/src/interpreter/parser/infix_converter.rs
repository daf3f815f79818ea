use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::token::Token;

pub(super) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        match token {
            Token::Literal(_) => output.push(token),
            Token::LeftParenthesis => operators.push(token),
            Token::RightParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            Token::BinaryOperator(_) | Token::UnaryMinus => {
                parse_operator_token(&mut operators, &mut output, token)
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::LeftParenthesis | Token::RightParenthesis => {
                return Err(EvaluationError::UnbalancedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => return Err(EvaluationError::UnbalancedParentheses),
            // Discard the open parenthesis.
            Some(Token::LeftParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

/// Pops every operator that binds at least as tight as `token` before
/// pushing it, which keeps equal priorities evaluating left to right.
fn parse_operator_token(operators: &mut Vec<Token>, output: &mut Vec<Token>, token: Token) {
    while let Some(top_of_operator_stack) = operators.last() {
        let pops = match (top_of_operator_stack.priority(), token.priority()) {
            (Some(other_priority), Some(priority)) => other_priority <= priority,
            _ => false,
        };
        if !pops {
            break;
        }
        output.push(*top_of_operator_stack);
        operators.pop();
    }

    operators.push(token);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BinaryOperator;
    use pretty_assertions::assert_eq;

    fn plus() -> Token {
        BinaryOperator::Add.token()
    }

    fn minus() -> Token {
        BinaryOperator::Subtract.token()
    }

    fn times() -> Token {
        BinaryOperator::Multiply.token()
    }

    fn divided() -> Token {
        BinaryOperator::Divide.token()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = vec![Token::Literal(1.0), plus(), Token::Literal(2.0)];
        let postfix = vec![Token::Literal(1.0), Token::Literal(2.0), plus()];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = vec![
            Token::Literal(1.0),
            minus(),
            Token::LeftParenthesis,
            Token::Literal(2.0),
            plus(),
            Token::Literal(3.0),
            Token::RightParenthesis,
        ];
        let postfix = vec![
            Token::Literal(1.0),
            Token::Literal(2.0),
            Token::Literal(3.0),
            plus(),
            minus(),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let infix = vec![
            Token::Literal(1.0),
            plus(),
            Token::Literal(2.0),
            times(),
            Token::Literal(3.0),
            minus(),
            Token::Literal(4.0),
        ];
        let postfix = vec![
            Token::Literal(1.0),
            Token::Literal(2.0),
            Token::Literal(3.0),
            times(),
            plus(),
            Token::Literal(4.0),
            minus(),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_equal_priorities_are_left_associative() {
        // 8 / 4 * 2
        let infix = vec![
            Token::Literal(8.0),
            divided(),
            Token::Literal(4.0),
            times(),
            Token::Literal(2.0),
        ];
        let postfix = vec![
            Token::Literal(8.0),
            Token::Literal(4.0),
            divided(),
            Token::Literal(2.0),
            times(),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = vec![
            Token::Literal(1.0),
            plus(),
            Token::LeftParenthesis,
            Token::LeftParenthesis,
            Token::Literal(2.0),
            plus(),
            Token::Literal(3.0),
            Token::RightParenthesis,
            times(),
            Token::Literal(4.0),
            Token::RightParenthesis,
        ];
        let postfix = vec![
            Token::Literal(1.0),
            Token::Literal(2.0),
            Token::Literal(3.0),
            plus(),
            Token::Literal(4.0),
            times(),
            plus(),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_unary_minus_under_subtraction() {
        // 17 - -5 * 1
        let infix = vec![
            Token::Literal(17.0),
            minus(),
            Token::UnaryMinus,
            Token::Literal(5.0),
            times(),
            Token::Literal(1.0),
        ];
        let postfix = vec![
            Token::Literal(17.0),
            Token::Literal(5.0),
            Token::UnaryMinus,
            Token::Literal(1.0),
            times(),
            minus(),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_unary_minus_after_multiplication_pops_the_multiplication() {
        // 2 * -3
        let infix = vec![
            Token::Literal(2.0),
            times(),
            Token::UnaryMinus,
            Token::Literal(3.0),
        ];
        let postfix = vec![
            Token::Literal(2.0),
            times(),
            Token::Literal(3.0),
            Token::UnaryMinus,
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_extra_closing_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = vec![
            Token::LeftParenthesis,
            Token::Literal(1.0),
            plus(),
            Token::Literal(2.0),
            Token::RightParenthesis,
            Token::RightParenthesis,
        ];

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(error, EvaluationError::UnbalancedParentheses)
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (1 + 2
        let infix = vec![
            Token::LeftParenthesis,
            Token::Literal(1.0),
            plus(),
            Token::Literal(2.0),
        ];

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(error, EvaluationError::UnbalancedParentheses)
    }
}
