use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// Symbols after which an operand has to start.
const OPERAND_PREFIXES: [char; 5] = ['(', '+', '-', '*', '/'];

/// Symbols that can not start an operand.
const NON_OPERAND_STARTS: [char; 4] = [')', '+', '*', '/'];

/// Symbols allowed directly after a closing parenthesis.
const CLOSING_SUFFIXES: [char; 5] = [')', '+', '-', '*', '/'];

/// Splits an infix expression into tokens, validating the placement
/// of every operator and parenthesis on the way.
///
/// Spaces are ignored anywhere in the expression. Numbers may carry other
/// surrounding whitespace and underscores between digits. Reported positions
/// refer to the expression with its spaces removed.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in infix order.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::lexer::tokenize;
/// use arithmetic_evaluator::interpreter::token::Token;
///
/// let tokens = tokenize("-2 * 3").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0], Token::UnaryMinus);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let characters: Vec<char> = expression.chars().filter(|c| *c != ' ').collect();
    let mut tokens = Vec::new();
    let mut literal_start: Option<usize> = None;

    for (position, &character) in characters.iter().enumerate() {
        if !Token::is_symbol(character) {
            literal_start.get_or_insert(position);
            continue;
        }

        if !is_symbol_position_valid(&characters, position) {
            return Err(EvaluationError::invalid_syntax(
                position,
                character.to_string(),
            ));
        }

        if let Some(start) = literal_start.take() {
            tokens.push(parse_literal(&characters[start..position], start)?);
        }

        tokens.push(classify_symbol(&characters, position)?);
    }

    if let Some(start) = literal_start {
        tokens.push(parse_literal(&characters[start..], start)?);
    }

    trace!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

fn parse_literal(characters: &[char], start: usize) -> Result<Token> {
    let text: String = characters.iter().collect();
    match strip_digit_separators(text.trim()).map(|digits| digits.parse::<f64>()) {
        Some(Ok(value)) => Ok(Token::Literal(value)),
        _ => Err(EvaluationError::invalid_syntax(start, text)),
    }
}

/// Removes underscores used as digit separators, as in `1_000`.
/// An underscore is only a separator between two digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let characters: Vec<char> = text.chars().collect();
    let mut digits = String::with_capacity(text.len());

    for (position, &character) in characters.iter().enumerate() {
        if character != '_' {
            digits.push(character);
            continue;
        }
        let left = left_neighbour(&characters, position);
        let right = characters.get(position + 1).copied();
        match (left, right) {
            (Some(left), Some(right)) if left.is_ascii_digit() && right.is_ascii_digit() => {}
            _ => return None,
        }
    }

    Some(digits)
}

fn classify_symbol(characters: &[char], position: usize) -> Result<Token> {
    if is_unary_minus(characters, position) {
        return Ok(Token::UnaryMinus);
    }
    match characters[position] {
        '(' => Ok(Token::LeftParenthesis),
        ')' => Ok(Token::RightParenthesis),
        '+' => Ok(BinaryOperator::Add.token()),
        '-' => Ok(BinaryOperator::Subtract.token()),
        '*' => Ok(BinaryOperator::Multiply.token()),
        '/' => Ok(BinaryOperator::Divide.token()),
        other => Err(EvaluationError::invalid_syntax(position, other.to_string())),
    }
}

/// A minus is unary when it opens the expression or follows a symbol
/// after which an operand is expected.
fn is_unary_minus(characters: &[char], position: usize) -> bool {
    characters[position] == '-'
        && left_neighbour(characters, position)
            .map_or(true, |left| OPERAND_PREFIXES.contains(&left))
}

fn is_symbol_position_valid(characters: &[char], position: usize) -> bool {
    let symbol = characters[position];
    let left = left_neighbour(characters, position);
    let right = characters.get(position + 1).copied();

    let (left_valid, right_valid) = match symbol {
        '(' => (
            left.map_or(true, |left| OPERAND_PREFIXES.contains(&left)),
            right.map_or(false, |right| !NON_OPERAND_STARTS.contains(&right)),
        ),
        ')' => (
            left.map_or(false, |left| !OPERAND_PREFIXES.contains(&left)),
            right.map_or(true, |right| CLOSING_SUFFIXES.contains(&right)),
        ),
        _ => (
            left.map_or(symbol == '-', |left| {
                symbol == '-' || !OPERAND_PREFIXES.contains(&left)
            }),
            right.map_or(false, |right| !NON_OPERAND_STARTS.contains(&right)),
        ),
    };

    left_valid && right_valid
}

fn left_neighbour(characters: &[char], position: usize) -> Option<char> {
    position.checked_sub(1).map(|left| characters[left])
}
