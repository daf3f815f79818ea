use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvaluationError>;

/// Everything that can go wrong while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// An operator or parenthesis is in a position it is not allowed in,
    /// or a run of characters is not a number.
    #[error("invalid symbol sequence encountered at position {position}: '{fragment}'")]
    InvalidSyntax { position: usize, fragment: String },

    #[error("invalid parenthesis sequence encountered")]
    UnbalancedParentheses,

    /// The operators and operands do not add up to a single value.
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
}

/// The category of an [`EvaluationError`], without its details.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSyntax,
    UnbalancedParentheses,
    MalformedExpression,
}

impl EvaluationError {
    pub(crate) fn invalid_syntax(position: usize, fragment: impl Into<String>) -> Self {
        EvaluationError::InvalidSyntax {
            position,
            fragment: fragment.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        EvaluationError::MalformedExpression(reason.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EvaluationError::InvalidSyntax { .. } => ErrorKind::InvalidSyntax,
            EvaluationError::UnbalancedParentheses => ErrorKind::UnbalancedParentheses,
            EvaluationError::MalformedExpression(_) => ErrorKind::MalformedExpression,
        }
    }
}
