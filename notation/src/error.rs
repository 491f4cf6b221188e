#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalErr {
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("invalid character: {0}")]
    InvalidCharacter(String),
    #[error("consecutive operators")]
    ConsecutiveOperators,
    #[error("division by zero")]
    DivisionByZero,
    #[error("logarithm argument must be positive")]
    LogDomainError,
    #[error("invalid expression")]
    InvalidExpression,
    #[error("empty expression")]
    EmptyExpression,
    #[error("invalid negative number")]
    InvalidNegativeNumber,
    #[error("insufficient operands")]
    InsufficientOperands,
    #[error("extra operands left over")]
    ExtraOperands,
    #[error("missing operator")]
    MissingOperator,
    #[error("unknown operator: {0}")]
    UnknownOperator(char),
}
