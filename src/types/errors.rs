use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("Numeric error: {0}")]
    InvalidFormat(String),
    #[error("Numeric error: value has more than 7 digits after the decimal point")]
    TooManyDecimalPlaces,
    #[error("Numeric error: value is negative")]
    Negative,
    #[error("Numeric error: value is zero")]
    Zero,
    #[error("Numeric error: Overflow")]
    Overflow,
    #[error("price must be positive")]
    NonPositivePrice,
    #[error("Numeric error: division by zero")]
    DivisionByZero,
    #[error("Couldn't find approximation")]
    NoApproximation
}
