use thiserror::Error;

/// Failures of fallible big number operations.
///
/// Contract violations (a modulus of one for an inverse, a radix outside `2..=36`)
/// are not represented here; those panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigNumError {
    #[error("attempt to divide by zero")]
    DivisionByZero,
    #[error("attempt to subtract with overflow")]
    Underflow,
    #[error("modulus must be nonzero")]
    InvalidModulus,
    #[error("value is too large for the target type")]
    TooLarge,
    #[error("value is negative")]
    Negative,
    #[error("value is too small for the target type")]
    TooSmall,
    #[error(transparent)]
    Parse(#[from] ParseBigNumError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBigNumError {
    #[error("cannot parse number from empty string")]
    Empty,
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },
}

pub type Result<T> = std::result::Result<T, BigNumError>;

#[test]
fn test_error_messages() {
    assert_eq!(BigNumError::DivisionByZero.to_string(), "attempt to divide by zero");
    let parse = ParseBigNumError::InvalidDigit { digit: 'x', radix: 10 };
    assert_eq!(parse.to_string(), "invalid digit 'x' for radix 10");
    assert_eq!(BigNumError::from(parse.clone()).to_string(), parse.to_string());
}
