//! Error types shared by every fallible operation in the crate.

use thiserror::Error;

/// Result type for polynomial and field operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for polynomial and field operations.
///
/// All variants are deterministic functions of the inputs: retrying the
/// same call with the same arguments always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was rejected: a non-prime characteristic, a negative
    /// polynomial exponent, a non-primitive quotient, operands from
    /// different contexts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Division (or reduction) by the zero polynomial or the zero field element.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    /// An operation that is undefined in this engine, such as reducing
    /// modulo a nonzero constant.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// A long-running operation observed its cancellation token.
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::invalid("characteristic 4 is not prime").to_string(),
            "invalid argument: characteristic 4 is not prime"
        );
        assert_eq!(
            Error::DivisionByZero("eucdiv").to_string(),
            "division by zero: eucdiv"
        );
        assert_eq!(Error::Cancelled.to_string(), "operation cancelled");
    }
}
