// ============================================================================
// Numeric Errors
// Error types for fixed-scale decimal construction and arithmetic
// ============================================================================
//
// Values are backed by an unbounded integer significand, so there is no
// overflow or underflow class: every sum, difference and product exists.

use std::fmt;

/// Errors that can occur while building or combining scaled decimal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string or float does not denote a finite decimal number
    InvalidInput,
    /// Divisor's normalized value is zero
    DivisionByZero,
    /// Persisted bytes are truncated or carry a foreign scale
    InvalidEncoding,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidEncoding => {
                write!(f, "invalid encoding: bytes do not hold a value of this scale")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
