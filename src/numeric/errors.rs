// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or operating on decimal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a canonical decimal (`-?\d+(\.\d+)?`)
    ParseError(String),
    /// Attempted division or modulus by zero
    DivisionByZero,
    /// Exponent is negative where only non-negative is defined, or
    /// exceeds the supported machine-integer range
    InvalidExponent,
    /// Operand outside the operation's domain (negative square root)
    InvalidOperand,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::ParseError(input) => {
                write!(f, "invalid decimal number: {:?}", input)
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidExponent => {
                write!(f, "invalid exponent: must be a supported non-negative integer")
            },
            NumericError::InvalidOperand => {
                write!(f, "invalid operand: outside the operation's domain")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for decimal operations
pub type NumericResult<T> = Result<T, NumericError>;
