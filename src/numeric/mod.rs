// ============================================================================
// Numeric Module
// Arbitrary-precision decimal value type and its error vocabulary
// ============================================================================
//
// This module provides:
// - Decimal: signed digit-sequence decimal with explicit per-value scale
// - NumericError: error types for parsing and arithmetic
//
// Design principles:
// - No floating-point operations
// - Fallible paths return Result (no panics)
// - Values are immutable; operations construct new values

mod decimal;
mod errors;

pub use decimal::Decimal;
pub use errors::{NumericError, NumericResult};

pub(crate) use decimal::DigitVec;
