// ============================================================================
// Arbdec Library
// Arbitrary-precision signed decimal arithmetic with explicit truncation
// ============================================================================

//! # Arbdec
//!
//! Arbitrary-precision signed decimal arithmetic with caller-controlled
//! truncation scale.
//!
//! ## Features
//!
//! - **Exact digit-sequence arithmetic** with no floating point anywhere
//!   in the computation path
//! - **Truncation, never rounding**: results are cut to the requested
//!   scale by dropping digits, so `1.999 + 0.000` at scale 2 is `1.99`
//! - **Nine operations**: add, sub, mul, div, mod, comp, pow, powmod, sqrt
//! - **Heterogeneous inputs**: integers, floats, and strings in standard
//!   or scientific notation, normalized at the facade boundary
//! - **Pure engine**: every operation is a pure function of operands and
//!   scale; the only mutable state is the facade's default-scale registry
//!
//! ## Example
//!
//! ```rust
//! use arbdec::prelude::*;
//!
//! let math = BigMath::with_scale(2);
//!
//! assert_eq!(math.add("1.5", "2.25", None).unwrap(), "3.75");
//! assert_eq!(math.div(10, 3, Some(4)).unwrap(), "3.3333");
//! assert_eq!(math.modulo(10, 3).unwrap(), "1");
//! assert_eq!(math.pow(2, 10, Some(0)).unwrap(), "1024");
//! assert_eq!(math.sqrt("2", Some(5)).unwrap(), "1.41421");
//!
//! // Inputs may arrive in scientific notation
//! assert_eq!(math.mul("1.5e3", "2", Some(0)).unwrap(), "3000");
//! ```
//!
//! The engine layer is public for callers who already hold parsed
//! [`numeric::Decimal`] values and want to skip normalization:
//!
//! ```rust
//! use arbdec::engine;
//! use arbdec::numeric::Decimal;
//!
//! let a = Decimal::parse("10").unwrap();
//! let b = Decimal::parse("3").unwrap();
//! assert_eq!(engine::div(&a, &b, 4).unwrap().to_string(), "3.3333");
//! ```

pub mod engine;
pub mod facade;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::facade::{BigMath, Number, ScaleRegistry};
    pub use crate::numeric::{Decimal, NumericError, NumericResult};
}
