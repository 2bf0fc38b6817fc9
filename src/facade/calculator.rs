// ============================================================================
// BigMath Facade
// Caller-facing surface: normalization, default scale, string results
// ============================================================================

use super::context::ScaleRegistry;
use super::normalize::Number;
use crate::engine;
use crate::numeric::{Decimal, NumericResult};
use std::cmp::Ordering;

/// Arbitrary-precision calculator over heterogeneous inputs.
///
/// Operands may be machine integers, floats, or strings (standard or
/// scientific notation); results come back as decimal strings carrying
/// exactly the effective scale's fractional digits. Passing `None` for a
/// scale substitutes the registry default, which starts at 0.
///
/// All digit-level semantics live in [`crate::engine`]; this type only
/// normalizes inputs, resolves the scale, and renders results.
///
/// # Example
/// ```
/// use arbdec::prelude::*;
///
/// let math = BigMath::with_scale(2);
/// assert_eq!(math.add("1.5", "2.25", None).unwrap(), "3.75");
/// assert_eq!(math.div(10, 3, Some(4)).unwrap(), "3.3333");
/// assert_eq!(math.sqrt("2", Some(5)).unwrap(), "1.41421");
/// ```
#[derive(Debug, Default)]
pub struct BigMath {
    scale: ScaleRegistry,
}

impl BigMath {
    /// Calculator with default scale 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with the given default scale.
    pub fn with_scale(scale: usize) -> Self {
        Self {
            scale: ScaleRegistry::new(scale),
        }
    }

    /// Replace the default scale, returning the previous value.
    pub fn set_scale(&self, scale: usize) -> usize {
        let previous = self.scale.set(scale);
        tracing::debug!("default scale changed: {} -> {}", previous, scale);
        previous
    }

    /// Current default scale.
    pub fn default_scale(&self) -> usize {
        self.scale.get()
    }

    /// Sum of `a` and `b`, truncated to the effective scale.
    pub fn add(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
        scale: Option<usize>,
    ) -> NumericResult<String> {
        let scale = self.effective(scale);
        let (a, b) = (operand(a)?, operand(b)?);
        Ok(engine::add(&a, &b, scale).to_string())
    }

    /// Difference `a - b`, truncated to the effective scale.
    pub fn sub(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
        scale: Option<usize>,
    ) -> NumericResult<String> {
        let scale = self.effective(scale);
        let (a, b) = (operand(a)?, operand(b)?);
        Ok(engine::sub(&a, &b, scale).to_string())
    }

    /// Product of `a` and `b`, truncated to the effective scale.
    pub fn mul(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
        scale: Option<usize>,
    ) -> NumericResult<String> {
        let scale = self.effective(scale);
        let (a, b) = (operand(a)?, operand(b)?);
        Ok(engine::mul(&a, &b, scale).to_string())
    }

    /// Quotient `a / b` with the effective scale's fractional digits.
    ///
    /// # Errors
    /// `DivisionByZero` when `b` is zero.
    pub fn div(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
        scale: Option<usize>,
    ) -> NumericResult<String> {
        let scale = self.effective(scale);
        let (a, b) = (operand(a)?, operand(b)?);
        Ok(engine::div(&a, &b, scale)?.to_string())
    }

    /// Integer remainder of `a / b`; fractional digits of both operands are
    /// discarded first, and the result follows the dividend's sign.
    ///
    /// There is no scale parameter: the operation is integer-valued by
    /// definition and renders without fractional digits.
    ///
    /// # Errors
    /// `DivisionByZero` when the truncated modulus is zero.
    pub fn modulo(&self, a: impl Into<Number>, b: impl Into<Number>) -> NumericResult<String> {
        let (a, b) = (operand(a)?, operand(b)?);
        Ok(engine::rem(&a, &b)?.to_string())
    }

    /// Compare `a` and `b` after truncating both to the effective scale:
    /// -1 when `a < b`, 0 when equal, 1 when `a > b`.
    pub fn comp(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
        scale: Option<usize>,
    ) -> NumericResult<i32> {
        let scale = self.effective(scale);
        let (a, b) = (operand(a)?, operand(b)?);
        Ok(match engine::comp(&a, &b, scale) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }

    /// `base` raised to an integer `exponent`, truncated to the effective
    /// scale. The exponent's fractional digits are ignored.
    ///
    /// # Errors
    /// `InvalidExponent` for exponents beyond `i64`; `DivisionByZero` for a
    /// zero base with a negative exponent.
    pub fn pow(
        &self,
        base: impl Into<Number>,
        exponent: impl Into<Number>,
        scale: Option<usize>,
    ) -> NumericResult<String> {
        let scale = self.effective(scale);
        let (base, exponent) = (operand(base)?, operand(exponent)?);
        Ok(engine::pow(&base, &exponent, scale)?.to_string())
    }

    /// `base ^ exponent mod modulus` over integer parts; the effective
    /// scale only pads the rendered result.
    ///
    /// # Errors
    /// `DivisionByZero` when the truncated modulus is zero;
    /// `InvalidExponent` when the truncated exponent is negative.
    pub fn pow_mod(
        &self,
        base: impl Into<Number>,
        exponent: impl Into<Number>,
        modulus: impl Into<Number>,
        scale: Option<usize>,
    ) -> NumericResult<String> {
        let scale = self.effective(scale);
        let (base, exponent, modulus) = (operand(base)?, operand(exponent)?, operand(modulus)?);
        Ok(engine::pow_mod(&base, &exponent, &modulus, scale)?.to_string())
    }

    /// Square root truncated to the effective scale.
    ///
    /// # Errors
    /// `InvalidOperand` for negative input.
    pub fn sqrt(&self, value: impl Into<Number>, scale: Option<usize>) -> NumericResult<String> {
        let scale = self.effective(scale);
        let value = operand(value)?;
        Ok(engine::sqrt(&value, scale)?.to_string())
    }

    fn effective(&self, scale: Option<usize>) -> usize {
        scale.unwrap_or_else(|| self.scale.get())
    }
}

fn operand(n: impl Into<Number>) -> NumericResult<Decimal> {
    n.into().to_decimal()
}

// ============================================================================
// Tests
// ============================================================================
