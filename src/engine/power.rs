// ============================================================================
// Exponentiation
// Binary exponentiation, with modular reduction for pow_mod
// ============================================================================

use super::add_sub::add_exact;
use super::divide::{div, rem};
use super::multiply::mul_exact;
use crate::numeric::{Decimal, NumericError, NumericResult};

/// Raise `base` to an integer power and truncate to `scale` fractional
/// digits.
///
/// Fractional digits of `exponent` are ignored; the remaining integer must
/// fit a machine word. A zero exponent yields one. A negative exponent is
/// computed as the truncated reciprocal of the exact positive power, with
/// the same truncation rule as `div`.
///
/// # Errors
/// - `InvalidExponent` if the exponent's integer part overflows `i64`.
/// - `DivisionByZero` for a zero base with a negative exponent.
pub fn pow(base: &Decimal, exponent: &Decimal, scale: usize) -> NumericResult<Decimal> {
    let e = integer_exponent(exponent)?;
    if e == 0 {
        return Ok(Decimal::one().rescaled(scale));
    }

    let raised = raise(base, e.unsigned_abs());
    if e > 0 {
        Ok(raised.rescaled(scale))
    } else {
        if base.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        div(&Decimal::one(), &raised, scale)
    }
}

/// Modular exponentiation: `base ^ exponent mod modulus` over the operands'
/// integer parts, reducing after every multiplication so intermediates never
/// exceed `modulus^2` in magnitude.
///
/// The exponent stays arbitrary precision: the binary method halves its
/// digit sequence instead of converting to a machine word. The remainder
/// convention is truncated division, so a negative base with an odd exponent
/// gives a negative result. `scale` only zero-pads the rendered result.
///
/// # Errors
/// - `DivisionByZero` if the truncated modulus is zero.
/// - `InvalidExponent` if the truncated exponent is negative.
pub fn pow_mod(
    base: &Decimal,
    exponent: &Decimal,
    modulus: &Decimal,
    scale: usize,
) -> NumericResult<Decimal> {
    let m = modulus.trunc();
    if m.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    let mut e = exponent.trunc();
    if e.is_negative() {
        return Err(NumericError::InvalidExponent);
    }

    let two = add_exact(&Decimal::one(), &Decimal::one());
    let mut result = Decimal::one();
    let mut square = rem(&base.trunc(), &m)?;

    while !e.is_zero() {
        if is_odd(&e) {
            result = rem(&mul_exact(&result, &square), &m)?;
        }
        e = div(&e, &two, 0)?;
        if !e.is_zero() {
            square = rem(&mul_exact(&square, &square), &m)?;
        }
    }

    // Covers modulus one, where even base^0 must reduce to zero
    Ok(rem(&result, &m)?.rescaled(scale))
}

/// Exact `base^n` by repeated squaring; no intermediate truncation.
fn raise(base: &Decimal, mut n: u64) -> Decimal {
    let mut result = Decimal::one();
    let mut square = base.clone();
    while n > 0 {
        if n & 1 == 1 {
            result = mul_exact(&result, &square);
        }
        n >>= 1;
        if n > 0 {
            square = mul_exact(&square, &square);
        }
    }
    result
}

/// The exponent's integer part as an `i64`; fractional digits are ignored.
fn integer_exponent(exponent: &Decimal) -> NumericResult<i64> {
    let mut acc: i64 = 0;
    for &d in exponent.integer_digits() {
        acc = acc
            .checked_mul(10)
            .and_then(|acc| acc.checked_add(i64::from(d)))
            .ok_or(NumericError::InvalidExponent)?;
    }
    Ok(if exponent.is_negative() { -acc } else { acc })
}

fn is_odd(value: &Decimal) -> bool {
    value.integer_digits().last().is_some_and(|&d| d % 2 == 1)
}

// ============================================================================
// Tests
// ============================================================================
