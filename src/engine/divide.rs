// ============================================================================
// Division and Modulus
// Schoolbook long division with per-digit trial quotients
// ============================================================================

use super::add_sub::{split_at_scale, sub_exact};
use super::multiply::mul_exact;
use crate::numeric::{Decimal, DigitVec, NumericError, NumericResult};
use std::cmp::Ordering;

/// Divide `dividend` by `divisor`, producing exactly `scale` fractional
/// digits. The quotient magnitude is truncated toward zero (never rounded);
/// the sign is the XOR of the operand signs.
///
/// # Errors
/// Returns `DivisionByZero` if `divisor` is exactly zero.
///
/// # Example
/// ```
/// use arbdec::engine::div;
/// use arbdec::numeric::Decimal;
///
/// let a = Decimal::parse("10").unwrap();
/// let b = Decimal::parse("3").unwrap();
/// assert_eq!(div(&a, &b, 4).unwrap().to_string(), "3.3333");
/// ```
pub fn div(dividend: &Decimal, divisor: &Decimal, scale: usize) -> NumericResult<Decimal> {
    if divisor.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    let negative = dividend.is_negative() != divisor.is_negative();

    // With n and d the operands' digit strings read as integers,
    //   dividend / divisor == (n * 10^divisor.scale) / d * 10^-(dividend.scale)
    // so padding n with divisor.scale + scale zeros makes the integer
    // quotient the true quotient scaled by 10^(dividend.scale + scale).
    let mut numerator = dividend.digits();
    numerator.extend(std::iter::repeat(0).take(divisor.scale() + scale));
    let denominator = divisor.digits();

    let quotient = quotient_digits(&numerator, &denominator);
    debug_assert_eq!(quotient.len(), numerator.len());

    // The trailing dividend.scale() digits are surplus precision; dropping
    // them floors an already-floored magnitude, which is still the floor.
    let kept = quotient.len() - dividend.scale();
    let digits: DigitVec = quotient[..kept].iter().copied().collect();
    Ok(split_at_scale(digits, scale, negative))
}

/// Truncated-division remainder of the operands' integer parts.
///
/// Fractional digits of both operands are discarded first, mirroring the
/// integer coercion of bc-style modulus; `rem(10.9, 3.9)` is `rem(10, 3)`.
/// The result carries the dividend's sign and scale 0.
///
/// # Errors
/// Returns `DivisionByZero` if the truncated modulus is zero, including a
/// modulus like `0.5` whose integer part is zero.
pub fn rem(dividend: &Decimal, modulus: &Decimal) -> NumericResult<Decimal> {
    let a = dividend.trunc();
    let m = modulus.trunc();
    if m.is_zero() {
        return Err(NumericError::DivisionByZero);
    }

    // a - trunc(a/m) * m
    let quotient = div(&a, &m, 0)?;
    let product = mul_exact(&quotient, &m);
    Ok(sub_exact(&a, &product))
}

// ============================================================================
// Digit-array long division
// ============================================================================

/// Schoolbook long division of unsigned digit strings. Returns one quotient
/// digit per numerator digit, leading zeros included, so the caller can
/// place the decimal point positionally.
fn quotient_digits(numerator: &[u8], denominator: &[u8]) -> DigitVec {
    let denominator = strip_leading(denominator);
    let mut quotient = DigitVec::with_capacity(numerator.len());
    let mut remainder: Vec<u8> = Vec::with_capacity(denominator.len() + 1);

    for &digit in numerator {
        remainder.push(digit);
        trim_leading(&mut remainder);

        let q = trial_digit(&remainder, denominator);
        if q > 0 {
            let product = mul_single(denominator, q);
            remainder = sub_right_aligned(&remainder, &product);
            trim_leading(&mut remainder);
        }
        quotient.push(q);
    }

    quotient
}

/// Largest digit q in 0..=9 with `q * denominator <= remainder`, found by
/// binary search.
fn trial_digit(remainder: &[u8], denominator: &[u8]) -> u8 {
    let mut lo = 0u8;
    let mut hi = 9u8;
    let mut best = 0u8;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let product = mul_single(denominator, mid);
        if cmp_digits(remainder, &product) != Ordering::Less {
            best = mid;
            if mid == 9 {
                break;
            }
            lo = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            hi = mid - 1;
        }
    }
    best
}

/// Multiply a digit string by a single digit.
fn mul_single(digits: &[u8], d: u8) -> Vec<u8> {
    if d == 0 {
        return vec![0];
    }
    let mut out = vec![0u8; digits.len() + 1];
    let mut carry = 0u16;
    for i in (0..digits.len()).rev() {
        let prod = u16::from(digits[i]) * u16::from(d) + carry;
        out[i + 1] = (prod % 10) as u8;
        carry = prod / 10;
    }
    out[0] = carry as u8;
    out
}

/// Compare digit strings as unsigned integers, tolerating leading zeros.
fn cmp_digits(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading(a);
    let b = strip_leading(b);
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}

/// Subtract `b` from `a`, right-aligned; caller guarantees `a >= b`.
fn sub_right_aligned(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut out = vec![0u8; len];
    let mut borrow = 0i16;

    for k in 0..len {
        let x = if k < a.len() {
            i16::from(a[a.len() - 1 - k])
        } else {
            0
        };
        let y = if k < b.len() {
            i16::from(b[b.len() - 1 - k])
        } else {
            0
        };
        let mut diff = x - y - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out[len - 1 - k] = diff as u8;
    }

    out
}

fn strip_leading(digits: &[u8]) -> &[u8] {
    let start = digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(digits.len().saturating_sub(1));
    &digits[start..]
}

fn trim_leading(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits[0] == 0 {
        digits.remove(0);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    #[test]
    fn test_div_integers() {
        assert_eq!(div(&dec("10"), &dec("3"), 0).unwrap().to_string(), "3");
        assert_eq!(div(&dec("100"), &dec("10"), 0).unwrap().to_string(), "10");
        assert_eq!(div(&dec("1"), &dec("7"), 0).unwrap().to_string(), "0");
    }

    #[test]
    fn test_div_produces_requested_scale() {
        assert_eq!(div(&dec("10"), &dec("3"), 2).unwrap().to_string(), "3.33");
        assert_eq!(div(&dec("10"), &dec("3"), 4).unwrap().to_string(), "3.3333");
        assert_eq!(
            div(&dec("1"), &dec("3"), 10).unwrap().to_string(),
            "0.3333333333"
        );
        assert_eq!(
            div(&dec("22"), &dec("7"), 6).unwrap().to_string(),
            "3.142857"
        );
        assert_eq!(div(&dec("1"), &dec("8"), 3).unwrap().to_string(), "0.125");
    }

    #[test]
    fn test_div_exact_results_zero_pad() {
        assert_eq!(div(&dec("10"), &dec("4"), 4).unwrap().to_string(), "2.5000");
    }

    #[test]
    fn test_div_fractional_operands() {
        assert_eq!(div(&dec("10"), &dec("0.5"), 1).unwrap().to_string(), "20.0");
        assert_eq!(div(&dec("7.5"), &dec("2.5"), 1).unwrap().to_string(), "3.0");
        assert_eq!(
            div(&dec("0.5"), &dec("2"), 2).unwrap().to_string(),
            "0.25"
        );
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        // -10/3 is -3.33..; truncation keeps -3, not -4
        assert_eq!(div(&dec("-10"), &dec("3"), 0).unwrap().to_string(), "-3");
        assert_eq!(div(&dec("10"), &dec("-3"), 0).unwrap().to_string(), "-3");
        assert_eq!(div(&dec("-10"), &dec("-3"), 0).unwrap().to_string(), "3");
    }

    #[test]
    fn test_div_zero_dividend() {
        let result = div(&dec("0"), &dec("5"), 2).unwrap();
        assert!(!result.is_negative());
        assert_eq!(result.to_string(), "0.00");
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(
            div(&dec("10"), &dec("0"), 0),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            div(&dec("10"), &dec("0.000"), 5),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_rem_basic() {
        assert_eq!(rem(&dec("10"), &dec("3")).unwrap().to_string(), "1");
        assert_eq!(rem(&dec("10"), &dec("5")).unwrap().to_string(), "0");
        assert_eq!(rem(&dec("7"), &dec("4")).unwrap().to_string(), "3");
    }

    #[test]
    fn test_rem_sign_follows_dividend() {
        assert_eq!(rem(&dec("-10"), &dec("3")).unwrap().to_string(), "-1");
        assert_eq!(rem(&dec("10"), &dec("-3")).unwrap().to_string(), "1");
        assert_eq!(rem(&dec("-10"), &dec("-3")).unwrap().to_string(), "-1");
    }

    #[test]
    fn test_rem_discards_fractions() {
        // 10.9 mod 3.9 operates on 10 mod 3
        assert_eq!(rem(&dec("10.9"), &dec("3.9")).unwrap().to_string(), "1");
        assert_eq!(rem(&dec("10.5"), &dec("3")).unwrap().to_string(), "1");
    }

    #[test]
    fn test_rem_by_zero() {
        assert_eq!(
            rem(&dec("10"), &dec("0")),
            Err(NumericError::DivisionByZero)
        );
        // A modulus below one truncates to zero before the operation
        assert_eq!(
            rem(&dec("10"), &dec("0.5")),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_rem_result_has_scale_zero() {
        assert_eq!(rem(&dec("10.25"), &dec("4.75")).unwrap().scale(), 0);
    }

    #[test]
    fn test_quotient_digits_keeps_positional_length() {
        let q = quotient_digits(&[1, 0, 0], &[7]);
        assert_eq!(q.as_slice(), &[0, 1, 4]);
    }
}
