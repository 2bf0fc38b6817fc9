// ============================================================================
// Addition and Subtraction
// Signed digit addition over magnitude-aligned operands
// ============================================================================

use crate::numeric::{Decimal, DigitVec};
use std::cmp::Ordering;

/// Add two decimals and truncate (never round) the result to `scale`
/// fractional digits, zero-padding when the exact sum is shorter.
///
/// # Example
/// ```
/// use arbdec::engine::add;
/// use arbdec::numeric::Decimal;
///
/// let a = Decimal::parse("1.999").unwrap();
/// let b = Decimal::parse("0.000").unwrap();
/// assert_eq!(add(&a, &b, 2).to_string(), "1.99");
/// ```
pub fn add(a: &Decimal, b: &Decimal, scale: usize) -> Decimal {
    add_exact(a, b).rescaled(scale)
}

/// Subtract `b` from `a` and truncate the result to `scale` fractional
/// digits. An exact zero result is positive.
pub fn sub(a: &Decimal, b: &Decimal, scale: usize) -> Decimal {
    sub_exact(a, b).rescaled(scale)
}

/// Exact signed sum at the wider of the two operand scales.
pub(crate) fn add_exact(a: &Decimal, b: &Decimal) -> Decimal {
    if a.is_negative() == b.is_negative() {
        // Same sign: magnitudes add, sign carries over
        return add_magnitudes(a, b, a.is_negative());
    }

    // Opposite signs: subtract the smaller magnitude from the larger;
    // the larger operand decides the sign
    match a.cmp_abs(b) {
        Ordering::Greater | Ordering::Equal => sub_magnitudes(a, b, a.is_negative()),
        Ordering::Less => sub_magnitudes(b, a, b.is_negative()),
    }
}

/// Exact signed difference `a - b`.
pub(crate) fn sub_exact(a: &Decimal, b: &Decimal) -> Decimal {
    if a.is_negative() != b.is_negative() {
        return add_magnitudes(a, b, a.is_negative());
    }
    match a.cmp_abs(b) {
        Ordering::Greater | Ordering::Equal => sub_magnitudes(a, b, a.is_negative()),
        Ordering::Less => sub_magnitudes(b, a, !b.is_negative()),
    }
}

/// Schoolbook digit addition of `|a| + |b|`, right-aligned at the wider
/// fraction.
fn add_magnitudes(a: &Decimal, b: &Decimal, negative: bool) -> Decimal {
    let scale = a.scale().max(b.scale());
    let ad = a.digits_at_scale(scale);
    let bd = b.digits_at_scale(scale);
    let len = ad.len().max(bd.len());

    let mut out = DigitVec::from_elem(0, len + 1);
    let mut carry = 0u8;
    for k in 0..len {
        let x = digit_from_right(&ad, k);
        let y = digit_from_right(&bd, k);
        let sum = x + y + carry;
        out[len - k] = sum % 10;
        carry = sum / 10;
    }
    out[0] = carry;

    split_at_scale(out, scale, negative)
}

/// Schoolbook digit subtraction of `|a| - |b|`. Caller guarantees
/// `|a| >= |b|`.
fn sub_magnitudes(a: &Decimal, b: &Decimal, negative: bool) -> Decimal {
    let scale = a.scale().max(b.scale());
    let ad = a.digits_at_scale(scale);
    let bd = b.digits_at_scale(scale);
    let len = ad.len().max(bd.len());

    let mut out = DigitVec::from_elem(0, len);
    let mut borrow = 0i8;
    for k in 0..len {
        let x = digit_from_right(&ad, k) as i8;
        let y = digit_from_right(&bd, k) as i8;
        let mut diff = x - y - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out[len - 1 - k] = diff as u8;
    }

    split_at_scale(out, scale, negative)
}

#[inline]
fn digit_from_right(digits: &[u8], k: usize) -> u8 {
    if k < digits.len() {
        digits[digits.len() - 1 - k]
    } else {
        0
    }
}

/// Interpret the last `scale` digits of the buffer as the fraction and
/// the rest as the integer part.
pub(crate) fn split_at_scale(mut digits: DigitVec, scale: usize, negative: bool) -> Decimal {
    let int_len = digits.len().saturating_sub(scale);
    let fraction: DigitVec = digits[int_len..].iter().copied().collect();
    digits.truncate(int_len);
    Decimal::from_parts(negative, digits, fraction)
}

// ============================================================================
// Tests
// ============================================================================
