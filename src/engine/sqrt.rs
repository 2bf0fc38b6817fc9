// ============================================================================
// Square Root
// Newton iteration with guard digits and a final floor correction
// ============================================================================

use super::add_sub::{add, add_exact, sub};
use super::divide::div;
use super::multiply::mul_exact;
use crate::numeric::{Decimal, DigitVec, NumericError, NumericResult};

/// Newton converges in a handful of steps once the guess is in range; the
/// bound only caps pathological non-convergence of the truncated iteration.
const MAX_ITERATIONS: usize = 128;

/// Square root of `value` to `scale` fractional digits, truncated (never
/// rounded): the result is the largest `scale`-digit decimal whose square
/// does not exceed `value`.
///
/// # Errors
/// Returns `InvalidOperand` if `value` is negative.
///
/// # Example
/// ```
/// use arbdec::engine::sqrt;
/// use arbdec::numeric::Decimal;
///
/// let two = Decimal::parse("2").unwrap();
/// assert_eq!(sqrt(&two, 5).unwrap().to_string(), "1.41421");
/// ```
pub fn sqrt(value: &Decimal, scale: usize) -> NumericResult<Decimal> {
    if value.is_negative() {
        return Err(NumericError::InvalidOperand);
    }
    if value.is_zero() {
        return Ok(Decimal::zero().rescaled(scale));
    }

    // Two guard digits keep truncation noise in the iteration below the
    // digits we will keep.
    let work_scale = scale + 2;
    let two = add_exact(&Decimal::one(), &Decimal::one());

    let mut guess = initial_guess(value);
    for _ in 0..MAX_ITERATIONS {
        // x' = (x + value/x) / 2
        let quotient = div(value, &guess, work_scale)?;
        let next = div(&add_exact(&guess, &quotient), &two, work_scale)?;
        if next == guess {
            break;
        }
        guess = next;
    }

    // The iteration lands within one unit of the truncated root; walk the
    // last digit until root^2 <= value < (root + ulp)^2 holds exactly.
    let mut root = guess.rescaled(scale);
    let ulp = Decimal::unit_in_last_place(scale);
    while mul_exact(&root, &root) > *value {
        root = sub(&root, &ulp, scale);
    }
    loop {
        let next = add(&root, &ulp, scale);
        if mul_exact(&next, &next) <= *value {
            root = next;
        } else {
            break;
        }
    }

    Ok(root)
}

/// Starting point with about half the integer digit count, the right order
/// of magnitude for the root.
fn initial_guess(value: &Decimal) -> Decimal {
    let int_digits = value.integer_digits();
    if int_digits == [0] {
        return Decimal::one();
    }
    let half = int_digits.len().div_ceil(2);
    let mut digits = DigitVec::from_elem(0, half);
    digits[0] = 1;
    Decimal::from_parts(false, digits, DigitVec::new())
}

// ============================================================================
// Tests
// ============================================================================
