// ============================================================================
// Multiplication
// Schoolbook long multiplication over concatenated digit sequences
// ============================================================================

use super::add_sub::split_at_scale;
use crate::numeric::{Decimal, DigitVec};

/// Multiply two decimals exactly, then truncate (never round) to `scale`
/// fractional digits, zero-padding when the exact product is shorter.
///
/// The exact product places the decimal point at the sum of the operand
/// scales, so no precision is lost before the final truncation.
pub fn mul(a: &Decimal, b: &Decimal, scale: usize) -> Decimal {
    mul_exact(a, b).rescaled(scale)
}

/// Exact product at the sum of the operand scales.
pub(crate) fn mul_exact(a: &Decimal, b: &Decimal) -> Decimal {
    let total_frac = a.scale() + b.scale();
    let ad = a.digits();
    let bd = b.digits();

    // Digit-by-digit accumulation; a position is normalized below 10 the
    // last time it absorbs a cross product, so u32 cells are plenty.
    let mut acc = vec![0u32; ad.len() + bd.len()];
    for (i, &x) in ad.iter().enumerate().rev() {
        for (j, &y) in bd.iter().enumerate().rev() {
            let low = i + j + 1;
            let sum = u32::from(x) * u32::from(y) + acc[low];
            acc[low] = sum % 10;
            acc[i + j] += sum / 10;
        }
    }

    let digits: DigitVec = acc.iter().map(|&d| d as u8).collect();
    split_at_scale(digits, total_frac, a.is_negative() != b.is_negative())
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
    fn test_mul_integers() {
        assert_eq!(mul(&dec("3"), &dec("4"), 0).to_string(), "12");
        assert_eq!(mul(&dec("999"), &dec("999"), 0).to_string(), "998001");
        assert_eq!(mul(&dec("0"), &dec("100"), 0).to_string(), "0");
    }

    #[test]
    fn test_mul_signs() {
        assert_eq!(mul(&dec("-3"), &dec("4"), 0).to_string(), "-12");
        assert_eq!(mul(&dec("3"), &dec("-4"), 0).to_string(), "-12");
        assert_eq!(mul(&dec("-3"), &dec("-4"), 0).to_string(), "12");
    }

    #[test]
    fn test_mul_zero_is_positive() {
        let result = mul(&dec("-5"), &dec("0"), 2);
        assert!(!result.is_negative());
        assert_eq!(result.to_string(), "0.00");
    }

    #[test]
    fn test_mul_point_placement() {
        assert_eq!(mul(&dec("1.5"), &dec("2.0"), 1).to_string(), "3.0");
        assert_eq!(mul(&dec("2.5"), &dec("4"), 2).to_string(), "10.00");
        assert_eq!(mul(&dec("0.1"), &dec("0.1"), 2).to_string(), "0.01");
        assert_eq!(mul(&dec("0.001"), &dec("0.001"), 6).to_string(), "0.000001");
    }

    #[test]
    fn test_mul_truncates_not_rounds() {
        // 1.05 * 1.05 = 1.1025; scale 2 keeps 1.10
        assert_eq!(mul(&dec("1.05"), &dec("1.05"), 2).to_string(), "1.10");
        // 0.1 * 0.1 = 0.01; scale 1 truncates to 0.0
        assert_eq!(mul(&dec("0.1"), &dec("0.1"), 1).to_string(), "0.0");
    }

    #[test]
    fn test_mul_large_operands() {
        assert_eq!(
            mul(&dec("123456789123456789"), &dec("987654321"), 0).to_string(),
            "121932631234567900112635269"
        );
    }

    #[test]
    fn test_mul_exact_scale_is_sum_of_scales() {
        let exact = mul_exact(&dec("1.25"), &dec("0.5"));
        assert_eq!(exact.scale(), 3);
        assert_eq!(exact.to_string(), "0.625");
    }
}
