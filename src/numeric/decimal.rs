// ============================================================================
// Arbitrary-Precision Decimal
// Signed digit-sequence decimal value with explicit per-value scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;

/// Digit buffer; operands up to 16 digits stay inline.
pub(crate) type DigitVec = SmallVec<[u8; 16]>;

/// Arbitrary-precision signed decimal number.
///
/// Internally stores base-10 digits, most-significant first, split at the
/// decimal point. The length of the fractional digit sequence IS the value's
/// scale: trailing fractional zeros are retained so that a result truncated
/// to scale 4 renders as `3.3300`, not `3.33`.
///
/// Values are immutable; every arithmetic operation produces a new value.
///
/// # Invariants
/// - Digits are 0-9.
/// - The integer digit sequence is non-empty and carries no leading zeros
///   (value zero is the single digit `0`).
/// - Zero is never negative.
///
/// # Example
/// ```
/// use arbdec::numeric::Decimal;
///
/// let a: Decimal = "-12.500".parse().unwrap();
/// assert_eq!(a.scale(), 3);
/// assert_eq!(a.to_string(), "-12.500");
/// assert_eq!(a.rescaled(1).to_string(), "-12.5");
/// ```
#[derive(Debug, Clone)]
pub struct Decimal {
    /// Sign flag; zero is always stored non-negative
    negative: bool,
    /// Integer digits, most-significant first, no leading zeros
    integer: DigitVec,
    /// Fractional digits, most-significant first; length == scale
    fraction: DigitVec,
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value zero at scale 0.
    pub fn zero() -> Self {
        Self {
            negative: false,
            integer: smallvec![0],
            fraction: DigitVec::new(),
        }
    }

    /// The value one at scale 0.
    pub fn one() -> Self {
        Self {
            negative: false,
            integer: smallvec![1],
            fraction: DigitVec::new(),
        }
    }

    /// Build a value from raw parts, restoring the invariants: leading
    /// integer zeros are stripped and an exact zero loses its sign. The
    /// fraction is kept verbatim, including trailing zeros.
    pub(crate) fn from_parts(negative: bool, integer: DigitVec, fraction: DigitVec) -> Self {
        let mut value = Self {
            negative,
            integer,
            fraction,
        };

        if value.integer.is_empty() {
            value.integer.push(0);
        } else {
            let lead = value
                .integer
                .iter()
                .position(|&d| d != 0)
                .unwrap_or(value.integer.len() - 1);
            if lead > 0 {
                value.integer.drain(..lead);
            }
        }

        if value.is_zero() {
            value.negative = false;
        }
        value
    }

    /// The smallest positive value at the given scale (`10^-scale`).
    pub(crate) fn unit_in_last_place(scale: usize) -> Self {
        if scale == 0 {
            return Self::one();
        }
        let mut fraction = DigitVec::from_elem(0, scale);
        fraction[scale - 1] = 1;
        Self {
            negative: false,
            integer: smallvec![0],
            fraction,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of fractional digits carried by this value.
    #[inline]
    pub fn scale(&self) -> usize {
        self.fraction.len()
    }

    /// Check if the value is exactly zero (at any scale).
    pub fn is_zero(&self) -> bool {
        self.integer.iter().all(|&d| d == 0) && self.fraction.iter().all(|&d| d == 0)
    }

    /// Check if the value is negative. Zero is never negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub(crate) fn integer_digits(&self) -> &[u8] {
        &self.integer
    }

    /// Concatenated integer and fraction digits, with the fraction padded or
    /// truncated to exactly `scale` digits. This is the operand form the
    /// digit algorithms work on.
    pub(crate) fn digits_at_scale(&self, scale: usize) -> DigitVec {
        let mut digits = self.integer.clone();
        for i in 0..scale {
            digits.push(self.fraction.get(i).copied().unwrap_or(0));
        }
        digits
    }

    /// All digits at this value's own scale.
    pub(crate) fn digits(&self) -> DigitVec {
        self.digits_at_scale(self.scale())
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// Absolute value.
    pub fn abs(&self) -> Self {
        let mut value = self.clone();
        value.negative = false;
        value
    }

    /// Copy with the fraction truncated (never rounded) or zero-padded to
    /// exactly `scale` digits. Truncation that erases every significant
    /// digit yields plain zero.
    pub fn rescaled(&self, scale: usize) -> Self {
        let mut fraction = self.fraction.clone();
        if fraction.len() > scale {
            fraction.truncate(scale);
        } else {
            fraction.resize(scale, 0);
        }
        Self::from_parts(self.negative, self.integer.clone(), fraction)
    }

    /// Integer part (truncated toward zero, scale 0).
    pub fn trunc(&self) -> Self {
        self.rescaled(0)
    }

    // ========================================================================
    // Comparison plumbing
    // ========================================================================

    /// Compare absolute values: integer digit count, then integer digits,
    /// then fraction digits with implicit trailing zeros.
    pub(crate) fn cmp_abs(&self, other: &Self) -> Ordering {
        match self.integer.len().cmp(&other.integer.len()) {
            Ordering::Equal => {},
            unequal => return unequal,
        }
        match self.integer.cmp(&other.integer) {
            Ordering::Equal => {},
            unequal => return unequal,
        }

        let max_scale = self.scale().max(other.scale());
        for i in 0..max_scale {
            let a = self.fraction.get(i).copied().unwrap_or(0);
            let b = other.fraction.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {},
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    /// Numeric ordering: `1.50 == 1.5`, sign before magnitude.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_abs(other),
            (true, true) => other.cmp_abs(self),
        }
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Trailing fractional zeros do not affect equality, so they must
        // not affect the hash either.
        self.negative.hash(state);
        self.integer.hash(state);
        let significant = self
            .fraction
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |i| i + 1);
        self.fraction[..significant].hash(state);
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        Self {
            negative: !self.negative,
            integer: self.integer,
            fraction: self.fraction,
        }
    }
}

// ============================================================================
// Parsing and Display
// ============================================================================

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse a canonical decimal string: `-?\d+(\.\d+)?`.
    ///
    /// Scientific notation, a leading `+`, whitespace, or an empty integer
    /// or fractional part are all rejected; input adaptation belongs to the
    /// facade's normalizer, not the engine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || NumericError::ParseError(s.to_string());
        let bytes = s.as_bytes();

        let (negative, rest) = match bytes.first() {
            Some(b'-') => (true, &bytes[1..]),
            _ => (false, bytes),
        };
        if rest.is_empty() {
            return Err(malformed());
        }

        let (int_part, frac_part) = match rest.iter().position(|&b| b == b'.') {
            Some(dot) => (&rest[..dot], Some(&rest[dot + 1..])),
            None => (rest, None),
        };
        if int_part.is_empty() || !int_part.iter().all(u8::is_ascii_digit) {
            return Err(malformed());
        }

        let integer: DigitVec = int_part.iter().map(|b| b - b'0').collect();
        let fraction: DigitVec = match frac_part {
            Some(frac) => {
                if frac.is_empty() || !frac.iter().all(u8::is_ascii_digit) {
                    return Err(malformed());
                }
                frac.iter().map(|b| b - b'0').collect()
            },
            None => DigitVec::new(),
        };

        Ok(Self::from_parts(negative, integer, fraction))
    }
}

impl Decimal {
    /// Parse a canonical decimal string. Convenience wrapper over `FromStr`.
    pub fn parse(s: &str) -> NumericResult<Self> {
        s.parse()
    }
}

impl fmt::Display for Decimal {
    /// Renders exactly `scale()` fractional digits: `3.3300` stays `3.3300`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        for &d in &self.integer {
            write!(f, "{}", d)?;
        }
        if !self.fraction.is_empty() {
            f.write_str(".")?;
            for &d in &self.fraction {
                write!(f, "{}", d)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Serde (canonical string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let x = Decimal::parse("123.456").unwrap();
        assert_eq!(x.integer_digits(), &[1, 2, 3]);
        assert_eq!(x.scale(), 3);
        assert_eq!(x.to_string(), "123.456");
        assert!(!x.is_negative());

        let y = Decimal::parse("-0.001").unwrap();
        assert!(y.is_negative());
        assert_eq!(y.to_string(), "-0.001");

        let z = Decimal::parse("42").unwrap();
        assert_eq!(z.scale(), 0);
        assert_eq!(z.to_string(), "42");
    }

    #[test]
    fn test_parse_strips_leading_zeros() {
        let x = Decimal::parse("00123").unwrap();
        assert_eq!(x.integer_digits(), &[1, 2, 3]);

        let y = Decimal::parse("000").unwrap();
        assert_eq!(y.integer_digits(), &[0]);
        assert!(y.is_zero());
    }

    #[test]
    fn test_parse_keeps_trailing_fraction_zeros() {
        let x = Decimal::parse("1.500").unwrap();
        assert_eq!(x.scale(), 3);
        assert_eq!(x.to_string(), "1.500");
    }

    #[test]
    fn test_parse_negative_zero_normalizes() {
        let x = Decimal::parse("-0").unwrap();
        assert!(x.is_zero());
        assert!(!x.is_negative());
        assert_eq!(x.to_string(), "0");

        let y = Decimal::parse("-0.000").unwrap();
        assert!(!y.is_negative());
        assert_eq!(y.to_string(), "0.000");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "", "-", ".", "1.", ".5", "1.2.3", "+1", "1e5", " 1", "1 ", "abc", "--1", "1.-2",
        ] {
            let result = Decimal::parse(input);
            assert!(
                matches!(result, Err(NumericError::ParseError(_))),
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_rescaled_truncates_and_pads() {
        let x = Decimal::parse("1.999").unwrap();
        assert_eq!(x.rescaled(2).to_string(), "1.99");
        assert_eq!(x.rescaled(0).to_string(), "1");
        assert_eq!(x.rescaled(5).to_string(), "1.99900");
    }

    #[test]
    fn test_rescaled_zero_loses_sign() {
        let x = Decimal::parse("-0.4").unwrap();
        let truncated = x.rescaled(0);
        assert!(truncated.is_zero());
        assert!(!truncated.is_negative());
        assert_eq!(truncated.to_string(), "0");
    }

    #[test]
    fn test_trunc() {
        assert_eq!(Decimal::parse("-12.9").unwrap().trunc().to_string(), "-12");
        assert_eq!(Decimal::parse("0.9").unwrap().trunc().to_string(), "0");
    }

    #[test]
    fn test_numeric_equality_ignores_trailing_zeros() {
        let a = Decimal::parse("1.5").unwrap();
        let b = Decimal::parse("1.50").unwrap();
        assert_eq!(a, b);

        let mut hasher_a = std::collections::hash_map::DefaultHasher::new();
        let mut hasher_b = std::collections::hash_map::DefaultHasher::new();
        a.hash(&mut hasher_a);
        b.hash(&mut hasher_b);
        assert_eq!(hasher_a.finish(), hasher_b.finish());
    }

    #[test]
    fn test_ordering() {
        let parse = |s: &str| Decimal::parse(s).unwrap();
        assert!(parse("2") > parse("1.999"));
        assert!(parse("-2") < parse("-1.999"));
        assert!(parse("-1") < parse("0"));
        assert!(parse("0.0001") > parse("0"));
        assert!(parse("10") > parse("9.99"));
        assert_eq!(parse("0.00"), parse("0"));
    }

    #[test]
    fn test_negation() {
        let x = Decimal::parse("1.5").unwrap();
        assert_eq!((-x).to_string(), "-1.5");

        let zero = Decimal::parse("0.00").unwrap();
        assert!(!(-zero).is_negative());
    }

    #[test]
    fn test_unit_in_last_place() {
        assert_eq!(Decimal::unit_in_last_place(0).to_string(), "1");
        assert_eq!(Decimal::unit_in_last_place(3).to_string(), "0.001");
    }

    #[test]
    fn test_digits_at_scale() {
        let x = Decimal::parse("12.34").unwrap();
        assert_eq!(x.digits_at_scale(4).as_slice(), &[1, 2, 3, 4, 0, 0]);
        assert_eq!(x.digits_at_scale(0).as_slice(), &[1, 2]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let x = Decimal::parse("-12.500").unwrap();
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"-12.500\"");
        let back: Decimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "-12.500");
    }
}
