// ============================================================================
// Number Normalization
// Heterogeneous numeric inputs to canonical decimal strings
// ============================================================================

use crate::numeric::{Decimal, NumericError, NumericResult};

/// A caller-supplied number before normalization: a machine integer, a
/// float, or free-form decimal text (standard or scientific notation).
///
/// The engine only accepts canonical `-?\d+(\.\d+)?` strings; this type is
/// the adapter that gets everything else into that shape. Conversions in:
///
/// ```
/// use arbdec::facade::Number;
///
/// assert_eq!(Number::from(42).canonical().unwrap(), "42");
/// assert_eq!(Number::from(-0.125).canonical().unwrap(), "-0.125");
/// assert_eq!(Number::from("1.5e3").canonical().unwrap(), "1500");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl Number {
    /// Normalize into the engine's canonical decimal string.
    ///
    /// Integers format directly. Floats must be finite; their shortest
    /// round-trip rendering is used (Rust never formats floats in
    /// scientific notation via `Display`). Text may carry a leading `+`,
    /// surrounding whitespace, or an `e`/`E` exponent, all of which are
    /// resolved here; anything else non-numeric is a `ParseError`.
    pub fn canonical(&self) -> NumericResult<String> {
        match self {
            Number::Int(value) => Ok(value.to_string()),
            Number::UInt(value) => Ok(value.to_string()),
            Number::Float(value) => {
                if !value.is_finite() {
                    return Err(NumericError::ParseError(value.to_string()));
                }
                Ok(format!("{}", value))
            },
            Number::Text(text) => expand_notation(text),
        }
    }

    /// Normalize and parse in one step.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        Decimal::parse(&self.canonical()?)
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::UInt(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<&str> for Number {
    fn from(value: &str) -> Self {
        Number::Text(value.to_string())
    }
}

impl From<String> for Number {
    fn from(value: String) -> Self {
        Number::Text(value)
    }
}

impl From<&Decimal> for Number {
    fn from(value: &Decimal) -> Self {
        Number::Text(value.to_string())
    }
}

// ============================================================================
// Scientific-notation expansion
// ============================================================================

/// Expand standard or scientific decimal text into canonical form by
/// shifting the decimal point; digit content is preserved verbatim,
/// including trailing fractional zeros.
fn expand_notation(input: &str) -> NumericResult<String> {
    let malformed = || NumericError::ParseError(input.to_string());

    let text = input.trim();
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => {
            let exponent: i64 = text[pos + 1..].parse().map_err(|_| malformed())?;
            (&text[..pos], exponent)
        },
        None => (text, 0),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(dot) => (&mantissa[..dot], &mantissa[dot + 1..]),
        None => (mantissa, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(malformed());
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(malformed());
    }

    // The point sits after `int_part.len()` digits; the exponent slides it
    let digits = format!("{}{}", int_part, frac_part);
    let point = int_part.len() as i64 + exponent;

    let (integer, fraction) = if point <= 0 {
        let pad = "0".repeat(point.unsigned_abs() as usize);
        ("0".to_string(), format!("{}{}", pad, digits))
    } else if point as usize >= digits.len() {
        let pad = "0".repeat(point as usize - digits.len());
        (format!("{}{}", digits, pad), String::new())
    } else {
        let (head, tail) = digits.split_at(point as usize);
        (head.to_string(), tail.to_string())
    };

    let integer = {
        let trimmed = integer.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }.to_string()
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&integer);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
