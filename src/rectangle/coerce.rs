//! Coercion of loosely typed values into coordinate numbers.

use std::fmt;

use crate::token::is_space;

/// A value that may be read as a decimal coordinate.
///
/// Numbers coerce directly. Strings must hold a decimal literal (optional
/// sign, fraction, exponent, `_` between digits) or a `0x` hexadecimal
/// integer, surrounded by optional ASCII whitespace. A trailing `.` with no
/// fraction digits is rejected, as are words such as `inf` or `NaN`.
/// `None`, booleans and JSON containers never coerce.
pub trait AsCoordinate: fmt::Debug {
    fn as_coordinate(&self) -> Option<f64>;
}

macro_rules! numeric_coordinate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsCoordinate for $ty {
                #[inline]
                fn as_coordinate(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

numeric_coordinate!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl AsCoordinate for str {
    fn as_coordinate(&self) -> Option<f64> {
        parse_numeric(self)
    }
}

impl AsCoordinate for String {
    fn as_coordinate(&self) -> Option<f64> {
        parse_numeric(self)
    }
}

impl<T: AsCoordinate + ?Sized> AsCoordinate for &T {
    fn as_coordinate(&self) -> Option<f64> {
        (**self).as_coordinate()
    }
}

impl<T: AsCoordinate> AsCoordinate for Option<T> {
    fn as_coordinate(&self) -> Option<f64> {
        self.as_ref().and_then(AsCoordinate::as_coordinate)
    }
}

impl AsCoordinate for serde_json::Number {
    fn as_coordinate(&self) -> Option<f64> {
        self.as_f64()
    }
}

impl AsCoordinate for serde_json::Value {
    fn as_coordinate(&self) -> Option<f64> {
        match self {
            serde_json::Value::Number(number) => number.as_coordinate(),
            serde_json::Value::String(text) => parse_numeric(text),
            _ => None,
        }
    }
}

fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(is_space);
    let (negative, unsigned) = match *trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => parse_hex(hex)?,
        None => parse_decimal(unsigned)?,
    };
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_hex(digits: &str) -> Option<f64> {
    digit_run(digits, u8::is_ascii_hexdigit)?
        .chars()
        .try_fold(0.0, |acc, c| Some(acc * 16.0 + f64::from(c.to_digit(16)?)))
}

/// `digits[.digits][(e|E)[sign]digits]`, or a fraction with no integer part.
fn parse_decimal(text: &str) -> Option<f64> {
    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&text[..i], Some(&text[i + 1..])),
        None => (text, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };

    let mut literal = if int_part.is_empty() && frac_part.is_some() {
        String::new()
    } else {
        digit_run(int_part, u8::is_ascii_digit)?
    };
    if let Some(frac_part) = frac_part {
        literal.push('.');
        literal.push_str(&digit_run(frac_part, u8::is_ascii_digit)?);
    }
    if let Some(exponent) = exponent {
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", exponent.strip_prefix('+').unwrap_or(exponent)),
        };
        literal.push('e');
        literal.push_str(sign);
        literal.push_str(&digit_run(digits, u8::is_ascii_digit)?);
    }

    literal.parse().ok()
}

/// A non-empty run of digits with single `_` separators between them,
/// returned without the separators.
fn digit_run(run: &str, is_digit: fn(&u8) -> bool) -> Option<String> {
    let bytes = run.as_bytes();
    let well_formed = !bytes.is_empty()
        && bytes.iter().enumerate().all(|(i, b)| {
            is_digit(b)
                || (*b == b'_'
                    && i > 0
                    && is_digit(&bytes[i - 1])
                    && bytes.get(i + 1).is_some_and(is_digit))
        });
    well_formed.then(|| run.replace('_', ""))
}
