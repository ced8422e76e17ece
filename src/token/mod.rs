//! Directional coordinate tokens.
//!
//! A token is one end of a coordinate range, such as `W 123°23ʹ16ʺ`,
//! `E 10°03'00"` or `N 041.7`. Two grammars are recognized, tried in order
//! at each position of the input (the leftmost match wins):
//!
//! 1. **DMS**: a direction letter, optional whitespace, integer degrees and a
//!    degree marker (`°`, `⁰` or `º`), then optionally minutes with `ʹ` or `'`
//!    and optionally seconds with `ʺ` or `"`. May start anywhere in the text.
//! 2. **Bare decimal**: a direction letter and a decimal number with nothing
//!    else on the line apart from whitespace.
//!
//! Field magnitudes are not range checked; `N 10°75'` is simply 11.25.

mod direction;

pub use direction::{Axis, Direction};

/// Characters accepted as a degree sign.
const DEGREE_MARKERS: &[char] = &['\u{00B0}', '\u{2070}', '\u{00BA}'];

/// Characters accepted as a minute sign.
const MINUTE_MARKERS: &[char] = &['\u{02B9}', '\''];

/// Characters accepted as a second sign.
const SECOND_MARKERS: &[char] = &['\u{02BA}', '"'];

/// A parsed direction-prefixed coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    pub direction: Direction,
    pub degrees: f64,
    pub minutes: Option<f64>,
    pub seconds: Option<f64>,
}

impl Token {
    /// Finds the first coordinate token in `text`.
    ///
    /// Returns `None` if neither grammar matches anywhere.
    pub fn parse(text: &str) -> Option<Self> {
        text.char_indices().find_map(|(pos, _)| {
            let rest = &text[pos..];
            parse_dms(rest).or_else(|| {
                if is_line_start(text, pos) {
                    parse_decimal(rest)
                } else {
                    None
                }
            })
        })
    }

    /// Returns the signed decimal degree value of this token.
    ///
    /// South and west values are negated, so `W 0°` yields `-0.0`.
    pub fn decimal(&self) -> f64 {
        let mut value = self.degrees;
        value += self.minutes.unwrap_or(0.0) / 60.0;
        value += self.seconds.unwrap_or(0.0) / 60.0 / 60.0;
        if self.direction.is_negative() {
            -value
        } else {
            value
        }
    }
}

/// Converts one coordinate token to signed decimal degrees.
///
/// Unparseable text yields `f64::INFINITY`, which can never pass the range
/// check on a [`Rectangle`](crate::Rectangle).
pub fn convert_token(text: &str) -> f64 {
    Token::parse(text).map_or(f64::INFINITY, |token| token.decimal())
}

/// Whitespace as understood by the token and range grammars.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

fn is_line_start(text: &str, pos: usize) -> bool {
    pos == 0 || text[..pos].ends_with('\n')
}

fn parse_dms(input: &str) -> Option<Token> {
    let mut chars = input.chars();
    let direction = Direction::from_char(chars.next()?)?;
    let rest = chars.as_str().trim_start_matches(is_space);

    let (degrees, rest) = take_digits(rest)?;
    let rest = strip_marker(rest, DEGREE_MARKERS)?;

    let (minutes, rest) = match marked_field(rest, MINUTE_MARKERS) {
        Some((minutes, after)) => (Some(minutes), after),
        None => (None, rest),
    };
    let seconds = marked_field(rest, SECOND_MARKERS).map(|(seconds, _)| seconds);

    Some(Token {
        direction,
        degrees,
        minutes,
        seconds,
    })
}

fn parse_decimal(input: &str) -> Option<Token> {
    let rest = input.trim_start_matches(is_space);
    let mut chars = rest.chars();
    let direction = Direction::from_char(chars.next()?)?;
    let rest = chars.as_str().trim_start_matches(is_space);

    let int_len = digits_len(rest);
    if int_len == 0 {
        return None;
    }
    let mut end = int_len;
    if let Some(fraction) = rest[int_len..].strip_prefix('.') {
        let frac_len = digits_len(fraction);
        if frac_len > 0 {
            end += 1 + frac_len;
        }
    }

    if !reaches_line_end(&rest[end..]) {
        return None;
    }

    Some(Token {
        direction,
        degrees: rest[..end].parse().ok()?,
        minutes: None,
        seconds: None,
    })
}

/// True if only whitespace separates `rest` from the end of its line.
fn reaches_line_end(rest: &str) -> bool {
    let tail = rest.trim_start_matches(is_space);
    tail.is_empty() || rest[..rest.len() - tail.len()].contains('\n')
}

fn digits_len(input: &str) -> usize {
    input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len())
}

fn take_digits(input: &str) -> Option<(f64, &str)> {
    let len = digits_len(input);
    if len == 0 {
        return None;
    }
    let value = input[..len].parse().ok()?;
    Some((value, &input[len..]))
}

fn strip_marker<'a>(input: &'a str, markers: &[char]) -> Option<&'a str> {
    let mut chars = input.chars();
    let c = chars.next()?;
    markers.contains(&c).then(|| chars.as_str())
}

/// A digit run followed by one of `markers`, e.g. the `23ʹ` in `123°23ʹ`.
fn marked_field<'a>(input: &'a str, markers: &[char]) -> Option<(f64, &'a str)> {
    let (value, rest) = take_digits(input)?;
    let rest = strip_marker(rest, markers)?;
    Some((value, rest))
}
