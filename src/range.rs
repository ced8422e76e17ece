//! Splitting `<x-range>/<y-range>` strings into bounds.
//!
//! The x range comes first and starts with `E` or `W`; the y range follows
//! a `/` and starts with `N` or `S`. Each range holds two tokens separated by
//! a run of dashes (`-`, `--` and `---` are all the same separator):
//!
//! ```text
//! W 123°23ʹ16ʺ--W 122°31ʹ22ʺ/N 39°23ʹ57ʺ--N 38°17ʹ53ʺ
//! ```

use crate::clean::clean;
use crate::rectangle::{Bounds, Rectangle};
use crate::token::{convert_token, is_space};

const X_LEADS: &[char] = &['E', 'W'];
const Y_LEADS: &[char] = &['N', 'S'];

/// Parses a raw coordinate range into a [`Rectangle`].
///
/// Returns [`Rectangle::Empty`] when the input does not have the range
/// shape. A populated result may still be out of range; see
/// [`Rectangle::is_valid`].
pub fn split_bounds(raw: &str) -> Rectangle {
    parse_bounds(raw).map_or(Rectangle::Empty, Rectangle::Bounds)
}

/// Parses a raw coordinate range into ordered bounds.
///
/// Min and max are taken over the converted tokens of each range, so
/// `E17°--E11°` gives `min_x = 11.0, max_x = 17.0`. Tokens that fail to
/// convert become `f64::INFINITY`.
pub fn parse_bounds(raw: &str) -> Option<Bounds> {
    let (x_range, y_range) = split_ranges(clean(raw))?;
    let (min_x, max_x) = extent(x_range)?;
    let (min_y, max_y) = extent(y_range)?;
    Some(Bounds {
        min_x,
        min_y,
        max_x,
        max_y,
    })
}

/// Splits cleaned text at the rightmost `/` that leaves a valid range on
/// each side.
///
/// Whitespace around the `/`, line breaks included, belongs to neither
/// range; a line break inside a range rejects the split. One trailing line
/// break after the y range is ignored.
fn split_ranges(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_suffix('\n').unwrap_or(text);

    text.rmatch_indices('/').find_map(|(slash, _)| {
        let x_range = x_range_before(&text[..slash]);
        let y_range = text[slash + 1..].trim_start_matches(is_space);
        let single_line = !x_range.contains('\n') && !y_range.contains('\n');
        (single_line && is_range(x_range, X_LEADS) && is_range(y_range, Y_LEADS))
            .then_some((x_range, y_range))
    })
}

/// Drops the whitespace before a `/` from the first line break onwards.
///
/// Spaces before that break stay part of the range, which is harmless for
/// token conversion.
fn x_range_before(before: &str) -> &str {
    let content_len = before.trim_end_matches(is_space).len();
    match before[content_len..].find('\n') {
        Some(offset) => &before[..content_len + offset],
        None => before,
    }
}

/// A direction letter from `leads`, at least one character, a dash run and
/// at least one more character.
fn is_range(text: &str, leads: &[char]) -> bool {
    text.starts_with(leads)
        && text
            .char_indices()
            .any(|(i, c)| c == '-' && i >= 2 && i + 1 < text.len())
}

/// Returns the (min, max) of the tokens in one dash-separated range.
fn extent(range: &str) -> Option<(f64, f64)> {
    let mut values = range
        .split('-')
        .filter(|token| !token.is_empty())
        .map(convert_token);
    let first = values.next()?;
    Some(values.fold((first, first), |(lo, hi), value| {
        (
            if value < lo { value } else { lo },
            if value > hi { value } else { hi },
        )
    }))
}
