//! Input cleaning for raw record values.
//!
//! Catalog records often wrap coverage strings in parentheses and end them
//! with a period: `(E17°--E11°/N14°--N18°).` Cleaning strips one leading
//! `(`, one trailing `)` and one period after it.

/// Strips wrapping parentheses and a trailing period from `raw`.
///
/// The cleaned value is a non-empty run without `)`, optionally followed by
/// `)` and then `.`, ending at a line break or the end of input. The match
/// is tried at the start of the input and then after each line break; the
/// first line that fits wins. Input that never fits is returned unchanged.
/// A period without a closing parenthesis before it is kept.
pub fn clean(raw: &str) -> &str {
    line_starts(raw)
        .find_map(|start| unwrap_line(&raw[start..]))
        .unwrap_or(raw)
}

fn line_starts(raw: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(raw.match_indices('\n').map(|(i, _)| i + 1))
}

fn unwrap_line(line: &str) -> Option<&str> {
    line.strip_prefix('(')
        .and_then(unwrap_body)
        .or_else(|| unwrap_body(line))
}

/// Returns the longest `)`-free prefix of `body` that `closes_at` accepts.
fn unwrap_body(body: &str) -> Option<&str> {
    let limit = body.find(')').unwrap_or(body.len());
    body[..limit]
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find(|&end| closes_at(&body[end..]))
        .map(|end| &body[..end])
}

fn closes_at(rest: &str) -> bool {
    let rest = rest.strip_prefix(')').unwrap_or(rest);
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    rest.is_empty() || rest.starts_with('\n')
}
