#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub const DEGREE_MARKERS: &[char] = &['°', '⁰', 'º'];
pub const MINUTE_MARKERS: &[char] = &['ʹ', '\''];
pub const SECOND_MARKERS: &[char] = &['ʺ', '"'];

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// A DMS token as it would appear in a catalog record, with its expected
/// decimal value.
#[derive(Clone, Debug)]
pub struct DmsToken {
    pub text: String,
    pub value: f64,
}

/// Generates a DMS token for one of `letters` (positive letter first).
pub fn arb_dms_token(
    letters: [char; 2],
    max_degrees: u32,
) -> impl Strategy<Value = DmsToken> {
    (
        prop::bool::ANY,
        0..=max_degrees,
        prop::option::of(0u32..60),
        prop::option::of(0u32..60),
        prop::sample::select(DEGREE_MARKERS),
        prop::sample::select(MINUTE_MARKERS),
        prop::sample::select(SECOND_MARKERS),
        prop::bool::ANY,
    )
        .prop_map(
            move |(negative, degrees, minutes, seconds, deg_mark, min_mark, sec_mark, spaced)| {
                let letter = if negative { letters[1] } else { letters[0] };
                let mut text = String::new();
                text.push(letter);
                if spaced {
                    text.push(' ');
                }
                text.push_str(&format!("{degrees:02}{deg_mark}"));
                if let Some(minutes) = minutes {
                    text.push_str(&format!("{minutes:02}{min_mark}"));
                }
                if let Some(seconds) = seconds {
                    text.push_str(&format!("{seconds:02}{sec_mark}"));
                }

                let mut value = f64::from(degrees);
                value += f64::from(minutes.unwrap_or(0)) / 60.0;
                value += f64::from(seconds.unwrap_or(0)) / 60.0 / 60.0;
                if negative {
                    value = -value;
                }
                DmsToken { text, value }
            },
        )
}

/// A dash separator run of one to three dashes.
pub fn arb_dashes() -> impl Strategy<Value = String> {
    (1usize..=3).prop_map(|n| "-".repeat(n))
}

/// A full `<x-range>/<y-range>` string with the expected (min, max) per axis.
#[derive(Clone, Debug)]
pub struct RangeCase {
    pub text: String,
    pub x: (f64, f64),
    pub y: (f64, f64),
}

pub fn arb_range_case() -> impl Strategy<Value = RangeCase> {
    (
        arb_dms_token(['E', 'W'], 180),
        arb_dms_token(['E', 'W'], 180),
        arb_dms_token(['N', 'S'], 90),
        arb_dms_token(['N', 'S'], 90),
        arb_dashes(),
        arb_dashes(),
        prop::bool::ANY,
    )
        .prop_map(|(x1, x2, y1, y2, x_sep, y_sep, wrapped)| {
            let body = format!("{}{x_sep}{}/{}{y_sep}{}", x1.text, x2.text, y1.text, y2.text);
            let text = if wrapped { format!("({body}).") } else { body };
            RangeCase {
                text,
                x: (x1.value.min(x2.value), x1.value.max(x2.value)),
                y: (y1.value.min(y2.value), y1.value.max(y2.value)),
            }
        })
}
