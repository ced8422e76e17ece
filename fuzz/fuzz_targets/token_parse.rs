//! Fuzz target for single-token conversion.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let value = geobounds::token::convert_token(text);
    assert!(!value.is_nan());
});
