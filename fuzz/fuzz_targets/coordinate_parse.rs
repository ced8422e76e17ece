//! Fuzz target for full coordinate range parsing.
//!
//! Feeds arbitrary UTF-8 to the range parser and checks that the validity
//! flag and the formatters agree.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let rect = geobounds::parse(text);
    assert_eq!(rect.is_valid(), rect.as_bbox().is_some());
    assert_eq!(rect.is_valid(), rect.as_envelope().is_some());
    if let Some(bounds) = rect.bounds() {
        assert!(bounds.min_x <= bounds.max_x);
        assert!(bounds.min_y <= bounds.max_y);
    }
});
