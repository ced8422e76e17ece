use geobounds::token::convert_token;
use geobounds::{parse, Rectangle, LATITUDE_RANGE, LONGITUDE_RANGE};
use proptest::prelude::*;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn dms_token_converts_to_expected_decimal(
        token in proptest_helpers::arb_dms_token(['N', 'S'], 90)
    ) {
        prop_assert_eq!(convert_token(&token.text), token.value);
    }

    #[test]
    fn range_parse_yields_ordered_extents(case in proptest_helpers::arb_range_case()) {
        let rect = parse(&case.text);
        let bounds = rect.bounds().copied();
        prop_assert!(bounds.is_some(), "no bounds for {}", case.text);
        let bounds = bounds.unwrap();

        prop_assert_eq!((bounds.min_x, bounds.max_x), case.x);
        prop_assert_eq!((bounds.min_y, bounds.max_y), case.y);
        prop_assert!(bounds.min_x <= bounds.max_x);
        prop_assert!(bounds.min_y <= bounds.max_y);

        let in_range = LONGITUDE_RANGE.contains(&case.x.0)
            && LONGITUDE_RANGE.contains(&case.x.1)
            && LATITUDE_RANGE.contains(&case.y.0)
            && LATITUDE_RANGE.contains(&case.y.1);
        prop_assert_eq!(rect.is_valid(), in_range);
    }

    #[test]
    fn formatters_agree_on_field_order(
        min_x in -180.0f64..=180.0,
        min_y in -90.0f64..=90.0,
        max_x in -180.0f64..=180.0,
        max_y in -90.0f64..=90.0,
    ) {
        let rect = Rectangle::from_bounds(min_x, min_y, max_x, max_y);
        prop_assert!(rect.is_valid());

        let bbox = rect.as_bbox().unwrap();
        let bbox_fields: Vec<f64> = bbox.split(' ').map(|f| f.parse().unwrap()).collect();
        prop_assert_eq!(bbox_fields, vec![min_x, min_y, max_x, max_y]);

        let envelope = rect.as_envelope().unwrap();
        let inner = envelope
            .strip_prefix("ENVELOPE(")
            .and_then(|s| s.strip_suffix(')'))
            .unwrap();
        let envelope_fields: Vec<f64> = inner.split(", ").map(|f| f.parse().unwrap()).collect();
        prop_assert_eq!(envelope_fields, vec![min_x, max_x, max_y, min_y]);
    }

    #[test]
    fn out_of_range_field_is_invalid(
        value in prop_oneof![-1.0e6f64..-180.0001, 180.0001f64..1.0e6],
        field in 0usize..4,
    ) {
        let mut fields = [0.0f64; 4];
        fields[field] = value;
        let rect = Rectangle::from_bounds(fields[0], fields[1], fields[2], fields[3]);
        prop_assert!(!rect.is_empty());
        prop_assert!(!rect.is_valid());
        prop_assert_eq!(rect.as_bbox(), None);
        prop_assert_eq!(rect.as_envelope(), None);
    }

    #[test]
    fn arbitrary_text_never_panics_and_renders_consistently(text in ".{0,64}") {
        let rect = parse(&text);
        prop_assert_eq!(rect.is_valid(), rect.as_bbox().is_some());
        prop_assert_eq!(rect.is_valid(), rect.as_envelope().is_some());
    }
}
