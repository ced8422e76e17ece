//! String renderings of bounds for search indexes.

use super::Bounds;

/// Formats a coordinate as the shortest decimal that reads back to the
/// same `f64`.
///
/// Whole numbers keep a fractional part (`45.0`) and negative zero keeps its
/// sign (`-0.0`). Magnitudes below `1e-4` (or from `1e16`) use exponent
/// notation with a fractional mantissa, a signed exponent and at least two
/// exponent digits: `1.0e-05`, `-5.0e-05`, `1.0e+16`.
pub fn format_degrees(value: f64) -> String {
    let shortest = format!("{value:?}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    let fraction = if mantissa.contains('.') { "" } else { ".0" };
    format!("{mantissa}{fraction}e{sign}{digits:0>2}")
}

impl Bounds {
    /// WKT/CQL envelope: `ENVELOPE(min_x, max_x, max_y, min_y)`.
    ///
    /// Renders whatever the fields hold; use
    /// [`Rectangle::as_envelope`](super::Rectangle::as_envelope) to render
    /// only valid bounds.
    pub fn envelope(&self) -> String {
        format!(
            "ENVELOPE({}, {}, {}, {})",
            format_degrees(self.min_x),
            format_degrees(self.max_x),
            format_degrees(self.max_y),
            format_degrees(self.min_y),
        )
    }

    /// Solr bbox: `min_x min_y max_x max_y`.
    pub fn bbox(&self) -> String {
        format!(
            "{} {} {} {}",
            format_degrees(self.min_x),
            format_degrees(self.min_y),
            format_degrees(self.max_x),
            format_degrees(self.max_y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(45.0), "45.0");
        assert_eq!(format_degrees(-0.0), "-0.0");
        assert_eq!(format_degrees(38.29805555555556), "38.29805555555556");
        assert_eq!(format_degrees(-122.52277777777778), "-122.52277777777778");
        assert_eq!(format_degrees(0.0001), "0.0001");
    }

    #[test]
    fn test_format_degrees_exponent_form() {
        assert_eq!(format_degrees(0.00001), "1.0e-05");
        assert_eq!(format_degrees(-0.00005), "-5.0e-05");
        assert_eq!(format_degrees(1.5e-7), "1.5e-07");
        assert_eq!(format_degrees(1.0e-100), "1.0e-100");
        assert_eq!(format_degrees(1.0e16), "1.0e+16");
    }

    #[test]
    fn test_envelope_and_bbox_order() {
        let bounds = Bounds {
            min_x: 1.0,
            min_y: 2.0,
            max_x: 3.0,
            max_y: 4.0,
        };
        assert_eq!(bounds.envelope(), "ENVELOPE(1.0, 3.0, 4.0, 2.0)");
        assert_eq!(bounds.bbox(), "1.0 2.0 3.0 4.0");
    }
}
