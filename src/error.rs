use thiserror::Error;

/// Reasons a coordinate value cannot be used as geographic bounds.
///
/// The plain parsing API never returns these; they surface only through
/// [`Rectangle::try_from_bounds`](crate::Rectangle::try_from_bounds) and
/// [`Rectangle::check`](crate::Rectangle::check).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("No bounds: input could not be parsed as a coordinate range")]
    Empty,

    #[error("Invalid {field} {value}; expected a number")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} {value} is outside the longitude range -180 to 180")]
    LongitudeOutOfRange { field: &'static str, value: f64 },

    #[error("{field} {value} is outside the latitude range -90 to 90")]
    LatitudeOutOfRange { field: &'static str, value: f64 },
}
