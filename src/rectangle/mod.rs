//! Geographic bounds and their validation.
//!
//! A [`Rectangle`] is either empty (nothing could be parsed) or holds all
//! four [`Bounds`] fields. Partial population cannot be represented.
//!
//! Like most values in this crate, construction is permissive: bounds may
//! be out of range or have min greater than max. [`Rectangle::is_valid`]
//! decides whether the value is usable, and the formatters refuse to render
//! anything that is not.

mod coerce;
mod format;

pub use coerce::AsCoordinate;
pub use format::format_degrees;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

/// Valid range for x values (longitude).
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Valid range for y values (latitude).
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// The four extents of an axis-aligned rectangle, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// A parsed bounding box, or the absence of one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rectangle {
    /// The input could not be parsed or coerced.
    #[default]
    Empty,
    /// All four extents are known. They may still be out of range.
    Bounds(Bounds),
}

impl Rectangle {
    /// Parses a free-text coordinate range such as
    /// `(W 123°23ʹ16ʺ--W 122°31ʹ22ʺ/N 39°23ʹ57ʺ--N 38°17ʹ53ʺ)`.
    pub fn parse(text: &str) -> Self {
        crate::range::split_bounds(text)
    }

    /// Builds a rectangle from four values that can be read as numbers.
    ///
    /// If any value cannot be coerced the result is [`Rectangle::Empty`].
    /// No ordering or range correction is applied.
    pub fn from_bounds(
        min_x: impl AsCoordinate,
        min_y: impl AsCoordinate,
        max_x: impl AsCoordinate,
        max_y: impl AsCoordinate,
    ) -> Self {
        Self::try_from_bounds(min_x, min_y, max_x, max_y).unwrap_or_default()
    }

    /// Like [`from_bounds`](Self::from_bounds), but reports which value
    /// failed to coerce.
    pub fn try_from_bounds(
        min_x: impl AsCoordinate,
        min_y: impl AsCoordinate,
        max_x: impl AsCoordinate,
        max_y: impl AsCoordinate,
    ) -> Result<Self, CoordinateError> {
        Ok(Self::Bounds(Bounds {
            min_x: coerce("min_x", &min_x)?,
            min_y: coerce("min_y", &min_y)?,
            max_x: coerce("max_x", &max_x)?,
            max_y: coerce("max_y", &max_y)?,
        }))
    }

    /// Returns the bounds, or `None` for an empty rectangle.
    pub fn bounds(&self) -> Option<&Bounds> {
        match self {
            Self::Empty => None,
            Self::Bounds(bounds) => Some(bounds),
        }
    }

    /// Returns true if nothing could be parsed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the bounds if every field lies within its axis range.
    ///
    /// Note: min <= max is not required. A rectangle with `min_x > max_x`
    /// passes as long as both values are within -180 to 180.
    pub fn check(&self) -> Result<&Bounds, CoordinateError> {
        let bounds = self.bounds().ok_or(CoordinateError::Empty)?;

        for (field, value) in [("min_x", bounds.min_x), ("max_x", bounds.max_x)] {
            if !LONGITUDE_RANGE.contains(&value) {
                return Err(CoordinateError::LongitudeOutOfRange { field, value });
            }
        }
        for (field, value) in [("min_y", bounds.min_y), ("max_y", bounds.max_y)] {
            if !LATITUDE_RANGE.contains(&value) {
                return Err(CoordinateError::LatitudeOutOfRange { field, value });
            }
        }

        Ok(bounds)
    }

    /// Returns true if the rectangle is populated and geographically in range.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Renders the rectangle as a WKT/CQL envelope:
    /// `ENVELOPE(min_x, max_x, max_y, min_y)`.
    ///
    /// Returns `None` unless the rectangle is valid.
    pub fn as_envelope(&self) -> Option<String> {
        self.check().ok().map(Bounds::envelope)
    }

    /// Renders the rectangle in Solr bbox order: `min_x min_y max_x max_y`.
    ///
    /// Returns `None` unless the rectangle is valid.
    pub fn as_bbox(&self) -> Option<String> {
        self.check().ok().map(Bounds::bbox)
    }
}

impl From<Bounds> for Rectangle {
    fn from(bounds: Bounds) -> Self {
        Self::Bounds(bounds)
    }
}

fn coerce(field: &'static str, value: &impl AsCoordinate) -> Result<f64, CoordinateError> {
    value
        .as_coordinate()
        .ok_or_else(|| CoordinateError::NotNumeric {
            field,
            value: format!("{value:?}"),
        })
}

// An empty rectangle serializes as null, a populated one as its bounds.
impl Serialize for Rectangle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bounds().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rectangle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bounds = Option::<Bounds>::deserialize(deserializer)?;
        Ok(bounds.map_or(Self::Empty, Self::Bounds))
    }
}
