//! geobounds: coordinate ranges from catalog records, as search-ready bounds.
//!
//! Metadata records describe coverage with strings such as
//! `(W 123°23ʹ16ʺ--W 122°31ʹ22ʺ/N 39°23ʹ57ʺ--N 38°17ʹ53ʺ)`. This crate turns
//! them into a [`Rectangle`] that renders as a WKT/CQL `ENVELOPE(...)` or a
//! Solr-style `bbox` string.
//!
//! Parsing never fails loudly: anything that is not a usable geographic
//! extent becomes an empty or out-of-range rectangle, and the formatters
//! return `None` for it.
//!
//! # Modules
//!
//! - [`token`]: direction-prefixed DMS and decimal token grammar
//! - [`clean`]: stripping of wrapping parentheses and trailing periods
//! - [`range`]: splitting `<x-range>/<y-range>` strings into bounds
//! - [`rectangle`]: the bounds value type, validation and formatting
//! - [`error`]: diagnostic error type
//!
//! # Example
//!
//! ```
//! let rect = geobounds::parse("(E17°--E11°/N14°--N18°).");
//! assert!(rect.is_valid());
//! assert_eq!(rect.as_bbox().as_deref(), Some("11.0 14.0 17.0 18.0"));
//! assert_eq!(
//!     rect.as_envelope().as_deref(),
//!     Some("ENVELOPE(11.0, 17.0, 18.0, 14.0)")
//! );
//!
//! assert_eq!(geobounds::parse("x").as_bbox(), None);
//! ```

pub mod clean;
pub mod error;
pub mod range;
pub mod rectangle;
pub mod token;

pub use clean::clean;
pub use error::CoordinateError;
pub use rectangle::{
    format_degrees, AsCoordinate, Bounds, Rectangle, LATITUDE_RANGE, LONGITUDE_RANGE,
};
pub use token::{Axis, Direction, Token};

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses a free-text coordinate range into a [`Rectangle`].
///
/// Equivalent to [`Rectangle::parse`].
pub fn parse(text: &str) -> Rectangle {
    range::split_bounds(text)
}
