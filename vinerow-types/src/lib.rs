//! Geographic geometry primitives used by the `vinerow` field layout engine.
//!
//! Points are [`GeoPoint`]s (latitude and longitude in degrees). Field boundaries are closed rings
//! represented by [`Polygon`], and all the algorithms on them are available through the
//! auto-implemented [`GeoPolygon`] trait. Planar helpers (bounding rectangles, offsets in a local
//! plane) live in the [`cartesian`] module.

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geo;
pub mod polygon;
pub mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use contour::{ClosedContour, Contour};
pub use geo::{Datum, GeoPoint, GeoPoint2d, GeoPolygon, NewGeoPoint, SphericalPoint};
pub use polygon::Polygon;
pub use segment::Segment;
