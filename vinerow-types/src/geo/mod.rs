//! Geometries in geographic coordinates (latitude and longitude, see [`GeoPoint`]) and the spherical Earth model
//! used to measure them (see [`Datum`]).

mod datum;
mod point;
mod polygon;

pub use datum::Datum;
pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint, SphericalPoint};
pub use polygon::GeoPolygon;
