//! Types and functions on geometries in planar coordinates.

mod rect;

pub use nalgebra::{Point2, Vector2};
pub use rect::Rect;

/// 2d point with double precision coordinates.
pub type Point2d = Point2<f64>;
/// 2d vector with double precision coordinates.
pub type Vector2d = Vector2<f64>;
