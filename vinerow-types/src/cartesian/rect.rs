use nalgebra::{Point2, Scalar};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Axis-aligned rectangle.
///
/// When built from geographic points, longitude is stored along `x` and latitude along `y`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Minimum `x` (west edge).
    pub x_min: N,
    /// Minimum `y` (south edge).
    pub y_min: N,
    /// Maximum `x` (east edge).
    pub x_max: N,
    /// Maximum `y` (north edge).
    pub y_max: N,
}

impl<N: Float + Scalar> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Size along `x`.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Size along `y`.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Smallest rectangle containing both rectangles.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Smallest rectangle containing all the given geographic points, or `None` if the iterator is empty.
    pub fn from_geo_points<'a, P: GeoPoint<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let initial = Self::new(first.lon(), first.lat(), first.lon(), first.lat());

        Some(points.fold(initial, |rect, p| {
            rect.merge(Self::new(p.lon(), p.lat(), p.lon(), p.lat()))
        }))
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point2<N> {
        let two = N::one() + N::one();
        Point2::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }
}
