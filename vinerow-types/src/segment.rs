use crate::geo::{GeoPoint, NewGeoPoint};

/// Determinant magnitude below which two segments are treated as parallel.
///
/// Coordinates are in degrees, so for field-sized segments (1e-5 to 1e-2 degrees long) this only rejects lines
/// that are parallel to within a tiny fraction of a degree.
pub const PARALLEL_EPSILON: f64 = 1e-15;

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<P: GeoPoint<Num = f64>> Segment<'_, P> {
    /// Intersection point of this segment with the `other` one.
    ///
    /// Coordinates are treated as planar (longitude as `x`, latitude as `y`), which is accurate enough at the scale
    /// of a single field. The point is returned only if it lies within both segments (both parametric coordinates
    /// are in `[0, 1]`).
    ///
    /// Parallel and nearly parallel segments (including collinear overlapping ones) have no intersection.
    pub fn intersection<Other, Out>(&self, other: &Segment<Other>) -> Option<Out>
    where
        Other: GeoPoint<Num = f64>,
        Out: NewGeoPoint<f64>,
    {
        let (ax, ay) = (self.0.lon(), self.0.lat());
        let (adx, ady) = (self.1.lon() - ax, self.1.lat() - ay);
        let (bx, by) = (other.0.lon(), other.0.lat());
        let (bdx, bdy) = (other.1.lon() - bx, other.1.lat() - by);

        let det = adx * bdy - ady * bdx;
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let (ox, oy) = (bx - ax, by - ay);
        let t = (ox * bdy - oy * bdx) / det;
        let u = (ox * ady - oy * adx) / det;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(Out::latlon(ay + t * ady, ax + t * adx))
        } else {
            None
        }
    }

    /// Middle point of the segment in the planar sense.
    pub fn midpoint<Out: NewGeoPoint<f64>>(&self) -> Out {
        Out::latlon(
            (self.0.lat() + self.1.lat()) / 2.0,
            (self.0.lon() + self.1.lon()) / 2.0,
        )
    }
}
