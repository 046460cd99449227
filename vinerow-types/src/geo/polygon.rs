use std::f64::consts::FRAC_PI_2;

use crate::cartesian::Rect;
use crate::contour::{ClosedContour, Contour};
use crate::geo::{Datum, GeoPoint, SphericalPoint};
use crate::segment::Segment;

/// Simple polygon in geographic coordinates, given by its boundary ring. This trait is auto-implemented for all
/// closed contours of double precision geographic points.
///
/// All the methods are agnostic to the winding order of the ring and to the vertex the ring starts at.
pub trait GeoPolygon {
    /// Type of the points of the polygon.
    type Point: GeoPoint<Num = f64>;

    /// Returns true if the ring has enough vertices to enclose an area.
    fn is_complete(&self) -> bool;

    /// Returns true if the `point` lies inside the polygon according to the even-odd rule.
    ///
    /// Longitude and latitude are treated as planar coordinates. A horizontal ray is cast from the point towards
    /// positive longitude and crossings with the polygon edges are counted, each edge being half-open in latitude.
    /// Points exactly on the boundary may be reported on either side.
    fn contains_point<P>(&self, point: &P) -> bool
    where
        P: GeoPoint<Num = f64>;

    /// Bounding rectangle of the polygon in degrees, with longitude along `x` and latitude along `y`.
    fn bounding_rect(&self) -> Option<Rect<f64>>;

    /// Signed area of the polygon on the sphere in square meters. Positive for counter-clockwise rings.
    ///
    /// The area is the sum of the signed areas of the triangles formed by each edge and the pole.
    fn area_signed(&self, datum: &Datum) -> f64;

    /// Area of the polygon on the sphere in square meters. Returns `0.0` for rings with less than 3 points.
    fn area(&self, datum: &Datum) -> f64 {
        self.area_signed(datum).abs()
    }

    /// Sum of the great-circle lengths of all edges, including the closing one, in meters.
    fn perimeter(&self, datum: &Datum) -> f64;
}

impl<P, T> GeoPolygon for T
where
    P: GeoPoint<Num = f64>,
    T: ClosedContour<Point = P>,
{
    type Point = P;

    fn is_complete(&self) -> bool {
        ClosedContour::iter_points(self).nth(2).is_some()
    }

    fn contains_point<Point: GeoPoint<Num = f64>>(&self, point: &Point) -> bool {
        let x = point.lon();
        let y = point.lat();
        let mut inside = false;

        for Segment(a, b) in self.iter_segments() {
            if (a.lat() > y) != (b.lat() > y) {
                let x_cross = a.lon() + (y - a.lat()) * (b.lon() - a.lon()) / (b.lat() - a.lat());
                if x < x_cross {
                    inside = !inside;
                }
            }
        }

        inside
    }

    fn bounding_rect(&self) -> Option<Rect<f64>> {
        Rect::from_geo_points(ClosedContour::iter_points(self))
    }

    fn area_signed(&self, datum: &Datum) -> f64 {
        if !self.is_complete() {
            return 0.0;
        }

        let polar_tan = |p: &P| ((FRAC_PI_2 - p.lat_rad()) / 2.0).tan();

        let total: f64 = self
            .iter_segments()
            .map(|Segment(prev, next)| {
                let t = polar_tan(prev) * polar_tan(next);
                let d_lon = next.lon_rad() - prev.lon_rad();
                2.0 * (t * d_lon.sin()).atan2(1.0 + t * d_lon.cos())
            })
            .sum();

        let radius = datum.sphere_radius();
        total * radius * radius
    }

    fn perimeter(&self, datum: &Datum) -> f64 {
        if !self.is_complete() {
            return 0.0;
        }

        self.iter_segments()
            .map(|Segment(a, b)| a.distance(b, datum))
            .sum()
    }
}
