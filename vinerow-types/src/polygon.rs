use serde::{Deserialize, Serialize};

/// Simple polygon given by its boundary ring.
///
/// The ring is implicitly closed: the last point is connected to the first one and must not duplicate it. A
/// polygon that is still being drawn may have less than 3 points; algorithms on such polygons return empty results.
/// See [`GeoPolygon`](crate::GeoPolygon) for the operations available on polygons of geographic points.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Polygon<Point> {
    /// Points of the boundary ring.
    pub points: Vec<Point>,
}

impl<Point> Polygon<Point> {
    /// Creates a new polygon.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of vertices of the polygon.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<P> From<Vec<P>> for Polygon<P> {
    fn from(points: Vec<P>) -> Self {
        Self::new(points)
    }
}

impl<P> crate::contour::ClosedContour for Polygon<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}
