//! Planar operations on field polygons: point membership, edge intersections and clipping of row lines.
//!
//! Longitude and latitude are used directly as planar coordinates. At the scale of a single field the distortion
//! is negligible for deciding membership and for ordering points along a line.

use std::iter;

use serde::{Deserialize, Serialize};
use vinerow_types::{Contour, GeoPoint, GeoPoint2d, GeoPolygon, Segment};

use crate::field::FieldPolygon;
use crate::geodesy::compute_distance_ft;

/// Contiguous chord of a row line lying inside a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSegment {
    /// Points of the chord, at least two.
    pub path: Vec<GeoPoint2d>,
}

impl RowSegment {
    /// Creates a new segment from its path.
    pub fn new(path: Vec<GeoPoint2d>) -> Self {
        Self { path }
    }

    /// First point of the chord.
    pub fn start(&self) -> Option<&GeoPoint2d> {
        self.path.first()
    }

    /// Last point of the chord.
    pub fn end(&self) -> Option<&GeoPoint2d> {
        self.path.last()
    }

    /// Length of the chord in feet.
    pub fn length_ft(&self) -> f64 {
        self.iter_segments()
            .map(|Segment(a, b)| compute_distance_ft(a, b))
            .sum()
    }
}

impl Contour for RowSegment {
    type Point = GeoPoint2d;

    fn is_closed(&self) -> bool {
        false
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ GeoPoint2d> {
        self.path.iter()
    }
}

/// Returns true if the `point` is inside the `polygon` according to the even-odd rule.
///
/// Points lying exactly on the boundary may be reported either way. Polygons with less than 3 vertices contain
/// nothing.
pub fn point_in_polygon(point: &impl GeoPoint<Num = f64>, polygon: &FieldPolygon) -> bool {
    polygon.contains_point(point)
}

/// Intersection point of segments `a1-a2` and `b1-b2`.
///
/// Returns `None` when the segments do not cross, and when they are parallel or nearly parallel. Collinear
/// overlapping segments are treated as parallel.
pub fn segment_intersection(
    a1: &GeoPoint2d,
    a2: &GeoPoint2d,
    b1: &GeoPoint2d,
    b2: &GeoPoint2d,
) -> Option<GeoPoint2d> {
    Segment(a1, a2).intersection(&Segment(b1, b2))
}

/// Clips the line `line_start-line_end` to the `polygon`, returning the chords of the line inside it in order
/// from `line_start`.
///
/// The line is split at every crossing with a polygon edge, and each piece whose midpoint is inside the polygon
/// is kept as a separate chord. Non-convex polygons may produce several chords for one line, and a line passing
/// through a vertex is split there. Zero-length pieces, which appear when the line passes through a vertex shared
/// by two crossed edges, are skipped. If the line crosses no edge at all it is either kept whole (when an endpoint
/// is inside) or dropped.
pub fn clip_line_to_polygon(
    line_start: &GeoPoint2d,
    line_end: &GeoPoint2d,
    polygon: &FieldPolygon,
) -> Vec<RowSegment> {
    if !polygon.is_complete() {
        return vec![];
    }

    let line = Segment(line_start, line_end);
    let mut crossings: Vec<GeoPoint2d> = polygon
        .iter_segments()
        .filter_map(|edge| line.intersection(&edge))
        .collect();

    if crossings.is_empty() {
        return if point_in_polygon(line_start, polygon) || point_in_polygon(line_end, polygon) {
            vec![RowSegment::new(vec![*line_start, *line_end])]
        } else {
            vec![]
        };
    }

    crossings.sort_by(|a, b| {
        planar_distance_sq(line_start, a).total_cmp(&planar_distance_sq(line_start, b))
    });

    let points: Vec<GeoPoint2d> = iter::once(*line_start)
        .chain(crossings)
        .chain(iter::once(*line_end))
        .collect();

    points
        .windows(2)
        .filter(|pair| pair[0] != pair[1])
        .filter(|pair| {
            let midpoint: GeoPoint2d = Segment(&pair[0], &pair[1]).midpoint();
            point_in_polygon(&midpoint, polygon)
        })
        .map(|pair| RowSegment::new(vec![pair[0], pair[1]]))
        .collect()
}

fn planar_distance_sq(a: &GeoPoint2d, b: &GeoPoint2d) -> f64 {
    let d_lat = b.lat() - a.lat();
    let d_lon = b.lon() - a.lon();
    d_lat * d_lat + d_lon * d_lon
}
