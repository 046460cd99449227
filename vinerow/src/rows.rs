//! Layout of parallel trellis rows inside a field.
//!
//! Rows are laid out in a local plane measured in feet around the center of the field's bounding box. The plane
//! uses a fixed number of feet per degree of latitude and scales it by the cosine of the latitude for longitude,
//! which keeps the row spacing accurate to a fraction of a percent within a single field.

use vinerow_types::cartesian::{Point2d, Vector2d};
use vinerow_types::{GeoPoint, GeoPoint2d, GeoPolygon, NewGeoPoint};

use crate::error::LayoutError;
use crate::field::{validate_spacing, Field, FieldPolygon, Spacing};
use crate::geometry::{clip_line_to_polygon, RowSegment};

/// Approximate length of one degree of latitude in feet.
pub const FEET_PER_DEGREE_LAT: f64 = 364_000.0;

/// Upper bound on the number of candidate lines for one field.
pub const MAX_CANDIDATE_ROWS: i64 = 100_000;

/// Feet per degree of latitude and of longitude at the given latitude.
pub fn feet_per_degree(lat: f64) -> (f64, f64) {
    let lon_scale = lat.to_radians().cos().abs().max(f64::EPSILON);
    (FEET_PER_DEGREE_LAT, FEET_PER_DEGREE_LAT * lon_scale)
}

/// Flat approximation of the Earth surface around a point, with `x` pointing east and `y` pointing north, in feet.
#[derive(Debug, Clone, Copy)]
struct LocalFrame {
    origin: GeoPoint2d,
    ft_per_deg_lat: f64,
    ft_per_deg_lon: f64,
}

impl LocalFrame {
    fn new(origin: GeoPoint2d) -> Self {
        let (ft_per_deg_lat, ft_per_deg_lon) = feet_per_degree(origin.lat());
        Self {
            origin,
            ft_per_deg_lat,
            ft_per_deg_lon,
        }
    }

    fn to_geo(&self, point: &Point2d) -> GeoPoint2d {
        GeoPoint2d::latlon(
            self.origin.lat() + point.y / self.ft_per_deg_lat,
            self.origin.lon() + point.x / self.ft_per_deg_lon,
        )
    }
}

/// Lays out rows `row_spacing_ft` apart across the `polygon`, running at the compass angle `orientation_degrees`
/// (`0` is north, angles grow clockwise).
///
/// Candidate lines cover the whole bounding box of the polygon at any angle and are clipped to the polygon, so a
/// line may produce several segments in a non-convex field. Lines that miss the field are dropped. Polygons with
/// less than 3 vertices produce no rows.
pub fn generate_rows(
    polygon: &FieldPolygon,
    row_spacing_ft: f64,
    orientation_degrees: f64,
) -> Result<Vec<RowSegment>, LayoutError> {
    validate_spacing("row spacing", row_spacing_ft)?;
    if !orientation_degrees.is_finite() {
        return Err(LayoutError::InvalidOrientation(orientation_degrees));
    }

    if !polygon.is_complete() {
        return Ok(vec![]);
    }
    let Some(bbox) = polygon.bounding_rect() else {
        return Ok(vec![]);
    };

    let center = bbox.center();
    let frame = LocalFrame::new(GeoPoint2d::latlon(center.y, center.x));

    let width_ft = bbox.width() * frame.ft_per_deg_lon;
    let height_ft = bbox.height() * frame.ft_per_deg_lat;
    let diagonal_ft = width_ft.hypot(height_ft);

    let row_count = (diagonal_ft / row_spacing_ft).ceil() + 2.0;
    if row_count > MAX_CANDIDATE_ROWS as f64 {
        return Err(LayoutError::TooManyRows {
            row_spacing_ft,
            limit: MAX_CANDIDATE_ROWS,
        });
    }
    let row_count = row_count as i64;

    let angle = orientation_degrees.to_radians();
    let along = Vector2d::new(angle.sin(), angle.cos());
    let across = Vector2d::new(angle.cos(), -angle.sin());

    let half = row_count / 2;
    let mut rows = vec![];
    for i in -half..half {
        let row_center = Point2d::origin() + across * (i as f64 * row_spacing_ft);
        let start = frame.to_geo(&(row_center - along * diagonal_ft));
        let end = frame.to_geo(&(row_center + along * diagonal_ft));

        let segments = clip_line_to_polygon(&start, &end, polygon);
        log::trace!("Candidate row {i} produced {} segments", segments.len());
        rows.extend(segments);
    }

    log::debug!(
        "Laid out {} row segments from {row_count} candidate lines at {orientation_degrees} degrees",
        rows.len()
    );

    Ok(rows)
}

/// Lays out the rows of a field using its orientation.
pub fn generate_field_rows(field: &Field, spacing: &Spacing) -> Result<Vec<RowSegment>, LayoutError> {
    spacing.validate()?;
    generate_rows(
        &field.polygon,
        spacing.row_spacing_ft,
        field.orientation.row_angle_degrees(),
    )
}

/// Total length of the rows in feet.
pub fn total_row_length_ft(rows: &[RowSegment]) -> f64 {
    rows.iter().map(RowSegment::length_ft).sum()
}
