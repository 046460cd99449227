//! Distances and areas of geographic geometries in the units used by vineyard planning.
//!
//! Measurements use a spherical Earth with the WGS84 semi-major axis as the radius. This is accurate to well under
//! a percent for parcels up to a few hundred acres, which is all the planner needs.

use vinerow_types::{Datum, GeoPoint, GeoPolygon, SphericalPoint};

/// Square meters in one acre.
pub const SQUARE_METERS_PER_ACRE: f64 = 4046.86;
/// Feet in one meter.
pub const FEET_PER_METER: f64 = 3.28084;
/// Square feet in one acre.
pub const SQUARE_FEET_PER_ACRE: f64 = 43_560.0;

const DATUM: Datum = Datum::WGS84;

/// Area of the polygon in acres. Returns `0.0` for polygons with less than 3 vertices.
pub fn compute_area_acres(polygon: &impl GeoPolygon) -> f64 {
    polygon.area(&DATUM) / SQUARE_METERS_PER_ACRE
}

/// Great-circle distance between two points in feet.
pub fn compute_distance_ft(p1: &impl GeoPoint<Num = f64>, p2: &impl GeoPoint<Num = f64>) -> f64 {
    SphericalPoint::distance(p1, p2, &DATUM) * FEET_PER_METER
}

/// Length of the polygon boundary, including the closing edge, in feet.
pub fn compute_perimeter_ft(polygon: &impl GeoPolygon) -> f64 {
    polygon.perimeter(&DATUM) * FEET_PER_METER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldPolygon;
    use crate::tests::{square_field, vineyard_center};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use vinerow_types::latlon;

    #[test]
    fn one_acre_square() {
        let polygon = square_field(vineyard_center(), 1.0);
        assert_relative_eq!(compute_area_acres(&polygon), 1.0, max_relative = 0.02);
    }

    #[test]
    fn area_invariant_to_start_vertex_and_winding() {
        let polygon = FieldPolygon::new(vec![
            latlon!(38.2900, -122.4600),
            latlon!(38.2900, -122.4570),
            latlon!(38.2915, -122.4565),
            latlon!(38.2930, -122.4580),
            latlon!(38.2920, -122.4605),
        ]);
        let area = compute_area_acres(&polygon);
        assert!(area > 0.0);

        for shift in 0..polygon.len() {
            let mut rotated = polygon.clone();
            rotated.points.rotate_left(shift);
            assert_relative_eq!(compute_area_acres(&rotated), area, max_relative = 1e-9);

            rotated.points.reverse();
            assert_relative_eq!(compute_area_acres(&rotated), area, max_relative = 1e-9);
        }
    }

    #[test]
    fn incomplete_polygon_has_no_area() {
        assert_eq!(compute_area_acres(&FieldPolygon::default()), 0.0);
        assert_eq!(
            compute_area_acres(&FieldPolygon::new(vec![
                latlon!(38.29, -122.46),
                latlon!(38.30, -122.46)
            ])),
            0.0
        );
        assert_eq!(compute_perimeter_ft(&FieldPolygon::default()), 0.0);
    }

    #[test]
    fn distance_in_feet() {
        let a = latlon!(38.0, -122.0);
        let b = latlon!(38.001, -122.0);
        let expected = Datum::WGS84.sphere_radius() * 0.001f64.to_radians() * FEET_PER_METER;

        assert_relative_eq!(compute_distance_ft(&a, &b), expected, max_relative = 1e-9);
        assert_abs_diff_eq!(compute_distance_ft(&a, &a), 0.0);
    }

    #[test]
    fn perimeter_of_square() {
        let polygon = square_field(vineyard_center(), 1.0);
        let side = SQUARE_FEET_PER_ACRE.sqrt();
        assert_relative_eq!(compute_perimeter_ft(&polygon), 4.0 * side, max_relative = 1e-3);
    }
}
