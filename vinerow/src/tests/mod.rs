//! Geometry fixtures shared by the unit tests.

use vinerow_types::{latlon, Datum, GeoPoint, GeoPoint2d};

use crate::field::FieldPolygon;
use crate::geodesy::{FEET_PER_METER, SQUARE_FEET_PER_ACRE};

/// A point in Napa valley.
pub fn vineyard_center() -> GeoPoint2d {
    latlon!(38.2975, -122.2869)
}

/// Installs a logger that prints through the test harness.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Square field of the given area centered at `center`, with north-south and east-west sides.
pub fn square_field(center: GeoPoint2d, acres: f64) -> FieldPolygon {
    let side_m = (acres * SQUARE_FEET_PER_ACRE).sqrt() / FEET_PER_METER;
    let half_lat = (side_m / 2.0 / Datum::WGS84.sphere_radius()).to_degrees();
    let half_lon = half_lat / center.lat_rad().cos();

    FieldPolygon::new(vec![
        latlon!(center.lat() - half_lat, center.lon() - half_lon),
        latlon!(center.lat() - half_lat, center.lon() + half_lon),
        latlon!(center.lat() + half_lat, center.lon() + half_lon),
        latlon!(center.lat() + half_lat, center.lon() - half_lon),
    ])
}

/// Size of one cell of the [`u_shaped_field`] grid in degrees.
pub const U_CELL: f64 = 0.001;

/// Non-convex field three cells wide and three cells tall with a one cell wide notch cut into its northern side.
pub fn u_shaped_field() -> FieldPolygon {
    let origin = vineyard_center();
    let at = |x: f64, y: f64| latlon!(origin.lat() + y * U_CELL, origin.lon() + x * U_CELL);

    FieldPolygon::new(vec![
        at(0.0, 0.0),
        at(3.0, 0.0),
        at(3.0, 3.0),
        at(2.0, 3.0),
        at(2.0, 1.0),
        at(1.0, 1.0),
        at(1.0, 3.0),
        at(0.0, 3.0),
    ])
}
