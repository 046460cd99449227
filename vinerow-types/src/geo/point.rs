use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::geo::Datum;

/// Point on the surface of a celestial body given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// Geographic point that can be constructed from coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;
}

/// Measurements between double precision geographic points on a sphere. Auto-implemented for all such points.
pub trait SphericalPoint: GeoPoint<Num = f64> {
    /// Great-circle distance to the `other` point in meters, computed with the haversine formula.
    fn distance(&self, other: &impl GeoPoint<Num = f64>, datum: &Datum) -> f64 {
        let d_lat = other.lat_rad() - self.lat_rad();
        let d_lon = other.lon_rad() - self.lon_rad();

        let h = (d_lat / 2.0).sin().powi(2)
            + self.lat_rad().cos() * other.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);

        2.0 * datum.sphere_radius() * h.clamp(0.0, 1.0).sqrt().asin()
    }
}

impl<T: GeoPoint<Num = f64>> SphericalPoint for T {}

/// 2d point on the surface of a celestial body.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    #[serde(alias = "lng")]
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Creates a new point from another one.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

impl RelativeEq for GeoPoint2d {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.lat.relative_eq(&other.lat, epsilon, max_relative)
            && self.lon.relative_eq(&other.lon, epsilon, max_relative)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use vinerow_types::geo::GeoPoint;
/// use vinerow_types::latlon;
///
/// let point = latlon!(38.3, -122.3);
/// assert_eq!(point.lat(), 38.3);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_along_meridian() {
        let a = GeoPoint2d::latlon(38.0, -122.0);
        let b = GeoPoint2d::latlon(39.0, -122.0);

        let expected = Datum::WGS84.sphere_radius() * 1f64.to_radians();
        assert_relative_eq!(a.distance(&b, &Datum::WGS84), expected, epsilon = 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint2d::latlon(38.291, -122.458);
        let b = GeoPoint2d::latlon(38.297, -122.449);

        assert_relative_eq!(
            a.distance(&b, &Datum::WGS84),
            b.distance(&a, &Datum::WGS84),
            epsilon = 1e-9
        );
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = GeoPoint2d::latlon(38.291, -122.458);
        assert_eq!(a.distance(&a, &Datum::WGS84), 0.0);
    }

    #[test]
    fn deserialize_lng_alias() {
        let point: GeoPoint2d = serde_json::from_str(r#"{"lat": 38.5, "lng": -122.25}"#)
            .expect("valid point");
        assert_eq!(point, crate::latlon!(38.5, -122.25));
    }
}
