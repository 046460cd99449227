use geo_types::{point, CoordFloat};

use crate::error::VinerowTypesError;
use crate::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};
use crate::polygon::Polygon;

impl<T: CoordFloat> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for geo_types::Point<T> {
    fn latlon(lat: T, lon: T) -> Self {
        point!(x: lon, y: lat)
    }
}

impl<T: CoordFloat> GeoPoint for geo_types::Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lon(&self) -> Self::Num {
        self.x
    }
}

impl TryFrom<&geo_types::Polygon<f64>> for Polygon<GeoPoint2d> {
    type Error = VinerowTypesError;

    /// Converts the exterior ring of a `geo_types` polygon (x = longitude, y = latitude). The closing point
    /// repeated by `geo_types` is dropped. Polygons with holes are rejected.
    fn try_from(value: &geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        if !value.interiors().is_empty() {
            return Err(VinerowTypesError::Conversion(format!(
                "field boundaries cannot have holes, got {} interior rings",
                value.interiors().len()
            )));
        }

        let mut points: Vec<GeoPoint2d> = value.exterior().0.iter().map(GeoPoint2d::from).collect();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        Ok(Polygon::new(points))
    }
}
