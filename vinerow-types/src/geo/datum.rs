/// Parameters of the celestial body the coordinates are given on.
///
/// All measurements in this crate use a spherical approximation with the radius equal to the datum's semi-major
/// axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
}

impl Datum {
    /// World Geodetic System 1984.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
    };

    /// Radius of the sphere used for distance and area calculations, in meters.
    pub fn sphere_radius(&self) -> f64 {
        self.semimajor
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
