//! Field values supplied by the drawing surface.

use serde::{Deserialize, Serialize};
use vinerow_types::{GeoPoint2d, Polygon};

use crate::error::LayoutError;

/// Boundary of a field in geographic coordinates.
pub type FieldPolygon = Polygon<GeoPoint2d>;

/// Direction the trellis rows of a field run in.
///
/// New plans store a compass angle. Older plans only distinguish two directions, and those legacy values are
/// kept as they are because the vine count estimation treats them differently from angles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrientationRepr", into = "OrientationRepr")]
pub enum Orientation {
    /// Compass angle of the rows in degrees, in `[0, 360)`. `0` is north, angles grow clockwise.
    Degrees(f64),
    /// Legacy value: rows run east-west.
    Horizontal,
    /// Legacy value: rows run north-south.
    #[default]
    Vertical,
}

impl Orientation {
    /// Creates an angular orientation, normalizing the angle into `[0, 360)`.
    pub fn degrees(angle: f64) -> Result<Self, LayoutError> {
        if !angle.is_finite() {
            return Err(LayoutError::InvalidOrientation(angle));
        }

        Ok(Self::Degrees(angle.rem_euclid(360.0)))
    }

    /// Returns the same orientation with its angle normalized into `[0, 360)`. Fails for non-finite angles.
    pub fn normalized(self) -> Result<Self, LayoutError> {
        match self {
            Self::Degrees(angle) => Self::degrees(angle),
            legacy => Ok(legacy),
        }
    }

    /// Compass angle the rows are rendered at.
    pub fn row_angle_degrees(&self) -> f64 {
        match self {
            Self::Degrees(angle) => *angle,
            Self::Horizontal => 90.0,
            Self::Vertical => 0.0,
        }
    }

    /// Returns true only for the legacy [`Orientation::Vertical`] value.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum OrientationRepr {
    Degrees(f64),
    Legacy(LegacyOrientation),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LegacyOrientation {
    Horizontal,
    Vertical,
}

impl TryFrom<OrientationRepr> for Orientation {
    type Error = LayoutError;

    fn try_from(value: OrientationRepr) -> Result<Self, Self::Error> {
        match value {
            OrientationRepr::Degrees(angle) => Self::degrees(angle),
            OrientationRepr::Legacy(LegacyOrientation::Horizontal) => Ok(Self::Horizontal),
            OrientationRepr::Legacy(LegacyOrientation::Vertical) => Ok(Self::Vertical),
        }
    }
}

impl From<Orientation> for OrientationRepr {
    fn from(value: Orientation) -> Self {
        match value {
            Orientation::Degrees(angle) => Self::Degrees(angle),
            Orientation::Horizontal => Self::Legacy(LegacyOrientation::Horizontal),
            Orientation::Vertical => Self::Legacy(LegacyOrientation::Vertical),
        }
    }
}

/// Planting distances of a vineyard block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    /// Distance between vines along a row, in feet.
    pub vine_spacing_ft: f64,
    /// Perpendicular distance between adjacent rows, in feet.
    pub row_spacing_ft: f64,
}

impl Spacing {
    /// Creates a validated spacing.
    pub fn new(vine_spacing_ft: f64, row_spacing_ft: f64) -> Result<Self, LayoutError> {
        let spacing = Self {
            vine_spacing_ft,
            row_spacing_ft,
        };
        spacing.validate()?;
        Ok(spacing)
    }

    /// Checks that both distances are positive finite numbers.
    pub fn validate(&self) -> Result<(), LayoutError> {
        validate_spacing("vine spacing", self.vine_spacing_ft)?;
        validate_spacing("row spacing", self.row_spacing_ft)
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            vine_spacing_ft: 6.0,
            row_spacing_ft: 10.0,
        }
    }
}

pub(crate) fn validate_spacing(name: &'static str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidSpacing { name, value })
    }
}

/// A vineyard block drawn on the map.
///
/// Fields are owned by the drawing surface. The layout engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Identifier of the field.
    pub id: String,
    /// Human readable name.
    pub name: String,
    /// Boundary of the field. May have less than 3 points while the field is being drawn.
    #[serde(default)]
    pub polygon: FieldPolygon,
    /// Whether the field is shown on the map.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Direction of the rows.
    #[serde(default)]
    pub orientation: Orientation,
}

fn default_visible() -> bool {
    true
}

impl Field {
    /// Creates a visible field with the default orientation.
    pub fn new(id: impl Into<String>, name: impl Into<String>, polygon: FieldPolygon) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            polygon,
            visible: true,
            orientation: Orientation::default(),
        }
    }

    /// Sets the orientation of the rows.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}
