//! Planner settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::field::{Orientation, Spacing};
use crate::materials::PriceTable;

/// Settings shared by all the fields of a plan.
///
/// Settings can be read from JSON. Every missing entry takes its default value:
///
/// ```
/// use vinerow::{LayoutConfig, Orientation};
///
/// let config = LayoutConfig::from_json(r#"{"spacing": {"vineSpacingFt": 5, "rowSpacingFt": 8}}"#).unwrap();
/// assert_eq!(config.spacing().row_spacing_ft, 8.0);
/// assert_eq!(config.orientation(), Orientation::Vertical);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    spacing: Spacing,
    orientation: Orientation,
    prices: PriceTable,
}

impl LayoutConfig {
    /// Parses and validates settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.spacing.validate()?;
        Ok(config)
    }

    /// Reads settings from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::info!("Loaded layout settings from {}", path.display());
        Ok(config)
    }

    /// Planting distances.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Sets planting distances.
    pub fn with_spacing(mut self, spacing: Spacing) -> Result<Self, LayoutError> {
        spacing.validate()?;
        self.spacing = spacing;
        Ok(self)
    }

    /// Orientation given to new fields.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Sets orientation given to new fields.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Unit prices of materials.
    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Sets unit prices of materials.
    pub fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }
}
