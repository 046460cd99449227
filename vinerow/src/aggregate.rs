//! Totals over all the fields of a plan.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::field::{Field, Orientation, Spacing};
use crate::materials::{compute_material_cost, MaterialCost, MaterialsBreakdown, PriceTable};
use crate::metrics::{compute_field_layout, vines_per_acre, FieldDimensions, VineLayout};

/// Row orientation of a set of fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "AggregateOrientationRepr", into = "AggregateOrientationRepr")]
pub enum AggregateOrientation {
    /// All the fields have the same orientation.
    Shared(Orientation),
    /// The fields have different orientations. Serialized as `"mixed"`.
    Mixed,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AggregateOrientationRepr {
    Mixed(MixedTag),
    Shared(Orientation),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MixedTag {
    Mixed,
}

impl From<AggregateOrientationRepr> for AggregateOrientation {
    fn from(value: AggregateOrientationRepr) -> Self {
        match value {
            AggregateOrientationRepr::Mixed(_) => Self::Mixed,
            AggregateOrientationRepr::Shared(orientation) => Self::Shared(orientation),
        }
    }
}

impl From<AggregateOrientation> for AggregateOrientationRepr {
    fn from(value: AggregateOrientation) -> Self {
        match value {
            AggregateOrientation::Mixed => Self::Mixed(MixedTag::Mixed),
            AggregateOrientation::Shared(orientation) => Self::Shared(orientation),
        }
    }
}

/// Layout totals over several fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateLayoutResult {
    /// Number of fields included in the totals.
    pub field_count: usize,
    /// Sums of the field dimensions.
    pub dimensions: FieldDimensions,
    /// Total rows and vines. `vines_per_row` is the mean over all rows and `vines_per_acre` is the theoretical
    /// density for the spacing.
    pub vine_layout: VineLayout,
    /// Sum of the field materials.
    pub materials: MaterialsBreakdown,
    /// Spacing shared by all fields.
    pub spacing: Spacing,
    /// Orientation of the fields.
    pub orientation: AggregateOrientation,
}

impl AggregateLayoutResult {
    /// Cost of the total materials.
    pub fn cost(&self, prices: &PriceTable) -> MaterialCost {
        compute_material_cost(&self.materials, prices)
    }
}

/// Computes the layout of every field with a complete polygon and sums the results.
///
/// Fields that are still being drawn (less than 3 vertices) are skipped. Returns `Ok(None)` if no field has a
/// complete polygon. Orientations are compared after normalization, and a non-finite angle on any field fails
/// with [`LayoutError::InvalidOrientation`]. The function has no state, so it can be called again after every edit of any field.
pub fn aggregate(
    fields: &[Field],
    spacing: &Spacing,
) -> Result<Option<AggregateLayoutResult>, LayoutError> {
    spacing.validate()?;

    let mut layouts = Vec::with_capacity(fields.len());
    for field in fields {
        match compute_field_layout(&field.polygon, spacing, field.orientation)? {
            Some(layout) => layouts.push(layout),
            None => log::debug!(
                "Field {} has {} vertices and is not included in the totals",
                field.id,
                field.polygon.len()
            ),
        }
    }

    let Some(first) = layouts.first() else {
        return Ok(None);
    };

    let orientation = if layouts.iter().all(|l| l.orientation == first.orientation) {
        AggregateOrientation::Shared(first.orientation)
    } else {
        AggregateOrientation::Mixed
    };

    let mut dimensions = FieldDimensions::default();
    let mut number_of_rows: u64 = 0;
    let mut total_vines: u64 = 0;
    let mut materials = MaterialsBreakdown::default();
    for layout in &layouts {
        dimensions.width_ft += layout.dimensions.width_ft;
        dimensions.length_ft += layout.dimensions.length_ft;
        dimensions.acres += layout.dimensions.acres;
        dimensions.perimeter_ft += layout.dimensions.perimeter_ft;
        number_of_rows = number_of_rows
            .checked_add(layout.vine_layout.number_of_rows)
            .ok_or(LayoutError::CountOverflow("row"))?;
        total_vines = total_vines
            .checked_add(layout.vine_layout.total_vines)
            .ok_or(LayoutError::CountOverflow("vine"))?;
        materials = materials
            .checked_add(&layout.materials)
            .ok_or(LayoutError::CountOverflow("material"))?;
    }

    let vines_per_row = total_vines.checked_div(number_of_rows).unwrap_or(0);

    log::debug!(
        "Aggregated {} of {} fields: {:.2} acres, {total_vines} vines",
        layouts.len(),
        fields.len(),
        dimensions.acres
    );

    Ok(Some(AggregateLayoutResult {
        field_count: layouts.len(),
        dimensions,
        vine_layout: VineLayout {
            number_of_rows,
            vines_per_row,
            total_vines,
            vines_per_acre: vines_per_acre(spacing),
        },
        materials,
        spacing: *spacing,
        orientation,
    }))
}
