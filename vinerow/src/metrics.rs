//! Field dimensions and vine counts.
//!
//! The width and the length of a field are estimated from its edges: the length is the longest edge and the width
//! is the mean edge length. This is coarser than a real oriented bounding box, but plans and financial projections
//! already created with these numbers depend on them, so it is kept as is.

use serde::{Deserialize, Serialize};
use vinerow_types::{Contour, GeoPolygon, Segment};

use crate::error::LayoutError;
use crate::field::{FieldPolygon, Orientation, Spacing};
use crate::geodesy::{compute_area_acres, compute_distance_ft, SQUARE_FEET_PER_ACRE};
use crate::materials::{
    compute_material_cost, compute_materials, count_mul, MaterialCost, MaterialsBreakdown, PriceTable,
};

/// Measured size of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDimensions {
    /// Mean edge length in feet.
    pub width_ft: f64,
    /// Longest edge length in feet.
    pub length_ft: f64,
    /// Area in acres.
    pub acres: f64,
    /// Boundary length in feet.
    pub perimeter_ft: f64,
}

/// Estimated planting of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VineLayout {
    /// Number of rows.
    pub number_of_rows: u64,
    /// Number of vines in each row.
    pub vines_per_row: u64,
    /// Number of vines in the field.
    pub total_vines: u64,
    /// Theoretical planting density for the spacing, independent of the field shape.
    pub vines_per_acre: u64,
}

/// Dimensions, planting and bill of materials of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldLayoutResult {
    /// Measured size of the field.
    pub dimensions: FieldDimensions,
    /// Estimated planting.
    pub vine_layout: VineLayout,
    /// Length of one row in feet.
    pub row_length_ft: f64,
    /// Materials needed to build the trellis and the irrigation.
    pub materials: MaterialsBreakdown,
    /// Spacing the layout was computed for.
    pub spacing: Spacing,
    /// Orientation the layout was computed for.
    pub orientation: Orientation,
}

impl FieldLayoutResult {
    /// Cost of the field materials.
    pub fn cost(&self, prices: &PriceTable) -> MaterialCost {
        compute_material_cost(&self.materials, prices)
    }
}

/// Theoretical number of vines per acre for the spacing, rounded to the nearest vine.
pub fn vines_per_acre(spacing: &Spacing) -> u64 {
    (SQUARE_FEET_PER_ACRE / (spacing.vine_spacing_ft * spacing.row_spacing_ft)).round() as u64
}

/// Measures the field and estimates its rows, vines and materials.
///
/// Only the legacy [`Orientation::Vertical`] value runs rows along the width of the field; every other
/// orientation, including all angles, runs them along the length. Returns `Ok(None)` for polygons with less than
/// 3 vertices.
///
/// Fails with [`LayoutError::CountOverflow`] if the spacing is so small that the counts do not fit into `u64`.
pub fn compute_field_layout(
    polygon: &FieldPolygon,
    spacing: &Spacing,
    orientation: Orientation,
) -> Result<Option<FieldLayoutResult>, LayoutError> {
    spacing.validate()?;
    let orientation = orientation.normalized()?;
    if !polygon.is_complete() {
        return Ok(None);
    }

    let edges: Vec<f64> = polygon
        .iter_segments()
        .map(|Segment(a, b)| compute_distance_ft(a, b))
        .collect();

    let perimeter_ft: f64 = edges.iter().sum();
    let length_ft = edges.iter().copied().fold(0.0, f64::max);
    let width_ft = perimeter_ft / edges.len() as f64;

    let (number_of_rows, vines_per_row, row_length_ft) = if orientation.is_vertical() {
        (
            floor_count(width_ft / spacing.row_spacing_ft),
            floor_count(length_ft / spacing.vine_spacing_ft),
            length_ft,
        )
    } else {
        (
            floor_count(length_ft / spacing.row_spacing_ft),
            floor_count(width_ft / spacing.vine_spacing_ft),
            width_ft,
        )
    };

    let total_vines = count_mul(number_of_rows, vines_per_row, "vine")?;
    let materials = compute_materials(
        number_of_rows,
        vines_per_row,
        row_length_ft,
        spacing.row_spacing_ft,
    )?;

    Ok(Some(FieldLayoutResult {
        dimensions: FieldDimensions {
            width_ft,
            length_ft,
            acres: compute_area_acres(polygon),
            perimeter_ft,
        },
        vine_layout: VineLayout {
            number_of_rows,
            vines_per_row,
            total_vines,
            vines_per_acre: vines_per_acre(spacing),
        },
        row_length_ft,
        materials,
        spacing: *spacing,
        orientation,
    }))
}

fn floor_count(value: f64) -> u64 {
    value.floor().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{square_field, vineyard_center};
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use geo_types::polygon;
    use vinerow_types::latlon;

    #[test]
    fn one_acre_square_vertical() {
        let polygon = square_field(vineyard_center(), 1.0);
        let spacing = Spacing::new(6.0, 10.0).expect("valid spacing");

        let layout = compute_field_layout(&polygon, &spacing, Orientation::Vertical)
            .expect("valid input")
            .expect("complete polygon");

        assert_relative_eq!(layout.dimensions.acres, 1.0, max_relative = 0.02);
        assert_relative_eq!(layout.dimensions.width_ft, 208.71, max_relative = 1e-3);
        assert_relative_eq!(layout.dimensions.length_ft, 208.71, max_relative = 1e-3);
        assert_relative_eq!(layout.dimensions.perimeter_ft, 4.0 * 208.71, max_relative = 1e-3);

        assert_eq!(
            layout.vine_layout,
            VineLayout {
                number_of_rows: 20,
                vines_per_row: 34,
                total_vines: 680,
                vines_per_acre: 726,
            }
        );
        assert_relative_eq!(layout.row_length_ft, layout.dimensions.length_ft);
        assert_eq!(layout.materials.posts.end_posts, 40);

        let cost = layout.cost(&PriceTable::default());
        assert!(cost.total > 0.0);
        assert_eq!(cost, compute_material_cost(&layout.materials, &PriceTable::default()));
    }

    #[test]
    fn non_vertical_orientations_use_length_for_rows() {
        let polygon = FieldPolygon::new(vec![
            latlon!(38.0, -122.0),
            latlon!(38.0, -121.996),
            latlon!(38.001, -121.996),
            latlon!(38.001, -122.0),
        ]);
        let spacing = Spacing::new(5.0, 8.0).expect("valid spacing");

        let vertical = compute_field_layout(&polygon, &spacing, Orientation::Vertical)
            .expect("valid input")
            .expect("complete polygon");
        assert!(vertical.dimensions.length_ft > vertical.dimensions.width_ft);
        assert_eq!(
            vertical.vine_layout.number_of_rows,
            (vertical.dimensions.width_ft / 8.0).floor() as u64
        );

        for orientation in [
            Orientation::Horizontal,
            Orientation::Degrees(0.0),
            Orientation::Degrees(137.5),
        ] {
            let layout = compute_field_layout(&polygon, &spacing, orientation)
                .expect("valid input")
                .expect("complete polygon");

            assert_eq!(
                layout.vine_layout.number_of_rows,
                (layout.dimensions.length_ft / 8.0).floor() as u64
            );
            assert_eq!(
                layout.vine_layout.vines_per_row,
                (layout.dimensions.width_ft / 5.0).floor() as u64
            );
            assert_relative_eq!(layout.row_length_ft, layout.dimensions.width_ft);
            assert_eq!(layout.orientation, orientation);
        }
    }

    #[test]
    fn density_ignores_field_shape() {
        assert_eq!(vines_per_acre(&Spacing::new(6.0, 10.0).expect("valid")), 726);
        assert_eq!(vines_per_acre(&Spacing::new(4.0, 8.0).expect("valid")), 1361);
    }

    #[test]
    fn incomplete_polygon() {
        let polygon = FieldPolygon::new(vec![latlon!(38.0, -122.0), latlon!(38.001, -122.0)]);
        assert_matches!(
            compute_field_layout(&polygon, &Spacing::default(), Orientation::Vertical),
            Ok(None)
        );
    }

    #[test]
    fn invalid_spacing() {
        let polygon = square_field(vineyard_center(), 1.0);
        let spacing = Spacing {
            vine_spacing_ft: 0.0,
            row_spacing_ft: 10.0,
        };
        assert_matches!(
            compute_field_layout(&polygon, &spacing, Orientation::Vertical),
            Err(LayoutError::InvalidSpacing { .. })
        );
    }

    #[test]
    fn tiny_spacing_overflows_counts() {
        let polygon = square_field(vineyard_center(), 1.0);
        let spacing = Spacing::new(1e-9, 1e-9).expect("valid spacing");

        assert_matches!(
            compute_field_layout(&polygon, &spacing, Orientation::Vertical),
            Err(LayoutError::CountOverflow(_))
        );
    }

    #[test]
    fn orientation_is_normalized() {
        let polygon = square_field(vineyard_center(), 1.0);
        let layout = compute_field_layout(&polygon, &Spacing::default(), Orientation::Degrees(370.0))
            .expect("valid input")
            .expect("complete polygon");
        assert_eq!(layout.orientation, Orientation::Degrees(10.0));

        assert_matches!(
            compute_field_layout(&polygon, &Spacing::default(), Orientation::Degrees(f64::NAN)),
            Err(LayoutError::InvalidOrientation(_))
        );
    }

    #[test]
    fn duplicate_vertices_do_not_break_measurements() {
        let mut polygon = square_field(vineyard_center(), 1.0);
        let first = polygon.points[0];
        polygon.points.insert(1, first);

        let layout = compute_field_layout(&polygon, &Spacing::default(), Orientation::Vertical)
            .expect("valid input")
            .expect("complete polygon");

        assert!(layout.dimensions.width_ft.is_finite());
        assert_relative_eq!(layout.dimensions.acres, 1.0, max_relative = 0.02);
    }

    #[test]
    fn geo_types_polygon() {
        let polygon = polygon![
            (x: -122.0, y: 38.0),
            (x: -121.996, y: 38.0),
            (x: -121.996, y: 38.001),
            (x: -122.0, y: 38.001),
        ];
        let field = FieldPolygon::try_from(&polygon).expect("no holes");
        assert_eq!(field.len(), 4);

        let from_geo_types = compute_field_layout(&field, &Spacing::default(), Orientation::Vertical)
            .expect("valid input")
            .expect("complete polygon");
        let native = FieldPolygon::new(vec![
            latlon!(38.0, -122.0),
            latlon!(38.0, -121.996),
            latlon!(38.001, -121.996),
            latlon!(38.001, -122.0),
        ]);
        let expected = compute_field_layout(&native, &Spacing::default(), Orientation::Vertical)
            .expect("valid input")
            .expect("complete polygon");

        assert_eq!(from_geo_types, expected);
    }
}
