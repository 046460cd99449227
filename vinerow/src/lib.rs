//! Vinerow lays out vineyard blocks drawn on a map.
//!
//! Given the boundary of a field as a polygon of geographic points, the crate
//!
//! * measures the field ([`geodesy`]): area in acres and edge lengths in feet on a spherical Earth,
//! * lays out trellis rows ([`rows`]): parallel lines at any compass angle, clipped to the boundary with
//!   [`geometry::clip_line_to_polygon`], so non-convex fields get several chords per line,
//! * estimates the planting ([`metrics`]): row and vine counts and the planting density,
//! * turns the planting into a bill of materials and its cost ([`materials`]),
//! * sums everything over all the fields of a plan ([`aggregate`]).
//!
//! ```
//! use vinerow::{compute_field_layout, FieldPolygon, Orientation, Spacing};
//! use vinerow::vinerow_types::latlon;
//!
//! let polygon = FieldPolygon::new(vec![
//!     latlon!(38.2970, -122.2875),
//!     latlon!(38.2970, -122.2863),
//!     latlon!(38.2980, -122.2863),
//!     latlon!(38.2980, -122.2875),
//! ]);
//! let spacing = Spacing::new(6.0, 10.0).unwrap();
//!
//! let layout = compute_field_layout(&polygon, &spacing, Orientation::Vertical).unwrap().unwrap();
//! assert!(layout.vine_layout.total_vines > 0);
//! assert_eq!(layout.vine_layout.vines_per_acre, 726);
//! ```
//!
//! Every function is a pure function of its arguments. Incomplete boundaries (less than 3 vertices), which the
//! drawing surface produces while a field is being drawn, give empty results instead of errors. Invalid spacing
//! is rejected with [`LayoutError::InvalidSpacing`].

pub mod aggregate;
pub mod config;
pub mod draw;
pub mod error;
pub mod field;
pub mod geodesy;
pub mod geometry;
pub mod materials;
pub mod metrics;
pub mod rows;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, AggregateLayoutResult, AggregateOrientation};
pub use config::LayoutConfig;
pub use draw::{DrawState, FinishedShape};
pub use error::LayoutError;
pub use field::{Field, FieldPolygon, Orientation, Spacing};
pub use geodesy::{compute_area_acres, compute_distance_ft};
pub use geometry::{clip_line_to_polygon, point_in_polygon, segment_intersection, RowSegment};
pub use materials::{
    compute_material_cost, compute_materials, MaterialCost, MaterialsBreakdown, PriceTable,
};
pub use metrics::{compute_field_layout, FieldDimensions, FieldLayoutResult, VineLayout};
pub use rows::{generate_field_rows, generate_rows, total_row_length_ft};

// Reexport vinerow_types
pub use vinerow_types;
