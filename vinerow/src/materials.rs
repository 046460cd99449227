//! Bill of materials for a VSP trellis with drip irrigation, and its cost.

use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::field::validate_spacing;

/// Distance between line posts along a row, in feet.
pub const LINE_POST_SPACING_FT: f64 = 20.0;
/// Number of trellis wires in each row.
pub const WIRES_PER_ROW: u64 = 3;

/// Trellis posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posts {
    /// Posts at both ends of every row.
    pub end_posts: u64,
    /// Posts along the rows.
    pub line_posts: u64,
    /// All posts.
    pub total: u64,
}

/// Anchors holding the end posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarthAnchors {
    /// Number of anchors.
    pub count: u64,
}

/// Trellis wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wire {
    /// Wire length in feet.
    pub total_feet: f64,
}

/// Drip irrigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Irrigation {
    /// Drip tubing length in feet.
    pub drip_tubing_feet: f64,
    /// One emitter per vine.
    pub emitters: u64,
}

/// Small trellis parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hardware {
    /// Clips fixing the wires to the posts, on both sides of each post.
    pub wire_clips: u64,
    /// Eye bolts holding the wires at the end posts.
    pub eye_bolts: u64,
    /// Staples fixing the wires to the line posts.
    pub staples: u64,
    /// One wire tensioner per wire.
    pub tensioners: u64,
    /// One ring per earth anchor.
    pub anchor_rings: u64,
}

/// Materials needed to build the trellis and the irrigation of one or more fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsBreakdown {
    /// Trellis posts.
    pub posts: Posts,
    /// Earth anchors.
    pub earth_anchors: EarthAnchors,
    /// Trellis wire.
    pub wire: Wire,
    /// Drip irrigation.
    pub irrigation: Irrigation,
    /// Small parts.
    pub hardware: Hardware,
}

impl Add for MaterialsBreakdown {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for MaterialsBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        self.posts.end_posts += rhs.posts.end_posts;
        self.posts.line_posts += rhs.posts.line_posts;
        self.posts.total += rhs.posts.total;
        self.earth_anchors.count += rhs.earth_anchors.count;
        self.wire.total_feet += rhs.wire.total_feet;
        self.irrigation.drip_tubing_feet += rhs.irrigation.drip_tubing_feet;
        self.irrigation.emitters += rhs.irrigation.emitters;
        self.hardware.wire_clips += rhs.hardware.wire_clips;
        self.hardware.eye_bolts += rhs.hardware.eye_bolts;
        self.hardware.staples += rhs.hardware.staples;
        self.hardware.tensioners += rhs.hardware.tensioners;
        self.hardware.anchor_rings += rhs.hardware.anchor_rings;
    }
}

impl MaterialsBreakdown {
    /// Sums two breakdowns. Returns `None` if any count overflows.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(Self {
            posts: Posts {
                end_posts: self.posts.end_posts.checked_add(other.posts.end_posts)?,
                line_posts: self.posts.line_posts.checked_add(other.posts.line_posts)?,
                total: self.posts.total.checked_add(other.posts.total)?,
            },
            earth_anchors: EarthAnchors {
                count: self.earth_anchors.count.checked_add(other.earth_anchors.count)?,
            },
            wire: Wire {
                total_feet: self.wire.total_feet + other.wire.total_feet,
            },
            irrigation: Irrigation {
                drip_tubing_feet: self.irrigation.drip_tubing_feet + other.irrigation.drip_tubing_feet,
                emitters: self.irrigation.emitters.checked_add(other.irrigation.emitters)?,
            },
            hardware: Hardware {
                wire_clips: self.hardware.wire_clips.checked_add(other.hardware.wire_clips)?,
                eye_bolts: self.hardware.eye_bolts.checked_add(other.hardware.eye_bolts)?,
                staples: self.hardware.staples.checked_add(other.hardware.staples)?,
                tensioners: self.hardware.tensioners.checked_add(other.hardware.tensioners)?,
                anchor_rings: self.hardware.anchor_rings.checked_add(other.hardware.anchor_rings)?,
            },
        })
    }
}

impl Sum for MaterialsBreakdown {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Computes the materials for `number_of_rows` rows of `row_length_ft` feet with `vines_per_row` vines each.
pub fn compute_materials(
    number_of_rows: u64,
    vines_per_row: u64,
    row_length_ft: f64,
    row_spacing_ft: f64,
) -> Result<MaterialsBreakdown, LayoutError> {
    validate_spacing("row spacing", row_spacing_ft)?;
    let row_length_ft = row_length_ft.max(0.0);

    let end_posts = count_mul(number_of_rows, 2, "end post")?;
    let line_posts_per_row = ((row_length_ft / LINE_POST_SPACING_FT).floor() as u64).saturating_sub(1);
    let line_posts = count_mul(number_of_rows, line_posts_per_row, "line post")?;
    let total_posts = end_posts
        .checked_add(line_posts)
        .ok_or(LayoutError::CountOverflow("post"))?;
    let earth_anchors = end_posts;
    let rows_feet = number_of_rows as f64 * row_length_ft;

    Ok(MaterialsBreakdown {
        posts: Posts {
            end_posts,
            line_posts,
            total: total_posts,
        },
        earth_anchors: EarthAnchors {
            count: earth_anchors,
        },
        wire: Wire {
            total_feet: rows_feet * WIRES_PER_ROW as f64,
        },
        irrigation: Irrigation {
            drip_tubing_feet: rows_feet,
            emitters: count_mul(vines_per_row, number_of_rows, "emitter")?,
        },
        hardware: Hardware {
            wire_clips: count_mul(total_posts, WIRES_PER_ROW * 2, "wire clip")?,
            eye_bolts: count_mul(end_posts, WIRES_PER_ROW, "eye bolt")?,
            staples: count_mul(line_posts, WIRES_PER_ROW * 2, "staple")?,
            tensioners: count_mul(number_of_rows, WIRES_PER_ROW, "tensioner")?,
            anchor_rings: earth_anchors,
        },
    })
}

pub(crate) fn count_mul(a: u64, b: u64, what: &'static str) -> Result<u64, LayoutError> {
    a.checked_mul(b).ok_or(LayoutError::CountOverflow(what))
}

/// Unit prices of the materials, in dollars.
///
/// Every price can be overridden. Missing entries in a deserialized table take the default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceTable {
    /// End post.
    pub end_post: f64,
    /// Line post.
    pub line_post: f64,
    /// Earth anchor.
    pub earth_anchor: f64,
    /// Trellis wire, per foot.
    pub wire_per_foot: f64,
    /// Drip tubing, per foot.
    pub drip_tubing_per_foot: f64,
    /// Drip emitter.
    pub emitter: f64,
    /// Wire clip.
    pub wire_clip: f64,
    /// Eye bolt.
    pub eye_bolt: f64,
    /// Staple.
    pub staple: f64,
    /// Wire tensioner.
    pub tensioner: f64,
    /// Anchor ring.
    pub anchor_ring: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            end_post: 25.0,
            line_post: 12.0,
            earth_anchor: 15.0,
            wire_per_foot: 0.05,
            drip_tubing_per_foot: 0.15,
            emitter: 0.35,
            wire_clip: 0.10,
            eye_bolt: 2.50,
            staple: 0.05,
            tensioner: 4.00,
            anchor_ring: 1.50,
        }
    }
}

impl PriceTable {
    /// Parses a price table from JSON. Prices missing from the document keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a price table from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

/// Cost of a bill of materials by category, in dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCost {
    /// End and line posts.
    pub posts: f64,
    /// Earth anchors.
    pub earth_anchors: f64,
    /// Trellis wire.
    pub wire: f64,
    /// Drip tubing and emitters.
    pub irrigation: f64,
    /// Clips, eye bolts, staples, tensioners and anchor rings.
    pub hardware: f64,
    /// Sum of all categories.
    pub total: f64,
}

impl MaterialCost {
    /// Cost per acre of planted area, or `None` for non-positive areas.
    pub fn per_acre(&self, acres: f64) -> Option<Self> {
        if acres.is_nan() || acres <= 0.0 {
            return None;
        }

        Some(Self {
            posts: self.posts / acres,
            earth_anchors: self.earth_anchors / acres,
            wire: self.wire / acres,
            irrigation: self.irrigation / acres,
            hardware: self.hardware / acres,
            total: self.total / acres,
        })
    }
}

/// Prices the `materials` with the given unit `prices`.
pub fn compute_material_cost(materials: &MaterialsBreakdown, prices: &PriceTable) -> MaterialCost {
    let posts = materials.posts.end_posts as f64 * prices.end_post
        + materials.posts.line_posts as f64 * prices.line_post;
    let earth_anchors = materials.earth_anchors.count as f64 * prices.earth_anchor;
    let wire = materials.wire.total_feet * prices.wire_per_foot;
    let irrigation = materials.irrigation.drip_tubing_feet * prices.drip_tubing_per_foot
        + materials.irrigation.emitters as f64 * prices.emitter;

    let hardware = &materials.hardware;
    let hardware = hardware.wire_clips as f64 * prices.wire_clip
        + hardware.eye_bolts as f64 * prices.eye_bolt
        + hardware.staples as f64 * prices.staple
        + hardware.tensioners as f64 * prices.tensioner
        + hardware.anchor_rings as f64 * prices.anchor_ring;

    MaterialCost {
        posts,
        earth_anchors,
        wire,
        irrigation,
        hardware,
        total: posts + earth_anchors + wire + irrigation + hardware,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn twelve_rows_of_three_hundred_feet() {
        let materials = compute_materials(12, 60, 300.0, 10.0).expect("valid spacing");

        assert_eq!(
            materials.posts,
            Posts {
                end_posts: 24,
                line_posts: 168,
                total: 192,
            }
        );
        assert_eq!(materials.earth_anchors.count, 24);
        assert_abs_diff_eq!(materials.wire.total_feet, 10_800.0);
        assert_abs_diff_eq!(materials.irrigation.drip_tubing_feet, 3_600.0);
        assert_eq!(materials.irrigation.emitters, 720);
        assert_eq!(
            materials.hardware,
            Hardware {
                wire_clips: 1152,
                eye_bolts: 72,
                staples: 1008,
                tensioners: 36,
                anchor_rings: 24,
            }
        );
    }

    #[test]
    fn short_rows_have_no_line_posts() {
        let materials = compute_materials(4, 2, 15.0, 10.0).expect("valid spacing");
        assert_eq!(materials.posts.line_posts, 0);
        assert_eq!(materials.posts.total, 8);

        let materials = compute_materials(4, 3, 39.9, 10.0).expect("valid spacing");
        assert_eq!(materials.posts.line_posts, 0);

        let materials = compute_materials(4, 3, 40.0, 10.0).expect("valid spacing");
        assert_eq!(materials.posts.line_posts, 4);
    }

    #[test]
    fn no_rows_no_materials() {
        let materials = compute_materials(0, 0, 0.0, 10.0).expect("valid spacing");
        assert_eq!(materials, MaterialsBreakdown::default());
    }

    #[test]
    fn huge_counts_are_rejected() {
        assert_matches!(
            compute_materials(u64::MAX / 2 + 1, 1, 300.0, 10.0),
            Err(LayoutError::CountOverflow("end post"))
        );
        assert_matches!(
            compute_materials(1 << 40, 1 << 30, 300.0, 10.0),
            Err(LayoutError::CountOverflow("emitter"))
        );
    }

    #[test]
    fn checked_sum_overflow() {
        let a = compute_materials(12, 60, 300.0, 10.0).expect("valid spacing");
        assert_eq!(a.checked_add(&a), Some(a + a));

        let mut huge = a;
        huge.irrigation.emitters = u64::MAX;
        assert_eq!(huge.checked_add(&a), None);
    }

    #[test]
    fn invalid_row_spacing() {
        assert_matches!(
            compute_materials(12, 60, 300.0, 0.0),
            Err(LayoutError::InvalidSpacing { .. })
        );
    }

    #[test]
    fn materials_sum() {
        let a = compute_materials(12, 60, 300.0, 10.0).expect("valid spacing");
        let b = compute_materials(3, 10, 100.0, 10.0).expect("valid spacing");

        let sum: MaterialsBreakdown = [a, b].into_iter().sum();
        assert_eq!(sum, a + b);
        assert_eq!(sum.posts.end_posts, 30);
        assert_abs_diff_eq!(sum.irrigation.drip_tubing_feet, 3_900.0);
    }

    #[test]
    fn cost_with_default_prices() {
        let materials = compute_materials(12, 60, 300.0, 10.0).expect("valid spacing");
        let cost = compute_material_cost(&materials, &PriceTable::default());

        assert_abs_diff_eq!(cost.posts, 24.0 * 25.0 + 168.0 * 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cost.earth_anchors, 24.0 * 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cost.wire, 10_800.0 * 0.05, epsilon = 1e-9);
        assert_abs_diff_eq!(cost.irrigation, 3_600.0 * 0.15 + 720.0 * 0.35, epsilon = 1e-9);
        assert_abs_diff_eq!(
            cost.hardware,
            1152.0 * 0.10 + 72.0 * 2.5 + 1008.0 * 0.05 + 36.0 * 4.0 + 24.0 * 1.5,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            cost.total,
            cost.posts + cost.earth_anchors + cost.wire + cost.irrigation + cost.hardware,
            epsilon = 1e-9
        );
    }

    #[test]
    fn end_and_line_posts_are_priced_separately() {
        let materials = compute_materials(1, 10, 100.0, 10.0).expect("valid spacing");
        let prices = PriceTable {
            end_post: 100.0,
            line_post: 1.0,
            ..PriceTable::default()
        };

        let cost = compute_material_cost(&materials, &prices);
        assert_abs_diff_eq!(cost.posts, 2.0 * 100.0 + 4.0 * 1.0);
    }

    #[test]
    fn partial_price_override() {
        let prices = PriceTable::from_json(r#"{"endPost": 30.0, "emitter": 0.5}"#).expect("valid json");

        assert_eq!(prices.end_post, 30.0);
        assert_eq!(prices.emitter, 0.5);
        assert_eq!(prices.line_post, PriceTable::default().line_post);

        assert_matches!(PriceTable::from_json("{"), Err(LayoutError::Config(_)));
        assert_matches!(
            PriceTable::from_file("/nonexistent/prices.json"),
            Err(LayoutError::FsIo(_))
        );
    }

    #[test]
    fn cost_per_acre() {
        let cost = MaterialCost {
            posts: 100.0,
            total: 100.0,
            ..MaterialCost::default()
        };

        assert_eq!(cost.per_acre(2.0).map(|c| c.total), Some(50.0));
        assert_eq!(cost.per_acre(0.0), None);
        assert_eq!(cost.per_acre(f64::NAN), None);
    }
}
