//! Error types used by the crate.

use thiserror::Error;

/// Vinerow error type.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A spacing parameter is zero, negative or not a finite number.
    #[error("invalid {name}: {value} ft, spacing must be a positive number of feet")]
    InvalidSpacing {
        /// Name of the rejected parameter.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Row spacing is valid but so small that the field would need more candidate rows than the limit.
    #[error("row spacing of {row_spacing_ft} ft needs more than {limit} candidate rows")]
    TooManyRows {
        /// Rejected row spacing.
        row_spacing_ft: f64,
        /// Maximum number of candidate rows for one field.
        limit: i64,
    },
    /// A count of rows, vines or materials does not fit into `u64`.
    #[error("{0} count overflows")]
    CountOverflow(&'static str),
    /// Orientation angle is not a finite number.
    #[error("invalid orientation angle: {0}")]
    InvalidOrientation(f64),
    /// Configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// Error reading configuration from the FS.
    #[error("failed to read file")]
    FsIo(#[from] std::io::Error),
}
