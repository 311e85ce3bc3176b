//! Error types for hole geometry and lamination documents.

use thiserror::Error;

/// Failures raised by a hole, either while computing its radial bounds or
/// while validating its parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HoleError {
    /// A user-defined outline cannot enclose an area.
    #[error("degenerate polygon: {vertices} vertices (needs >= 3)")]
    DegeneratePolygon { vertices: usize },

    /// A parameter is NaN or infinite.
    #[error("{class}.{field} is not finite ({value})")]
    NonFinite {
        class: &'static str,
        field: &'static str,
        value: f64,
    },

    /// A parameter lies outside its admissible range.
    #[error("{class}.{field} = {value} violates {constraint}")]
    OutOfRange {
        class: &'static str,
        field: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

/// Failures raised by a lamination document.
#[derive(Debug, Error)]
pub enum LamError {
    /// `Rint` or `Rext` is negative, NaN, or infinite.
    #[error("LamHole.{field} must be finite and >= 0 (got {value})")]
    InvalidRadius { field: &'static str, value: f64 },

    /// A hole failed; `index` is its position in the `hole` list.
    #[error("hole[{index}]: {source}")]
    Hole {
        index: usize,
        #[source]
        source: HoleError,
    },

    /// The document could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid lamination JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LamResult<T> = Result<T, LamError>;
