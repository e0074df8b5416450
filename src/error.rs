//! Error types for lloyd.

use thiserror::Error;

/// Errors that can occur while validating input or clustering.
///
/// Every variant is an input-validation or numeric-integrity failure. None of
/// them are transient: retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    /// The dataset has no points.
    #[error("dataset is empty")]
    EmptyDataset,

    /// `k` is zero or larger than the number of points.
    #[error("invalid cluster count: k = {k}, dataset has {n_points} points")]
    InvalidClusterCount { k: usize, n_points: usize },

    /// Two points (or a point and a centroid) disagree on dimensionality.
    #[error("dimension mismatch: expected {expected} dimensions, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A centroid was requested over zero points.
    #[error("cannot compute the centroid of an empty cluster")]
    EmptyCluster,

    /// A coordinate is NaN or infinite.
    #[error("invalid coordinate {value} at point {point}, dimension {dim}")]
    InvalidCoordinate { point: usize, dim: usize, value: f64 },

    /// A configuration value is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ClusterError {
    pub(crate) fn dimension_mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }

    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ClusterError>;
