//! Entry validation for datasets.

use crate::error::{ClusterError, Result};

/// Validate `data` and return its dimensionality `d`.
///
/// A valid dataset is non-empty, every point has the same length `d >= 1`,
/// and every coordinate is finite.
pub fn validate_dataset<P: AsRef<[f64]>>(data: &[P]) -> Result<usize> {
    let first = data.first().ok_or(ClusterError::EmptyDataset)?;
    let dimension = first.as_ref().len();
    if dimension == 0 {
        return Err(ClusterError::invalid_parameter(
            "points must have at least one coordinate",
        ));
    }

    for (point, p) in data.iter().enumerate() {
        let p = p.as_ref();
        if p.len() != dimension {
            return Err(ClusterError::dimension_mismatch(dimension, p.len()));
        }
        if let Some((dim, &value)) = p.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ClusterError::InvalidCoordinate { point, dim, value });
        }
    }

    Ok(dimension)
}
