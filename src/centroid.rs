//! Coordinate-wise arithmetic mean of a set of points.

use crate::error::{ClusterError, Result};

/// Centroid (coordinate-wise mean) of `points`.
///
/// Fails with [`ClusterError::EmptyCluster`] on an empty slice,
/// [`ClusterError::DimensionMismatch`] when the points disagree on length, and
/// [`ClusterError::InvalidCoordinate`] when an input coordinate is not finite.
///
/// Finite inputs always have a finite mean. A dimension whose plain sum
/// overflows is recomputed as a sum of pre-divided terms.
pub fn centroid_of<P: AsRef<[f64]>>(points: &[P]) -> Result<Vec<f64>> {
    let first = points.first().ok_or(ClusterError::EmptyCluster)?;
    let dimension = first.as_ref().len();
    let mut sums = vec![0.0f64; dimension];

    for (i, point) in points.iter().enumerate() {
        let point = point.as_ref();
        if point.len() != dimension {
            return Err(ClusterError::dimension_mismatch(dimension, point.len()));
        }
        for (dim, (sum, &value)) in sums.iter_mut().zip(point.iter()).enumerate() {
            if !value.is_finite() {
                return Err(ClusterError::InvalidCoordinate {
                    point: i,
                    dim,
                    value,
                });
            }
            *sum += value;
        }
    }

    let count = points.len() as f64;
    for (dim, sum) in sums.iter_mut().enumerate() {
        if sum.is_finite() {
            *sum /= count;
        } else {
            *sum = points.iter().map(|p| p.as_ref()[dim] / count).sum();
        }
    }

    Ok(sums)
}
