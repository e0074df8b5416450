//! Within-cluster sum of squares.

use super::assignment::Cluster;
use crate::distance::squared_euclidean;
use crate::error::Result;

/// Inertia of a clustering:
///
/// ```text
/// Σ_c Σ_{x ∈ c} ||x - μ_c||²
/// ```
///
/// Lower is tighter. Zero for an empty slice of clusters.
pub fn inertia(clusters: &[Cluster<'_>]) -> Result<f64> {
    let mut total = 0.0;
    for cluster in clusters {
        for point in &cluster.points {
            total += squared_euclidean(point, &cluster.centroid)?;
        }
    }
    Ok(total)
}
