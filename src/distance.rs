//! Euclidean distance between dense points.
//!
//! This is the only metric the clustering engine uses. Unlike a metric that
//! silently returns `f64::INFINITY` on mismatched inputs, both functions here
//! report a [`ClusterError::DimensionMismatch`] so a bad point can never be
//! quietly ignored during assignment.

use crate::error::{ClusterError, Result};

/// Squared Euclidean distance $\sum_i (a_i - b_i)^2$.
///
/// Seeding weights and inertia are defined on squared distance, so they use
/// this directly instead of squaring [`euclidean`].
#[inline]
pub fn squared_euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ClusterError::dimension_mismatch(a.len(), b.len()));
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum())
}

/// Euclidean (L2) distance $\sqrt{\sum_i (a_i - b_i)^2}$.
#[inline]
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    squared_euclidean(a, b).map(f64::sqrt)
}
