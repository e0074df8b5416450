//! k-means++ initialization.
//!
//! 1. Choose the first centroid uniformly at random from the data.
//! 2. Choose each subsequent centroid with probability proportional to
//!    $D(x)^2$, the squared distance from $x$ to its nearest already-chosen
//!    centroid.
//!
//! Points are not excluded once chosen; a point whose weight is zero simply
//! has no chance of being drawn again unless every weight is zero.

use rand::Rng;

use crate::distance::squared_euclidean;
use crate::error::{ClusterError, Result};

/// Pick `k` initial centroids from `data` using k-means++.
///
/// Requires `1 <= k <= data.len()`. Centroids are copies of data points.
pub fn kmeans_plus_plus<P, R>(data: &[P], k: usize, rng: &mut R) -> Result<Vec<Vec<f64>>>
where
    P: AsRef<[f64]>,
    R: Rng,
{
    let n = data.len();
    if n == 0 {
        return Err(ClusterError::EmptyDataset);
    }
    if k == 0 || k > n {
        return Err(ClusterError::InvalidClusterCount { k, n_points: n });
    }

    let mut centroids = Vec::with_capacity(k);

    let first = rng.random_range(0..n);
    centroids.push(data[first].as_ref().to_vec());

    // Squared distance from every point to its nearest chosen centroid. Only
    // the newest centroid can lower a weight, so each round folds in just that
    // one instead of rescanning all chosen centroids.
    let mut weights = vec![f64::INFINITY; n];

    while centroids.len() < k {
        let newest = &centroids[centroids.len() - 1];
        for (weight, point) in weights.iter_mut().zip(data.iter()) {
            let d2 = squared_euclidean(point.as_ref(), newest)?;
            if d2 < *weight {
                *weight = d2;
            }
        }

        let idx = sample_weighted(&weights, rng);
        centroids.push(data[idx].as_ref().to_vec());
    }

    Ok(centroids)
}

/// Draw an index with probability proportional to `weights[i]`.
///
/// Cumulative-sum inversion: draw `r` in `[0, total)` and return the first
/// index whose running sum reaches `r`. When every weight is zero the last
/// index is returned.
fn sample_weighted<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let last = weights.len().saturating_sub(1);
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        tracing::debug!(
            n_points = weights.len(),
            "all seeding weights are zero; falling back to the last point"
        );
        return last;
    }

    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative >= threshold {
            return i;
        }
    }

    // Rounding left the running sum just short of the threshold.
    last
}
