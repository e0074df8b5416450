//! Nearest-centroid assignment.

use serde::Serialize;

use crate::distance::euclidean;
use crate::error::{ClusterError, Result};

/// One centroid and the points currently assigned to it.
///
/// Points borrow from the caller's dataset; `indices[i]` is the dataset
/// position of `points[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster<'a> {
    pub centroid: Vec<f64>,
    pub points: Vec<&'a [f64]>,
    pub indices: Vec<usize>,
}

impl Cluster<'_> {
    fn empty(centroid: Vec<f64>) -> Self {
        Self {
            centroid,
            points: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Number of assigned points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Copy the assigned points out of the dataset.
    pub fn owned_points(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(|p| p.to_vec()).collect()
    }
}

/// Index of the centroid nearest to `point`.
///
/// Centroids are scanned in order and only a strictly smaller distance
/// replaces the current best, so ties go to the lowest index.
pub fn nearest_centroid(point: &[f64], centroids: &[Vec<f64>]) -> Result<usize> {
    if centroids.is_empty() {
        return Err(ClusterError::invalid_parameter(
            "at least one centroid is required",
        ));
    }

    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let dist = euclidean(point, centroid)?;
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    Ok(best)
}

/// Assign every point in `data` to its nearest centroid.
///
/// Returns one cluster per centroid, in centroid order. Each cluster lists its
/// points in dataset order and may be empty.
pub fn assign<'a, P: AsRef<[f64]>>(
    data: &'a [P],
    centroids: &[Vec<f64>],
) -> Result<Vec<Cluster<'a>>> {
    let mut clusters: Vec<Cluster<'a>> =
        centroids.iter().cloned().map(Cluster::empty).collect();

    for (i, point) in data.iter().enumerate() {
        let point = point.as_ref();
        let nearest = nearest_centroid(point, centroids)?;
        let cluster = &mut clusters[nearest];
        cluster.points.push(point);
        cluster.indices.push(i);
    }

    Ok(clusters)
}
