//! lloyd: k-means clustering with k-means++ seeding.
//!
//! Given points in `d`-dimensional space and a cluster count `k`, partition
//! the points into `k` groups that minimize within-cluster variance.
//!
//! - [`distance`]: Euclidean distance, the only metric used
//! - [`centroid`]: coordinate-wise mean of a point set
//! - [`partitioning`]: k-means++ seeding, Lloyd iterations, best-of-N restarts
//!
//! # Usage
//!
//! ```rust
//! use lloyd::{k_means, run_with_optimal_inertia, KMeansParams};
//!
//! let data = vec![
//!     vec![1.0, 1.0],
//!     vec![1.1, 0.9],
//!     vec![9.0, 9.0],
//!     vec![9.1, 8.9],
//! ];
//!
//! let params = KMeansParams::new(2).with_seed(42);
//! let clusters = k_means(&data, &params)?;
//! assert_eq!(clusters.len(), 2);
//! assert!(clusters.iter().all(|c| c.len() == 2));
//!
//! // Keep the tightest of 10 independent runs.
//! let best = run_with_optimal_inertia(&data, &params.with_num_runs(10))?;
//! assert_eq!(best.len(), 2);
//! # Ok::<(), lloyd::ClusterError>(())
//! ```
//!
//! # Nuances
//!
//! ## Returned centroids
//!
//! The clusters returned by [`k_means`] are those of the final assignment
//! phase, and each carries the centroid used for that assignment. When the
//! loop stops on `max_iterations` those centroids can differ from the
//! centroids the last update produced. [`KMeansFit::centroids`] exposes the
//! updated ones.
//!
//! ## Reproducibility
//!
//! Seeding is random. Set [`KMeansParams::seed`], or pass a generator to the
//! `*_with_rng` functions, to make results repeatable.

pub mod centroid;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod partitioning;

// Re-exports
pub use error::{ClusterError, Result};
pub use partitioning::{
    best_of, fit, inertia, k_means, run_with_optimal_inertia, BestOf, Cluster, KMeansFit,
    KMeansParams, Termination,
};
