//! Lloyd's algorithm with k-means++ seeding.
//!
//! A run moves through three phases:
//!
//! ```text
//! SEEDING ──► ITERATING ──┬──► CONVERGED
//!               ▲    │    └──► MAX_ITERATIONS_REACHED
//!               └────┘
//! ```
//!
//! Each iteration assigns every point to its nearest centroid, moves each
//! centroid to the mean of its points, and stops once every centroid moved
//! strictly less than `tolerance`. A centroid left with no points is replaced
//! by a fresh random draw from the whole dataset, so a run always yields
//! exactly `k` clusters.
//!
//! The clusters returned are the ones built in the last assignment phase.
//! Their `centroid` is the one used for that assignment, i.e. the centroid
//! *before* the final update; [`KMeansFit::centroids`] holds the updated ones.
//! On convergence the two differ by less than `tolerance`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::assignment::{assign, nearest_centroid, Cluster};
use super::objective::inertia;
use super::params::KMeansParams;
use super::seeding::kmeans_plus_plus;
use crate::centroid::centroid_of;
use crate::dataset::validate_dataset;
use crate::distance::euclidean;
use crate::error::{ClusterError, Result};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every centroid moved less than `tolerance` in the last iteration.
    Converged,
    /// `max_iterations` iterations ran without converging.
    MaxIterationsReached,
}

/// Everything one run of the convergence loop produced.
#[derive(Debug, Clone, Serialize)]
pub struct KMeansFit<'a> {
    /// Clusters from the final assignment phase, in centroid order.
    pub clusters: Vec<Cluster<'a>>,
    /// Centroids after the final update.
    pub centroids: Vec<Vec<f64>>,
    /// Completed iterations (at least 1).
    pub iterations: usize,
    pub termination: Termination,
    /// Inertia of `clusters`.
    pub inertia: f64,
    /// Inertia of each iteration's assignment, in order. Non-increasing up
    /// to floating-point rounding.
    pub inertia_history: Vec<f64>,
}

impl KMeansFit<'_> {
    /// Cluster index of every input point, in dataset order.
    pub fn labels(&self) -> Vec<usize> {
        let n: usize = self.clusters.iter().map(Cluster::len).sum();
        let mut labels = vec![0; n];
        for (label, cluster) in self.clusters.iter().enumerate() {
            for &i in &cluster.indices {
                labels[i] = label;
            }
        }
        labels
    }

    /// Index of the final centroid nearest to `point`.
    pub fn predict(&self, point: &[f64]) -> Result<usize> {
        nearest_centroid(point, &self.centroids)
    }

    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Partition `data` into `params.k` clusters.
///
/// Uses `params.seed` for the random source when set, otherwise OS entropy.
/// See [`fit_with_rng`] for the full report and an injectable generator.
pub fn k_means<'a, P: AsRef<[f64]>>(
    data: &'a [P],
    params: &KMeansParams,
) -> Result<Vec<Cluster<'a>>> {
    fit(data, params).map(|fit| fit.clusters)
}

/// [`k_means`] with a caller-supplied random source.
pub fn k_means_with_rng<'a, P, R>(
    data: &'a [P],
    params: &KMeansParams,
    rng: &mut R,
) -> Result<Vec<Cluster<'a>>>
where
    P: AsRef<[f64]>,
    R: Rng,
{
    fit_with_rng(data, params, rng).map(|fit| fit.clusters)
}

/// Run the convergence loop once and return the full report.
pub fn fit<'a, P: AsRef<[f64]>>(data: &'a [P], params: &KMeansParams) -> Result<KMeansFit<'a>> {
    let mut rng = params.rng();
    fit_with_rng(data, params, &mut rng)
}

/// [`fit`] with a caller-supplied random source.
///
/// Input is validated before any randomness is consumed.
pub fn fit_with_rng<'a, P, R>(
    data: &'a [P],
    params: &KMeansParams,
    rng: &mut R,
) -> Result<KMeansFit<'a>>
where
    P: AsRef<[f64]>,
    R: Rng,
{
    validate_input(data, params)?;
    run(data, params, rng)
}

/// Validate a dataset together with parameters. Returns the dimensionality.
pub(crate) fn validate_input<P: AsRef<[f64]>>(
    data: &[P],
    params: &KMeansParams,
) -> Result<usize> {
    let dimension = validate_dataset(data)?;
    if params.k == 0 || params.k > data.len() {
        return Err(ClusterError::InvalidClusterCount {
            k: params.k,
            n_points: data.len(),
        });
    }
    params.validate()?;
    Ok(dimension)
}

/// One full run on already-validated input.
pub(crate) fn run<'a, P, R>(
    data: &'a [P],
    params: &KMeansParams,
    rng: &mut R,
) -> Result<KMeansFit<'a>>
where
    P: AsRef<[f64]>,
    R: Rng,
{
    tracing::debug!(
        k = params.k,
        n_points = data.len(),
        dimension = data.first().map_or(0, |p| p.as_ref().len()),
        max_iterations = params.max_iterations,
        tolerance = params.tolerance,
        "starting k-means run"
    );

    let mut centroids = kmeans_plus_plus(data, params.k, rng)?;
    let mut inertia_history = Vec::new();
    let mut iterations = 0;

    loop {
        let clusters = assign(data, &centroids)?;
        inertia_history.push(inertia(&clusters)?);

        let mut updated = Vec::with_capacity(centroids.len());
        for (i, cluster) in clusters.iter().enumerate() {
            if cluster.is_empty() {
                tracing::debug!(
                    cluster = i,
                    iteration = iterations,
                    "re-seeding empty cluster"
                );
                let centroid = kmeans_plus_plus(data, 1, rng)?
                    .pop()
                    .ok_or(ClusterError::EmptyDataset)?;
                updated.push(centroid);
            } else {
                updated.push(centroid_of(&cluster.points)?);
            }
        }

        let mut converged = true;
        let mut max_shift = 0.0f64;
        for (old, new) in centroids.iter().zip(updated.iter()) {
            let shift = euclidean(old, new)?;
            max_shift = max_shift.max(shift);
            if shift >= params.tolerance {
                converged = false;
            }
        }

        centroids = updated;
        iterations += 1;
        tracing::trace!(iteration = iterations, max_shift, "k-means iteration");

        let termination = if converged {
            Termination::Converged
        } else if iterations >= params.max_iterations {
            Termination::MaxIterationsReached
        } else {
            continue;
        };

        let final_inertia = inertia_history.last().copied().unwrap_or(0.0);
        tracing::debug!(
            iterations,
            ?termination,
            inertia = final_inertia,
            "k-means run finished"
        );

        return Ok(KMeansFit {
            clusters,
            centroids,
            iterations,
            termination,
            inertia: final_inertia,
            inertia_history,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn blobs() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 1.0],
            vec![1.2, 0.9],
            vec![0.9, 1.1],
            vec![5.0, 5.0],
            vec![5.1, 4.9],
            vec![4.8, 5.2],
            vec![9.0, 9.0],
            vec![9.2, 8.9],
            vec![8.9, 9.1],
        ]
    }

    #[test]
    fn separates_three_blobs() {
        let data = blobs();
        let fit = fit(&data, &KMeansParams::new(3).with_seed(42)).unwrap();

        assert_eq!(fit.clusters.len(), 3);
        let labels = fit.labels();
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_eq!(labels[6], labels[8]);
        assert_ne!(labels[0], labels[3]);
        assert_ne!(labels[3], labels[6]);
    }

    #[test]
    fn k_equals_one_is_the_global_mean() {
        let data = vec![vec![0.0, 0.0], vec![2.0, 4.0], vec![4.0, 2.0]];
        let fit = fit(&data, &KMeansParams::new(1).with_seed(1)).unwrap();
        assert_eq!(fit.clusters.len(), 1);
        assert_eq!(fit.clusters[0].len(), 3);
        assert!(fit.converged());
        assert!((fit.centroids[0][0] - 2.0).abs() < 1e-12);
        assert!((fit.centroids[0][1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn stops_at_max_iterations() {
        let data = blobs();
        // Zero tolerance can only be met by a shift that is strictly below 0.
        let params = KMeansParams::new(3)
            .with_seed(5)
            .with_tolerance(0.0)
            .with_max_iterations(4);
        let fit = fit(&data, &params).unwrap();
        assert_eq!(fit.iterations, 4);
        assert_eq!(fit.termination, Termination::MaxIterationsReached);
        assert_eq!(fit.inertia_history.len(), 4);
    }

    #[test]
    fn returned_clusters_keep_pre_update_centroids() {
        let data = blobs();
        let params = KMeansParams::new(3).with_seed(5).with_max_iterations(1);
        let mut rng = StdRng::seed_from_u64(5);
        let fit = fit_with_rng(&data, &params, &mut rng).unwrap();

        // After a single iteration the clusters still carry the seeded
        // centroids, which are data points, while `centroids` are the means.
        for cluster in &fit.clusters {
            assert!(data.contains(&cluster.centroid));
        }
        for (cluster, updated) in fit.clusters.iter().zip(&fit.centroids) {
            if !cluster.is_empty() {
                assert_eq!(updated, &centroid_of(&cluster.points).unwrap());
            }
        }
    }

    #[test]
    fn duplicate_points_still_give_k_clusters() {
        let data = vec![vec![3.0, 3.0]; 5];
        let fit = fit(&data, &KMeansParams::new(3).with_seed(0)).unwrap();
        assert_eq!(fit.clusters.len(), 3);
        assert_eq!(fit.clusters.iter().map(Cluster::len).sum::<usize>(), 5);
        assert_eq!(fit.inertia, 0.0);
    }

    #[test]
    fn predict_uses_final_centroids() {
        let data = blobs();
        let fit = fit(&data, &KMeansParams::new(3).with_seed(42)).unwrap();
        let labels = fit.labels();
        assert_eq!(fit.predict(&[1.05, 1.0]).unwrap(), labels[0]);
        assert_eq!(fit.predict(&[9.1, 9.0]).unwrap(), labels[6]);
        assert!(fit.predict(&[1.0]).is_err());
    }

    #[test]
    fn validation_happens_before_seeding() {
        let data = vec![vec![1.0, 1.0], vec![2.0, 2.0]];
        assert!(matches!(
            k_means(&data, &KMeansParams::new(3)),
            Err(ClusterError::InvalidClusterCount { k: 3, n_points: 2 })
        ));
        assert!(matches!(
            k_means(&data, &KMeansParams::new(2).with_max_iterations(0)),
            Err(ClusterError::InvalidParameter(_))
        ));
        let nan = vec![vec![1.0, f64::NAN], vec![2.0, 2.0]];
        assert!(matches!(
            k_means(&nan, &KMeansParams::new(1)),
            Err(ClusterError::InvalidCoordinate { point: 0, dim: 1, .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_fit_is_deterministic_given_seed(
            seed in any::<u64>(),
            dimension in 1usize..6,
            num_points in 1usize..40,
            k in 1usize..8,
            raw in proptest::collection::vec(-50.0f64..50.0, 240),
        ) {
            prop_assume!(k <= num_points);
            let data: Vec<Vec<f64>> = raw
                .chunks(dimension)
                .take(num_points)
                .map(<[f64]>::to_vec)
                .collect();
            prop_assume!(data.len() == num_points);

            let params = KMeansParams::new(k).with_seed(seed);
            let a = fit(&data, &params).unwrap();
            let b = fit(&data, &params).unwrap();
            prop_assert_eq!(a.labels(), b.labels());
            prop_assert_eq!(a.centroids, b.centroids);
            prop_assert_eq!(a.iterations, b.iterations);
        }

        #[test]
        fn prop_inertia_is_non_increasing(
            seed in any::<u64>(),
            num_points in 2usize..60,
            k in 1usize..6,
            raw in proptest::collection::vec(-10.0f64..10.0, 120),
        ) {
            prop_assume!(k <= num_points);
            let data: Vec<Vec<f64>> = raw
                .chunks(2)
                .take(num_points)
                .map(<[f64]>::to_vec)
                .collect();

            let fit = fit(&data, &KMeansParams::new(k).with_seed(seed)).unwrap();
            for pair in fit.inertia_history.windows(2) {
                prop_assert!(
                    pair[1] <= pair[0] + 1e-9 * pair[0].max(1.0),
                    "inertia rose from {} to {}",
                    pair[0],
                    pair[1]
                );
            }
            prop_assert_eq!(fit.inertia, *fit.inertia_history.last().unwrap());
        }
    }
}
