//! Best-of-N restarts.
//!
//! Lloyd's algorithm only finds a local minimum, and which one depends on
//! seeding. Running it several times with independent seeding and keeping the
//! lowest-inertia result is the standard mitigation. Runs share nothing but
//! the random source and execute one after another.

use rand::Rng;
use serde::Serialize;

use super::assignment::Cluster;
use super::kmeans::{run, validate_input, KMeansFit};
use super::params::KMeansParams;
use crate::error::{ClusterError, Result};

/// Outcome of a best-of-N selection.
#[derive(Debug, Clone, Serialize)]
pub struct BestOf<'a> {
    /// The retained run.
    pub fit: KMeansFit<'a>,
    /// 0-based index of the retained run.
    pub run: usize,
    /// Inertia of every run, in execution order.
    pub inertias: Vec<f64>,
}

/// Run k-means `params.num_runs` times and return the lowest-inertia clusters.
pub fn run_with_optimal_inertia<'a, P: AsRef<[f64]>>(
    data: &'a [P],
    params: &KMeansParams,
) -> Result<Vec<Cluster<'a>>> {
    best_of(data, params).map(|best| best.fit.clusters)
}

/// [`run_with_optimal_inertia`] with a caller-supplied random source.
pub fn run_with_optimal_inertia_with_rng<'a, P, R>(
    data: &'a [P],
    params: &KMeansParams,
    rng: &mut R,
) -> Result<Vec<Cluster<'a>>>
where
    P: AsRef<[f64]>,
    R: Rng,
{
    best_of_with_rng(data, params, rng).map(|best| best.fit.clusters)
}

/// Best-of-N selection returning every run's score.
pub fn best_of<'a, P: AsRef<[f64]>>(data: &'a [P], params: &KMeansParams) -> Result<BestOf<'a>> {
    let mut rng = params.rng();
    best_of_with_rng(data, params, &mut rng)
}

/// [`best_of`] with a caller-supplied random source.
///
/// The first run sets the baseline. A later run replaces it only when its
/// inertia is strictly lower, so ties keep the earlier run.
pub fn best_of_with_rng<'a, P, R>(
    data: &'a [P],
    params: &KMeansParams,
    rng: &mut R,
) -> Result<BestOf<'a>>
where
    P: AsRef<[f64]>,
    R: Rng,
{
    validate_input(data, params)?;
    if params.num_runs == 0 {
        return Err(ClusterError::invalid_parameter(
            "num_runs must be at least 1",
        ));
    }

    let mut inertias = Vec::with_capacity(params.num_runs);
    let mut best: Option<(usize, KMeansFit<'a>)> = None;

    for index in 0..params.num_runs {
        let fit = run(data, params, rng)?;
        inertias.push(fit.inertia);

        let improves = match &best {
            Some((_, current)) => fit.inertia < current.inertia,
            None => true,
        };
        if improves {
            tracing::debug!(run = index, inertia = fit.inertia, "new best run");
            best = Some((index, fit));
        }
    }

    // `num_runs >= 1`, so at least one run was recorded.
    let (winner, fit) =
        best.ok_or_else(|| ClusterError::invalid_parameter("no runs executed"))?;
    Ok(BestOf {
        fit,
        run: winner,
        inertias,
    })
}
