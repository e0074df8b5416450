//! Clustering configuration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{ClusterError, Result};

/// Default cap on assign/update iterations per run.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Default centroid-movement threshold for convergence.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// Default number of independent runs for best-of-N selection.
pub const DEFAULT_NUM_RUNS: usize = 10;

/// Parameters for [`k_means`](super::k_means) and
/// [`run_with_optimal_inertia`](super::run_with_optimal_inertia).
///
/// Deserializing fills omitted fields with their defaults, so `{"k": 3}` is a
/// complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansParams {
    /// Number of clusters. Must satisfy `1 <= k <= data.len()`.
    pub k: usize,
    /// Upper bound on iterations of a single run.
    pub max_iterations: usize,
    /// A run converges once every centroid moves strictly less than this.
    pub tolerance: f64,
    /// Independent runs tried by the best-of-N selector.
    pub num_runs: usize,
    /// Seed for the default random source. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for KMeansParams {
    fn default() -> Self {
        Self {
            k: 1,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            num_runs: DEFAULT_NUM_RUNS,
            seed: None,
        }
    }
}

impl KMeansParams {
    /// Parameters for `k` clusters with every other field at its default.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_num_runs(mut self, num_runs: usize) -> Self {
        self.num_runs = num_runs;
        self
    }

    /// Configure a deterministic seed for the default random source.
    ///
    /// When set, repeated calls on the same inputs produce identical results.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the parameters that do not depend on the dataset.
    ///
    /// `num_runs` is only consulted by the best-of-N selector, which checks it
    /// separately.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(ClusterError::invalid_parameter("k must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(ClusterError::invalid_parameter(
                "max_iterations must be at least 1",
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ClusterError::invalid_parameter(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Random source implied by `seed`.
    pub(crate) fn rng(&self) -> StdRng {
        // Use an explicit seed when configured; otherwise derive one from entropy.
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        StdRng::seed_from_u64(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = KMeansParams::new(4);
        assert_eq!(p.k, 4);
        assert_eq!(p.max_iterations, 100);
        assert_eq!(p.tolerance, 1e-6);
        assert_eq!(p.num_runs, 10);
        assert_eq!(p.seed, None);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            KMeansParams::new(0).validate(),
            Err(ClusterError::InvalidParameter(
                "k must be at least 1".to_string()
            ))
        );
        assert!(matches!(
            KMeansParams::new(2).with_max_iterations(0).validate(),
            Err(ClusterError::InvalidParameter(_))
        ));
        assert!(matches!(
            KMeansParams::new(2).with_tolerance(-1.0).validate(),
            Err(ClusterError::InvalidParameter(_))
        ));
        assert!(matches!(
            KMeansParams::new(2).with_tolerance(f64::NAN).validate(),
            Err(ClusterError::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_tolerance_is_allowed() {
        assert!(KMeansParams::new(2).with_tolerance(0.0).validate().is_ok());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let p = KMeansParams::new(2).with_seed(7);
        let a: u64 = p.rng().random();
        let b: u64 = p.rng().random();
        assert_eq!(a, b);
    }
}
