//! Partitional clustering: k-means with k-means++ seeding.
//!
//! K-means minimizes the within-cluster sum of squares (inertia):
//!
//! ```text
//! J = Σ_c Σ_{x ∈ c} ||x - μ_c||²
//! ```
//!
//! Lloyd's algorithm alternates an assignment step (each point to its nearest
//! centroid) with an update step (each centroid to the mean of its points).
//! Neither step can raise `J`, so the loop settles into a local minimum.
//! Which minimum depends on the initial centroids, hence k-means++ seeding and
//! the best-of-N wrapper in [`run_with_optimal_inertia`].
//!
//! Every randomized entry point has a `*_with_rng` twin that takes the random
//! source explicitly; the plain versions derive one from
//! [`KMeansParams::seed`].

mod assignment;
mod kmeans;
mod multi_run;
mod objective;
mod params;
mod seeding;

pub use assignment::{assign, nearest_centroid, Cluster};
pub use kmeans::{fit, fit_with_rng, k_means, k_means_with_rng, KMeansFit, Termination};
pub use multi_run::{
    best_of, best_of_with_rng, run_with_optimal_inertia, run_with_optimal_inertia_with_rng,
    BestOf,
};
pub use objective::inertia;
pub use params::{KMeansParams, DEFAULT_MAX_ITERATIONS, DEFAULT_NUM_RUNS, DEFAULT_TOLERANCE};
pub use seeding::kmeans_plus_plus;
