//! Basic k-means
//!
//! The minimal example: cluster a handful of 2D points and print the result.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example 01_basic_clustering
//! ```

use lloyd::{fit, KMeansParams};

fn main() -> lloyd::Result<()> {
    tracing_subscriber::fmt::init();

    // Three loose groups around (1,1), (5,5) and (9,9).
    let data = vec![
        vec![1.0, 1.1],
        vec![0.9, 1.0],
        vec![1.1, 0.9],
        vec![5.0, 5.1],
        vec![4.9, 5.0],
        vec![5.1, 4.9],
        vec![9.0, 9.1],
        vec![8.9, 9.0],
        vec![9.1, 8.9],
    ];

    // 1. Configure
    //    - k=3: number of clusters
    //    - seed: fixed so the output is reproducible
    let params = KMeansParams::new(3).with_seed(42);

    // 2. Fit
    let fit = fit(&data, &params)?;

    // 3. Inspect
    println!(
        "{:?} after {} iterations, inertia {:.4}",
        fit.termination, fit.iterations, fit.inertia
    );
    for (i, cluster) in fit.clusters.iter().enumerate() {
        println!(
            "cluster {i}: centroid {:?}, points {:?}",
            cluster.centroid, cluster.indices
        );
    }

    // 4. Classify a new point against the final centroids
    let query = [4.8, 5.3];
    println!("{query:?} -> cluster {}", fit.predict(&query)?);

    Ok(())
}
