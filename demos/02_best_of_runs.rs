//! Best-of-N restarts
//!
//! A single k-means run can settle in a poor local minimum. Running it several
//! times and keeping the lowest-inertia result usually finds a tighter partition.
//!
//! ```bash
//! cargo run --example 02_best_of_runs --release
//! ```

use lloyd::{best_of, fit, KMeansParams};
use rand::prelude::*;

fn main() -> lloyd::Result<()> {
    tracing_subscriber::fmt::init();

    // 12 overlapping blobs on a grid.
    let mut rng = StdRng::seed_from_u64(0);
    let mut data = Vec::new();
    for gx in 0..4 {
        for gy in 0..3 {
            for _ in 0..50 {
                data.push(vec![
                    gx as f64 * 3.0 + rng.random::<f64>() * 2.0,
                    gy as f64 * 3.0 + rng.random::<f64>() * 2.0,
                ]);
            }
        }
    }

    let params = KMeansParams::new(12).with_seed(7).with_num_runs(20);

    let single = fit(&data, &params)?;
    println!("single run: inertia {:.3}", single.inertia);

    let best = best_of(&data, &params)?;
    println!(
        "best of {}: inertia {:.3} (run {})",
        params.num_runs, best.fit.inertia, best.run
    );
    for (i, inertia) in best.inertias.iter().enumerate() {
        println!("  run {i:2}: {inertia:.3}");
    }

    Ok(())
}
