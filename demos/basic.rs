//! Basic example demonstrating kmeans-nd usage
//!
//! Run with: cargo run --example basic --release

use kmeans_nd::{kmeans_lloyd, KMeansConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("=== kmeans-nd example ===\n");

    // Generate synthetic data: 3 clusters in 2D for easy visualization
    let n_samples = 300;
    let n_clusters = 3;

    println!("Generating {} samples in 2 dimensions...", n_samples);

    // Create clustered data by generating points around 3 centers
    let centers = [[-5.0f32, -5.0], [0.0, 5.0], [5.0, -5.0]];
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut data: Vec<[f32; 2]> = Vec::with_capacity(n_samples);

    for i in 0..n_samples {
        let center = centers[i % n_clusters];
        data.push([
            center[0] + rng.gen_range(-1.0..1.0),
            center[1] + rng.gen_range(-1.0..1.0),
        ]);
    }

    println!("True cluster centers:");
    for (i, center) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, center[0], center[1]);
    }
    println!();

    // Configure and run k-means
    let config = KMeansConfig::new(n_clusters)
        .with_seed(42)
        .with_max_iterations(100)
        .with_min_delta(1e-6)
        .with_verbose(true);

    let result = kmeans_lloyd(&data, &config).unwrap();

    println!("\nRecovered means after {} iterations:", result.n_iterations);
    for (i, mean) in result.means.iter().enumerate() {
        let size = result.assignments.iter().filter(|&&a| a == i).count();
        println!(
            "  Cluster {}: ({:.2}, {:.2}), {} points",
            i, mean[0], mean[1], size
        );
    }
}
