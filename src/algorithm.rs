use crate::config::KMeansConfig;
use crate::distance::{distance, nearest_mean};
use crate::error::KMeansError;
use crate::init::init_plus_plus;
use num_traits::{Float, ToPrimitive};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Result of a k-means clustering run
#[derive(Debug, Clone)]
pub struct KMeansResult<T, const N: usize> {
    /// Final means, exactly `k` of them
    pub means: Vec<[T; N]>,
    /// Index of the nearest mean for each input point, in `[0, k)`
    pub assignments: Vec<usize>,
    /// Number of assignment/update cycles performed
    pub n_iterations: usize,
}

/// Run Lloyd's k-means algorithm with k-means++ initialization.
///
/// Alternates nearest-mean assignment and mean recomputation until either
/// every mean's displacement drops to `min_delta` or below, or
/// `max_iterations` cycles have run. Stopping conditions are only checked
/// after a completed cycle, so at least one iteration always runs. The
/// returned assignments are the ones computed during the final iteration.
///
/// With a fixed seed the result is bit-identical across runs and platforms.
///
/// # Errors
///
/// Returns an error if `config.k` is 0 or `data` is empty.
pub fn kmeans_lloyd<T: Float, const N: usize>(
    data: &[[T; N]],
    config: &KMeansConfig,
) -> Result<KMeansResult<T, N>, KMeansError> {
    let k = config.k;

    if k == 0 {
        return Err(KMeansError::InvalidK(
            "k must be greater than 0".to_string(),
        ));
    }

    if data.is_empty() {
        return Err(KMeansError::EmptyDataset(
            "cannot cluster an empty dataset".to_string(),
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    if config.verbose {
        eprintln!(
            "Clustering {} points, {} dimensions, {} clusters",
            data.len(),
            N,
            k
        );
    }

    let mut means = init_plus_plus(data, k, &mut rng);
    let mut assignments = vec![0usize; data.len()];
    let mut n_iterations = 0;

    loop {
        n_iterations += 1;

        calculate_assignments(data, &means, &mut assignments);
        let new_means = calculate_means(data, &assignments, &means, k);
        let shift = max_displacement(&means, &new_means);
        means = new_means;

        if config.verbose {
            eprintln!("  Iteration {}: max shift = {:.6}", n_iterations, shift);
        }

        if let Some(min_delta) = config.min_delta {
            if shift <= min_delta {
                if config.verbose {
                    eprintln!(
                        "  Converged after {} iterations (max shift {:.6} <= min_delta {:.6})",
                        n_iterations, shift, min_delta
                    );
                }
                break;
            }
        }

        if let Some(max_iterations) = config.max_iterations {
            if n_iterations >= max_iterations {
                break;
            }
        }
    }

    Ok(KMeansResult {
        means,
        assignments,
        n_iterations,
    })
}

/// Assign each point to its nearest mean, writing into `assignments`
fn calculate_assignments<T: Float, const N: usize>(
    data: &[[T; N]],
    means: &[[T; N]],
    assignments: &mut [usize],
) {
    debug_assert_eq!(data.len(), assignments.len());

    for (point, assignment) in data.iter().zip(assignments.iter_mut()) {
        *assignment = nearest_mean(point, means);
    }
}

/// Recompute each mean as the per-dimension average of its assigned points.
///
/// Sums and counts accumulate in `T` itself, so very large clusters or
/// high-magnitude values can lose precision. A cluster with no assigned
/// points keeps its previous mean unchanged rather than collapsing to zero;
/// it stays frozen until points are reassigned to it naturally.
fn calculate_means<T: Float, const N: usize>(
    data: &[[T; N]],
    assignments: &[usize],
    old_means: &[[T; N]],
    k: usize,
) -> Vec<[T; N]> {
    debug_assert_eq!(data.len(), assignments.len());
    debug_assert_eq!(old_means.len(), k);

    let mut sums = vec![[T::zero(); N]; k];
    let mut counts = vec![T::zero(); k];

    for (point, &cluster) in data.iter().zip(assignments.iter()) {
        debug_assert!(cluster < k);
        for d in 0..N {
            sums[cluster][d] = sums[cluster][d] + point[d];
        }
        counts[cluster] = counts[cluster] + T::one();
    }

    let mut means = Vec::with_capacity(k);
    for (cluster, sum) in sums.into_iter().enumerate() {
        if counts[cluster] > T::zero() {
            let mut mean = [T::zero(); N];
            for d in 0..N {
                mean[d] = sum[d] / counts[cluster];
            }
            means.push(mean);
        } else {
            means.push(old_means[cluster]);
        }
    }

    means
}

/// Largest Euclidean distance any mean moved between two mean sets
fn max_displacement<T: Float, const N: usize>(old_means: &[[T; N]], new_means: &[[T; N]]) -> f64 {
    debug_assert_eq!(old_means.len(), new_means.len());

    old_means
        .iter()
        .zip(new_means.iter())
        .map(|(old, new)| distance(old, new).to_f64().unwrap_or(f64::INFINITY))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blob_data() -> Vec<[f64; 2]> {
        vec![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]]
    }

    #[test]
    fn test_kmeans_basic_shapes() {
        let data = two_blob_data();
        let config = KMeansConfig::new(2).with_seed(42).with_max_iterations(50);

        let result = kmeans_lloyd(&data, &config).unwrap();

        assert_eq!(result.means.len(), 2);
        assert_eq!(result.assignments.len(), 4);
        for &assignment in &result.assignments {
            assert!(assignment < 2);
        }
    }

    #[test]
    fn test_kmeans_invalid_k() {
        let data = two_blob_data();
        let config = KMeansConfig::new(0).with_max_iterations(10);

        let result = kmeans_lloyd(&data, &config);
        assert!(matches!(result, Err(KMeansError::InvalidK(_))));
    }

    #[test]
    fn test_kmeans_empty_dataset() {
        let data: Vec<[f64; 2]> = Vec::new();
        let config = KMeansConfig::new(2).with_max_iterations(10);

        let result = kmeans_lloyd(&data, &config);
        assert!(matches!(result, Err(KMeansError::EmptyDataset(_))));
    }

    #[test]
    fn test_kmeans_single_cluster_identical_points() {
        let data: Vec<[f64; 2]> = vec![[3.0, 4.0]; 3];
        let config = KMeansConfig::new(1).with_seed(1).with_max_iterations(10);

        let result = kmeans_lloyd(&data, &config).unwrap();

        assert_eq!(result.means, vec![[3.0, 4.0]]);
        assert_eq!(result.assignments, vec![0, 0, 0]);
    }

    #[test]
    fn test_kmeans_huge_min_delta_stops_after_one_iteration() {
        let data = two_blob_data();
        let config = KMeansConfig::new(2).with_seed(42).with_min_delta(1e12);

        let result = kmeans_lloyd(&data, &config).unwrap();
        assert_eq!(result.n_iterations, 1);
    }

    #[test]
    fn test_kmeans_max_iterations_exact() {
        let data = two_blob_data();
        let config = KMeansConfig::new(2).with_seed(42).with_max_iterations(7);

        // No min_delta, so the cap is the only stopping condition
        let result = kmeans_lloyd(&data, &config).unwrap();
        assert_eq!(result.n_iterations, 7);
    }

    #[test]
    fn test_calculate_assignments_matches_nearest_mean() {
        let data = two_blob_data();
        let means = vec![[0.0, 0.5], [10.0, 10.5]];
        let mut assignments = vec![0usize; data.len()];

        calculate_assignments(&data, &means, &mut assignments);
        assert_eq!(assignments, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_calculate_means_averages_per_cluster() {
        let data = two_blob_data();
        let assignments = vec![0, 0, 1, 1];
        let old_means = vec![[0.0, 0.0], [10.0, 10.0]];

        let means = calculate_means(&data, &assignments, &old_means, 2);
        assert_eq!(means, vec![[0.0, 0.5], [10.0, 10.5]]);
    }

    #[test]
    fn test_calculate_means_freezes_empty_cluster() {
        let data = two_blob_data();
        // Nothing assigned to cluster 1
        let assignments = vec![0, 0, 0, 0];
        let old_means = vec![[1.0, 1.0], [42.0, -7.0]];

        let means = calculate_means(&data, &assignments, &old_means, 2);

        assert_eq!(means[0], [5.0, 5.5]);
        // The empty cluster keeps its previous mean, bit for bit
        assert_eq!(means[1], [42.0, -7.0]);
    }

    #[test]
    fn test_max_displacement() {
        let old = vec![[0.0f64, 0.0], [1.0, 1.0]];
        let new = vec![[3.0f64, 4.0], [1.0, 1.0]];

        let shift = max_displacement(&old, &new);
        assert!((shift - 5.0).abs() < 1e-12);
    }
}
