use crate::distance::nearest_distance_sq;
use num_traits::{Float, ToPrimitive};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Select k initial means from the data using k-means++ weighted sampling.
///
/// The first mean is drawn uniformly. Each subsequent mean is drawn with
/// probability proportional to the squared distance from each point to its
/// nearest already-chosen mean, spreading the initial means across the data.
/// Repetition across draws is permitted, though the weighting makes exact
/// duplicates improbable.
pub fn init_plus_plus<T: Float, const N: usize>(
    data: &[[T; N]],
    k: usize,
    rng: &mut ChaCha8Rng,
) -> Vec<[T; N]> {
    debug_assert!(k > 0, "k must be greater than 0");
    debug_assert!(!data.is_empty(), "data must be non-empty");

    let mut means = Vec::with_capacity(k);
    means.push(data[rng.gen_range(0..data.len())]);

    while means.len() < k {
        let weights: Vec<f64> = data
            .iter()
            .map(|point| nearest_distance_sq(point, &means).to_f64().unwrap_or(0.0))
            .collect();

        let idx = sample_weighted(&weights, rng);
        means.push(data[idx]);
    }

    means
}

/// Draw an index with probability proportional to its weight.
///
/// An all-zero weight vector (every point coincides with a chosen mean)
/// degenerates to a uniform draw.
fn sample_weighted(weights: &[f64], rng: &mut ChaCha8Rng) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.gen_range(0..weights.len());
    }

    let mut remaining = rng.gen_range(0.0..total);
    for (i, &w) in weights.iter().enumerate() {
        remaining -= w;
        if remaining <= 0.0 {
            return i;
        }
    }

    // Rounding in the cumulative sum can leave a sliver of probability mass
    // past the last positive weight
    weights.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_init_returns_k_means_from_data() {
        let data: Vec<[f32; 2]> = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [5.0, 5.0], [6.0, 5.0]];
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let means = init_plus_plus(&data, 3, &mut rng);

        assert_eq!(means.len(), 3);
        for mean in &means {
            assert!(data.contains(mean), "every initial mean must be a data point");
        }
    }

    #[test]
    fn test_init_is_deterministic_with_seed() {
        let data: Vec<[f64; 3]> = (0..50)
            .map(|i| [i as f64, (i * 7 % 13) as f64, (i * 3 % 5) as f64])
            .collect();

        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);

        let means1 = init_plus_plus(&data, 5, &mut rng1);
        let means2 = init_plus_plus(&data, 5, &mut rng2);

        assert_eq!(means1, means2);
    }

    #[test]
    fn test_init_identical_points_falls_back_to_uniform() {
        // All weights are zero after the first draw; sampling must not fail
        let data: Vec<[f32; 2]> = vec![[2.0, 2.0]; 8];
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let means = init_plus_plus(&data, 3, &mut rng);

        assert_eq!(means.len(), 3);
        for mean in &means {
            assert_eq!(*mean, [2.0, 2.0]);
        }
    }

    #[test]
    fn test_sample_weighted_respects_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        let weights = [0.0, 4.5, 0.0];

        for _ in 0..20 {
            assert_eq!(sample_weighted(&weights, &mut rng), 1);
        }
    }

    #[test]
    fn test_sample_weighted_all_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        let weights = [0.0; 4];

        for _ in 0..20 {
            let idx = sample_weighted(&weights, &mut rng);
            assert!(idx < 4);
        }
    }

    #[test]
    fn test_init_spreads_means_over_separated_clusters() {
        // Two tight, distant blobs: the second mean should come from the
        // blob the first one missed
        let mut data: Vec<[f64; 2]> = Vec::new();
        for i in 0..10 {
            data.push([i as f64 * 0.01, 0.0]);
            data.push([100.0 + i as f64 * 0.01, 0.0]);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let means = init_plus_plus(&data, 2, &mut rng);

        let left = means.iter().filter(|m| m[0] < 50.0).count();
        assert_eq!(left, 1, "one mean per blob, got {:?}", means);
    }
}
