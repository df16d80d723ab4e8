use num_traits::Float;

/// Compute the squared Euclidean distance between two points.
///
/// Squared distance is used throughout the crate: square root is monotonic,
/// so relative ordering of distances is unaffected by skipping it.
#[inline]
pub fn distance_sq<T: Float, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    let mut sum = T::zero();
    for i in 0..N {
        let d = a[i] - b[i];
        sum = sum + d * d;
    }
    sum
}

/// Compute the Euclidean distance between two points
#[inline]
pub fn distance<T: Float, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    distance_sq(a, b).sqrt()
}

/// Find the index of the mean nearest to a point.
///
/// Comparison is strict less-than, so ties resolve to the lowest index.
/// Panics if `means` is empty.
pub fn nearest_mean<T: Float, const N: usize>(point: &[T; N], means: &[[T; N]]) -> usize {
    debug_assert!(!means.is_empty(), "means must be non-empty");

    let mut best_idx = 0;
    let mut best_dist = distance_sq(point, &means[0]);

    for (i, mean) in means.iter().enumerate().skip(1) {
        let dist = distance_sq(point, mean);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }

    best_idx
}

/// Squared distance from a point to its nearest mean.
///
/// Used for the k-means++ sampling weights.
pub fn nearest_distance_sq<T: Float, const N: usize>(point: &[T; N], means: &[[T; N]]) -> T {
    debug_assert!(!means.is_empty(), "means must be non-empty");

    means
        .iter()
        .map(|mean| distance_sq(point, mean))
        .fold(T::infinity(), T::min)
}
