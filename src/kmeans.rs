use crate::algorithm::{kmeans_lloyd, KMeansResult};
use crate::config::KMeansConfig;
use crate::distance::nearest_mean;
use crate::error::KMeansError;
use num_traits::Float;

/// K-means clustering model generic over scalar type and point dimension.
///
/// Point dimensionality is part of the type, so a `KMeans<f32, 3>` can only
/// ever see `[f32; 3]` points and dimension mismatches are impossible at
/// runtime. The API follows the familiar scikit-learn shape: `train`/`fit`
/// to learn means, `predict` to assign new points to them.
///
/// # Example
///
/// ```
/// use kmeans_nd::{KMeans, KMeansConfig};
///
/// let data: Vec<[f64; 2]> = vec![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
///
/// let config = KMeansConfig::new(2).with_seed(42).with_min_delta(1e-9);
/// let mut kmeans = KMeans::with_config(config);
///
/// let assignments = kmeans.fit_predict(&data).unwrap();
/// assert_eq!(assignments.len(), 4);
/// assert_eq!(kmeans.means().unwrap().len(), 2);
/// ```
pub struct KMeans<T, const N: usize> {
    /// Model configuration
    config: KMeansConfig,

    /// Trained means (None if not yet fitted)
    means: Option<Vec<[T; N]>>,
}

impl<T: Float, const N: usize> KMeans<T, N> {
    /// Create a new model with the given number of clusters and no stopping
    /// condition configured beyond what the caller adds later.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn new(k: usize) -> Self {
        assert!(k > 0, "k must be greater than 0");

        Self {
            config: KMeansConfig::new(k),
            means: None,
        }
    }

    /// Create a new model with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.k` is 0.
    pub fn with_config(config: KMeansConfig) -> Self {
        assert!(config.k > 0, "k must be greater than 0");

        Self {
            config,
            means: None,
        }
    }

    /// Cluster the data and store the resulting means in the model.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty.
    pub fn train(&mut self, data: &[[T; N]]) -> Result<(), KMeansError> {
        let result = kmeans_lloyd(data, &self.config)?;
        self.means = Some(result.means);
        Ok(())
    }

    /// Fit the model to the data. Equivalent to [`train`](Self::train) but
    /// returns `&mut Self` for method chaining.
    pub fn fit(&mut self, data: &[[T; N]]) -> Result<&mut Self, KMeansError> {
        self.train(data)?;
        Ok(self)
    }

    /// Assign each point to the nearest trained mean.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::NotFitted`] if the model has not been trained.
    pub fn predict(&self, data: &[[T; N]]) -> Result<Vec<usize>, KMeansError> {
        let means = self.means.as_ref().ok_or(KMeansError::NotFitted)?;

        Ok(data.iter().map(|point| nearest_mean(point, means)).collect())
    }

    /// Cluster the data and return its assignments in one call.
    ///
    /// Unlike `train` followed by `predict`, this returns the assignments
    /// computed during the final clustering iteration.
    pub fn fit_predict(&mut self, data: &[[T; N]]) -> Result<Vec<usize>, KMeansError> {
        let result: KMeansResult<T, N> = kmeans_lloyd(data, &self.config)?;
        self.means = Some(result.means);
        Ok(result.assignments)
    }

    /// Get the trained means, or `None` if the model has not been fitted
    pub fn means(&self) -> Option<&[[T; N]]> {
        self.means.as_deref()
    }

    /// Get the number of clusters
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the configuration
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}
