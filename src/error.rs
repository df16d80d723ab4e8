use thiserror::Error;

/// Error types for the kmeans-nd library
#[derive(Error, Debug)]
pub enum KMeansError {
    /// The number of clusters k is invalid (must be > 0)
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// The input dataset contains no points
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call train() or fit() first.")]
    NotFitted,
}
