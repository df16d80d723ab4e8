//! # kmeans-nd
//!
//! Lloyd's k-means clustering, generic over the scalar type and the point
//! dimensionality, with k-means++ seeding.
//!
//! Points are fixed-size arrays (`[T; N]`), so every point in a dataset has
//! the same dimensionality by construction and there is nothing to validate
//! at runtime. The scalar type is any [`num_traits::Float`], letting the
//! same code cluster `f32` or `f64` data.
//!
//! ## Features
//!
//! - **k-means++ initialization**: initial means are drawn from the data
//!   with probability proportional to squared distance from the means chosen
//!   so far, spreading them across the input
//! - **Reproducible runs**: a fixed seed yields bit-identical means and
//!   assignments on every platform
//! - **Stable empty clusters**: a cluster that loses all its points keeps
//!   its previous mean instead of degenerating
//!
//! ## Example
//!
//! ```rust
//! use kmeans_nd::{kmeans_lloyd, KMeansConfig};
//!
//! let data: Vec<[f64; 2]> = vec![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
//!
//! let config = KMeansConfig::new(2)
//!     .with_seed(42)
//!     .with_max_iterations(100)
//!     .with_min_delta(1e-9);
//!
//! let result = kmeans_lloyd(&data, &config).unwrap();
//!
//! assert_eq!(result.means.len(), 2);
//! assert_eq!(result.assignments.len(), 4);
//! ```
//!
//! ## Model API
//!
//! For a scikit-learn style surface, [`KMeans`] wraps the same algorithm
//! behind `train()`, `predict()` and `fit_predict()`:
//!
//! ```rust
//! use kmeans_nd::{KMeans, KMeansConfig};
//!
//! let data: Vec<[f32; 3]> = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [9.0, 9.0, 9.0]];
//!
//! let mut kmeans = KMeans::with_config(KMeansConfig::new(2).with_seed(7).with_min_delta(1e-6));
//! let labels = kmeans.fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), 3);
//! ```
//!
//! ## Termination
//!
//! The Lloyd loop stops when every mean moved at most `min_delta` during an
//! iteration, or when `max_iterations` cycles have run, whichever comes
//! first. Both are optional; configure at least one, or the loop has no
//! stopping condition.

mod algorithm;
mod config;
mod distance;
mod error;
mod init;
mod kmeans;

pub use algorithm::{kmeans_lloyd, KMeansResult};
pub use config::KMeansConfig;
pub use error::KMeansError;
pub use kmeans::KMeans;
