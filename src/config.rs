/// Configuration for a k-means clustering run.
///
/// `k` is required at construction; every other option is genuinely optional
/// and unset by default. Note that if neither `max_iterations` nor
/// `min_delta` is configured the Lloyd loop has no stopping condition and
/// may never terminate; supplying at least one is the caller's
/// responsibility.
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Maximum number of iterations. `None` means no cap.
    pub max_iterations: Option<usize>,

    /// Convergence threshold on per-mean displacement. The algorithm stops
    /// once every mean moved at most this far (Euclidean distance) during an
    /// iteration. `None` disables the convergence test.
    pub min_delta: Option<f64>,

    /// Random seed for k-means++ initialization. `None` seeds from entropy,
    /// making each run non-deterministic.
    pub seed: Option<u64>,

    /// Print progress to stderr during clustering
    pub verbose: bool,
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: None,
            min_delta: None,
            seed: None,
            verbose: false,
        }
    }

    /// Set the maximum number of iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the convergence threshold on per-mean displacement
    pub fn with_min_delta(mut self, min_delta: f64) -> Self {
        self.min_delta = Some(min_delta);
        self
    }

    /// Set the random seed for reproducible initialization
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
