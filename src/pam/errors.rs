use thiserror::Error;

/// An error when fitting with an invalid hyperparameter
#[derive(Error, Debug)]
pub enum PamParamsError {
    #[error("n_clusters cannot be 0")]
    NClusters,
    #[error("max_n_swaps cannot be 0")]
    MaxSwaps,
}

/// An error when clustering with PAM
#[derive(Error, Debug)]
pub enum PamError {
    /// When any of the hyperparameters are set the wrong value
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] PamParamsError),
    /// When more medoids are requested than there are observations, or none at all
    #[error("Cannot select {n_clusters} medoids from {n_observations} observations")]
    InvalidClusterCount {
        n_clusters: usize,
        n_observations: usize,
    },
    #[error(transparent)]
    Data(#[from] crate::error::Error),
}
