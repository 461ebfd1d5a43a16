//! Error types in rf-medoids
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("no observations to work with")]
    EmptyObservations,
    #[error("observations have no features, cannot compute feature bounds")]
    NoFeatures,
    #[error("observation {row} has {found} features, expected {expected}")]
    FeatureLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{targets} class labels given for {records} observations")]
    TargetLengthMismatch { records: usize, targets: usize },
    #[error("dissimilarity matrix is not square: {nrows}x{ncols}")]
    NotSquare { nrows: usize, ncols: usize },
    #[error("negative dissimilarity at ({0}, {1})")]
    NegativeDissimilarity(usize, usize),
    #[error("non-finite dissimilarity at ({0}, {1})")]
    NonFiniteDissimilarity(usize, usize),
    #[error("observation {0} has a non-zero dissimilarity to itself")]
    NonZeroSelfDissimilarity(usize),
    #[error("dissimilarity at ({0}, {1}) reaches the distance sentinel {2}")]
    DissimilarityOutOfRange(usize, usize, f64),
    #[error("dissimilarity matrix covers {matrix} observations but {observations} were given")]
    ObservationCountMismatch { observations: usize, matrix: usize },
    #[error("feature vectors have different lengths: {0} and {1}")]
    LengthMismatch(usize, usize),
    #[error("extended Jaccard coefficient is undefined for two zero vectors")]
    DegenerateVector,
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}
