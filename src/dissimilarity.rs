//! Precomputed pairwise dissimilarities
//!
//! The matrix is produced outside of this crate (for example from random forest proximities) and
//! is only read here. Symmetry is assumed but not verified.
use ndarray::{Array2, ArrayView2};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::dataset::Float;
use crate::error::{Error, Result};

/// Initial value of every nearest-medoid search. Dissimilarities must stay strictly below it.
pub const DISTANCE_SENTINEL: f64 = 1e8;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct DissimilarityMatrix<F> {
    matrix: Array2<F>,
}

impl<F: Float> DissimilarityMatrix<F> {
    /// Validate a square matrix of non-negative, finite dissimilarities below
    /// [`DISTANCE_SENTINEL`], with zeros on the diagonal
    pub fn new(matrix: Array2<F>) -> Result<Self> {
        let (nrows, ncols) = matrix.dim();
        if nrows != ncols {
            return Err(Error::NotSquare { nrows, ncols });
        }

        let sentinel = F::cast(DISTANCE_SENTINEL);
        for ((i, j), &value) in matrix.indexed_iter() {
            if !value.is_finite() {
                return Err(Error::NonFiniteDissimilarity(i, j));
            }
            if value < F::zero() {
                return Err(Error::NegativeDissimilarity(i, j));
            }
            if i == j && value != F::zero() {
                return Err(Error::NonZeroSelfDissimilarity(i));
            }
            if value >= sentinel {
                return Err(Error::DissimilarityOutOfRange(i, j, DISTANCE_SENTINEL));
            }
        }

        Ok(DissimilarityMatrix { matrix })
    }

    /// Build the matrix from a flattened, row-major buffer of `n * n` values
    pub fn from_flat(n: usize, values: Vec<F>) -> Result<Self> {
        Self::new(Array2::from_shape_vec((n, n), values)?)
    }

    /// Number of observations covered by the matrix
    pub fn n(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn view(&self) -> ArrayView2<F> {
        self.matrix.view()
    }

    pub fn get(&self, i: usize, j: usize) -> F {
        self.matrix[(i, j)]
    }

    pub fn into_inner(self) -> Array2<F> {
        self.matrix
    }
}
