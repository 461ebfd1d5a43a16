//! Vector similarity measures
//!
//! These operate on raw feature vectors and are independent from the dissimilarity matrix driving
//! the clustering.
use ndarray::{ArrayBase, Data, Ix1};

use crate::dataset::Float;
use crate::error::{Error, Result};

/// Sum of the elementwise products of `x` and `y`
///
/// Fails with `Error::LengthMismatch` if the vectors differ in length.
pub fn dot_product<F: Float>(
    x: &ArrayBase<impl Data<Elem = F>, Ix1>,
    y: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> Result<F> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch(x.len(), y.len()));
    }

    Ok(x.iter().zip(y.iter()).map(|(&a, &b)| a * b).sum())
}

/// Extended Jaccard (Tanimoto) coefficient
///
/// ```text
/// x.y / (x.x + y.y - x.y)
/// ```
///
/// The denominator only vanishes when both vectors are zero, which yields
/// `Error::DegenerateVector`.
pub fn extended_jaccard<F: Float>(
    x: &ArrayBase<impl Data<Elem = F>, Ix1>,
    y: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> Result<F> {
    let xy = dot_product(x, y)?;
    let xx = dot_product(x, x)?;
    let yy = dot_product(y, y)?;

    let denominator = xx + yy - xy;
    if denominator == F::zero() {
        return Err(Error::DegenerateVector);
    }

    Ok(xy / denominator)
}
