//! Provide traits for different classes of algorithms
//!

use std::error::Error;

/// Transformation algorithms
///
/// A transformer takes a dataset and transforms it into a different one. It has no concept of
/// state and provides therefore no method to predict new data. A typical example is the
/// synthetic augmentation, which appends generated observations to the input.
pub trait Transformer<R, T> {
    fn transform(&self, x: R) -> T;
}

/// Fittable algorithms
///
/// A fittable algorithm takes some input and creates a concept of some kind about it, here a set
/// of medoids chosen from a dissimilarity matrix. The fitted object is returned on success.
pub trait Fit<R, E: Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, input: &R) -> Result<Self::Object, E>;
}
