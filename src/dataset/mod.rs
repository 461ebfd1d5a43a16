//! Datasets
//!
//! This module implements the observation set the clustering works on, together with the
//! helper traits describing the numeric types it accepts.
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, ScalarOperand};
use num_traits::{FromPrimitive, NumAssignOps, NumCast};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use std::fmt;
use std::iter::Sum;

use crate::error::{Error, Result};

mod impl_observations;

/// Class label of observations taken from the data source
pub const OBSERVED_CLASS: usize = 1;
/// Class label of observations generated by the synthetic augmenter
pub const SYNTHETIC_CLASS: usize = 2;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Feature values and dissimilarities are
/// stored with this type.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + ScalarOperand
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// A single raw feature value
///
/// Data sources deliver either numeric or boolean features. The variant is resolved into a
/// float exactly once, when the observations are built, with `false` mapping to `0.0` and `true`
/// to `1.0`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeatureValue {
    Real(f64),
    Flag(bool),
}

impl FeatureValue {
    pub fn to_float<F: Float>(self) -> F {
        match self {
            FeatureValue::Real(x) => F::cast(x),
            FeatureValue::Flag(true) => F::one(),
            FeatureValue::Flag(false) => F::zero(),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(x: f64) -> Self {
        FeatureValue::Real(x)
    }
}

impl From<bool> for FeatureValue {
    fn from(x: bool) -> Self {
        FeatureValue::Flag(x)
    }
}

/// Observations
///
/// A set of observations, each one a feature vector paired with an integer class label.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures). Every
/// observation has the same number of features by construction.
/// * `targets`: the class label of each observation with dimensionality (nsamples). Labels are
/// overwritten with [`OBSERVED_CLASS`] and [`SYNTHETIC_CLASS`] during augmentation; before that
/// they carry whatever prior label the data source provided (or zero).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Observations<F> {
    records: Array2<F>,
    targets: Array1<usize>,
}

impl<F: Float> Observations<F> {
    /// Wrap a feature matrix, every observation starts with class label zero
    pub fn new(records: Array2<F>) -> Self {
        let targets = Array1::zeros(records.nrows());
        Observations { records, targets }
    }

    /// Wrap a feature matrix together with prior class labels
    pub fn with_targets(records: Array2<F>, targets: Array1<usize>) -> Result<Self> {
        if records.nrows() != targets.len() {
            return Err(Error::TargetLengthMismatch {
                records: records.nrows(),
                targets: targets.len(),
            });
        }

        Ok(Observations { records, targets })
    }

    /// Build observations from raw rows of feature values
    ///
    /// Fails with `Error::FeatureLengthMismatch` when a row is shorter or longer than the first
    /// one.
    pub fn from_values(rows: Vec<Vec<FeatureValue>>) -> Result<Self> {
        let nfeatures = rows.first().map(Vec::len).unwrap_or(0);
        let mut flat = Vec::with_capacity(rows.len() * nfeatures);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != nfeatures {
                return Err(Error::FeatureLengthMismatch {
                    row,
                    expected: nfeatures,
                    found: values.len(),
                });
            }
            flat.extend(values.iter().map(|v| v.to_float::<F>()));
        }

        let records = Array2::from_shape_vec((rows.len(), nfeatures), flat)?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> ArrayView2<F> {
        self.records.view()
    }

    pub fn targets(&self) -> ArrayView1<usize> {
        self.targets.view()
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.nsamples() == 0
    }

    /// Feature vector of the observation at `idx`
    pub fn observation(&self, idx: usize) -> ArrayView1<F> {
        self.records.index_axis(Axis(0), idx)
    }

    /// Split into records and targets
    pub fn into_parts(self) -> (Array2<F>, Array1<usize>) {
        (self.records, self.targets)
    }
}
