use ndarray::{Array1, Array2, ArrayView2, Zip};
use ndarray_rand::rand_distr::StandardNormal;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

use crate::dataset::{Float, Observations, OBSERVED_CLASS, SYNTHETIC_CLASS};
use crate::error::{Error, Result};
use crate::traits::Transformer;

/// Seed of the per-feature extrema scan. Minima start at `+BOUND_SENTINEL`, maxima at
/// `-BOUND_SENTINEL`.
pub const BOUND_SENTINEL: f64 = 1e8;

/// Doubles an observation set with generated noise observations.
///
/// For every feature `i` the augmenter scans the observed data for its minimum `min[i]` and
/// maximum `max[i]`, then draws as many synthetic observations as there are observed ones. Each
/// synthetic feature value is sampled from a normal distribution centred on the **minimum** of
/// the feature, not on its mean, with standard deviation `(max[i] - min[i]) / n`:
///
/// ```text
/// x[i] = z * (max[i] - min[i]) / n + min[i],    z ~ N(0, 1)
/// ```
///
/// The result contains all observed rows first, labelled [`OBSERVED_CLASS`], followed by the
/// synthetic rows in generation order, labelled [`SYNTHETIC_CLASS`].
///
/// The random generator is cloned on every call to `transform`, so the same augmenter always
/// produces the same noise for the same input.
///
/// ```
/// use rf_medoids::prelude::*;
/// use rf_medoids::SyntheticAugmenter;
/// use ndarray::array;
///
/// let observed = Observations::new(array![[1., 10.], [2., 20.], [3., 30.]]);
/// let augmented = SyntheticAugmenter::new().transform(&observed).unwrap();
///
/// assert_eq!(augmented.nsamples(), 6);
/// assert_eq!(augmented.targets(), array![1, 1, 1, 2, 2, 2]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticAugmenter<R> {
    rng: R,
}

impl SyntheticAugmenter<Xoshiro256Plus> {
    pub fn new() -> Self {
        Self::with_rng(Xoshiro256Plus::seed_from_u64(42))
    }
}

impl Default for SyntheticAugmenter<Xoshiro256Plus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Clone> SyntheticAugmenter<R> {
    pub fn with_rng(rng: R) -> Self {
        SyntheticAugmenter { rng }
    }

    /// Returns the random generator
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

/// Per-feature minimum and maximum of `records`.
///
/// Values only replace the running bound when they strictly improve it, starting from
/// `BOUND_SENTINEL` for minima and `-BOUND_SENTINEL` for maxima.
pub fn feature_bounds<F: Float>(records: ArrayView2<F>) -> (Array1<F>, Array1<F>) {
    let nfeatures = records.ncols();
    let mut mins = Array1::from_elem(nfeatures, F::cast(BOUND_SENTINEL));
    let mut maxs = Array1::from_elem(nfeatures, -F::cast(BOUND_SENTINEL));

    for row in records.rows() {
        Zip::from(&mut mins)
            .and(&mut maxs)
            .and(&row)
            .for_each(|lo, hi, &x| {
                if x < *lo {
                    *lo = x;
                }
                if x > *hi {
                    *hi = x;
                }
            });
    }

    (mins, maxs)
}

impl<F: Float, R: Rng + Clone> Transformer<&Observations<F>, Result<Observations<F>>>
    for SyntheticAugmenter<R>
{
    /// Label `observed` as real data and append the same number of synthetic observations.
    ///
    /// Fails with `Error::EmptyObservations` for an empty set and with `Error::NoFeatures` when
    /// the observations carry no features, as no bounds can be computed then.
    fn transform(&self, observed: &Observations<F>) -> Result<Observations<F>> {
        if observed.is_empty() {
            return Err(Error::EmptyObservations);
        }
        if observed.nfeatures() == 0 {
            return Err(Error::NoFeatures);
        }

        let (mins, maxs) = feature_bounds(observed.records());
        let n_synthetic = observed.nsamples();
        let scale = (&maxs - &mins) / F::cast(n_synthetic);

        let mut rng = self.rng.clone();
        let synthetic = Array2::from_shape_fn((n_synthetic, observed.nfeatures()), |(_, i)| {
            let z: f64 = rng.sample(StandardNormal);
            F::cast(z) * scale[i] + mins[i]
        });

        log::debug!(
            "generated {} synthetic observations over {} features",
            n_synthetic,
            observed.nfeatures()
        );

        observed
            .clone()
            .with_class(OBSERVED_CLASS)
            .append(&Observations::new(synthetic).with_class(SYNTHETIC_CLASS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, s, Axis};

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<SyntheticAugmenter<Xoshiro256Plus>>();
    }

    #[test]
    fn bounds_per_feature() {
        let records = array![[1., -4., 0.], [3., 2., 0.], [-2., 7., 1.]];
        let (mins, maxs) = feature_bounds(records.view());

        assert_eq!(mins, array![-2., -4., 0.]);
        assert_eq!(maxs, array![3., 7., 1.]);
    }

    #[test]
    fn bounds_never_cross_the_sentinel() {
        let records = array![[2e8, -2e8]];
        let (mins, maxs) = feature_bounds(records.view());

        assert_eq!(mins, array![1e8, -2e8]);
        assert_eq!(maxs, array![2e8, -1e8]);
    }

    #[test]
    fn doubles_and_labels() {
        let records = array![[1., 5.], [2., 6.], [4., 9.], [3., 8.]];
        let observed = Observations::with_targets(records, array![0, 7, 2, 1]).unwrap();
        let augmented = SyntheticAugmenter::new().transform(&observed).unwrap();

        assert_eq!(augmented.nsamples(), 8);
        assert_eq!(augmented.nfeatures(), 2);
        assert_eq!(augmented.targets(), array![1, 1, 1, 1, 2, 2, 2, 2]);
        assert_eq!(augmented.records().slice(s![..4, ..]), observed.records());
    }

    #[test]
    fn same_augmenter_same_noise() {
        let observed = Observations::new(array![[0.0f32, 1.], [10., 3.], [5., 2.]]);
        let augmenter = SyntheticAugmenter::with_rng(Xoshiro256Plus::seed_from_u64(7));

        let first = augmenter.transform(&observed).unwrap();
        let second = augmenter.transform(&observed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn constant_feature_pins_noise_to_its_value() {
        let observed = Observations::new(array![[3., 0.], [3., 1.], [3., 2.]]);
        let augmented = SyntheticAugmenter::new().transform(&observed).unwrap();

        let synthetic = augmented.records().slice_move(s![3.., ..]);
        for &x in synthetic.index_axis(Axis(1), 0) {
            assert_abs_diff_eq!(x, 3.);
        }
    }

    #[test]
    fn empty_input_fails() {
        let observed = Observations::<f64>::new(Array2::zeros((0, 3)));
        assert!(matches!(
            SyntheticAugmenter::new().transform(&observed),
            Err(Error::EmptyObservations)
        ));
    }

    #[test]
    fn featureless_input_fails() {
        let observed = Observations::<f64>::new(Array2::zeros((3, 0)));
        assert!(matches!(
            SyntheticAugmenter::new().transform(&observed),
            Err(Error::NoFeatures)
        ));
    }
}
