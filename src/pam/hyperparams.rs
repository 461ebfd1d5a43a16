use crate::param_guard::ParamGuard;
use crate::pam::PamParamsError;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The set of hyperparameters that can be specified for the execution of
/// the [PAM algorithm](crate::Pam).
pub struct PamValidParams {
    /// The number of medoids to select.
    n_clusters: usize,
    /// The swap phase stops after `max_n_swaps` applied swaps even if an
    /// improving swap is still available.
    max_n_swaps: usize,
}

#[derive(Clone, Debug, PartialEq)]
/// An helper struct used to construct a set of [valid hyperparameters](PamValidParams) for
/// the [PAM algorithm](crate::Pam) (using the builder pattern).
pub struct PamParams(PamValidParams);

impl PamParams {
    /// `new` lets us configure our clustering:
    /// * we will be selecting `n_clusters` medoids among the observations;
    /// * the swap phase runs until no swap lowers the total dissimilarity, or
    ///   until `max_n_swaps` swaps have been applied.
    ///
    /// Defaults are provided if optional parameters are not specified:
    /// * `max_n_swaps = 1000`
    pub fn new(n_clusters: usize) -> Self {
        Self(PamValidParams {
            n_clusters,
            max_n_swaps: 1000,
        })
    }

    /// Change the value of `max_n_swaps`
    pub fn max_n_swaps(mut self, max_n_swaps: usize) -> Self {
        self.0.max_n_swaps = max_n_swaps;
        self
    }
}

impl ParamGuard for PamParams {
    type Checked = PamValidParams;
    type Error = PamParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if self.0.n_clusters == 0 {
            Err(PamParamsError::NClusters)
        } else if self.0.max_n_swaps == 0 {
            Err(PamParamsError::MaxSwaps)
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl PamValidParams {
    /// The number of medoids to select.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Upper bound on the number of swaps applied by the swap phase.
    pub fn max_n_swaps(&self) -> usize {
        self.max_n_swaps
    }
}

#[cfg(test)]
mod tests {
    use crate::param_guard::ParamGuard;
    use crate::pam::{Pam, PamParams, PamParamsError, PamValidParams};

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<PamParams>();
        has_autotraits::<PamValidParams>();
    }

    #[test]
    fn n_clusters_cannot_be_zero() {
        let res = Pam::params(0).check();
        assert!(matches!(res, Err(PamParamsError::NClusters)))
    }

    #[test]
    fn max_n_swaps_cannot_be_zero() {
        let res = Pam::params(2).max_n_swaps(0).check();
        assert!(matches!(res, Err(PamParamsError::MaxSwaps)))
    }

    #[test]
    fn defaults() {
        let params = Pam::params(3).check().unwrap();
        assert_eq!(params.n_clusters(), 3);
        assert_eq!(params.max_n_swaps(), 1000);
    }
}
