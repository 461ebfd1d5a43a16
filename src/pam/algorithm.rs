use ndarray::Array1;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::dataset::{Float, Observations};
use crate::dissimilarity::DissimilarityMatrix;
use crate::error::Error;
use crate::pam::medoids::nearest_two;
use crate::pam::{build_phase, swap_phase, MedoidSet, PamError, PamParams, PamValidParams};
use crate::param_guard::ParamGuard;
use crate::traits::Fit;

/// Partitioning Around Medoids (PAM) selects `k` observations, the *medoids*, such that the sum
/// of dissimilarities between every other observation and its closest medoid is small.
///
/// Unlike K-means, PAM never looks at feature vectors: it works from a precomputed
/// [dissimilarity matrix](DissimilarityMatrix) alone, and its cluster representatives are always
/// actual observations.
///
/// ## The algorithm
///
/// PAM runs in two phases:
/// - build phase: greedily pick the observation with the smallest total dissimilarity, then
///   repeatedly add the observation which most reduces the remaining observations' distance to
///   their nearest medoid (see [`build_phase`]);
/// - swap phase: repeatedly exchange the medoid and non-medoid pair that lowers the total
///   dissimilarity the most, until no exchange helps (see [`swap_phase`]).
///
/// Both phases are deterministic: ties are always resolved in favour of the first candidate in
/// scan order.
///
/// More details on the algorithm can be found [here](https://www.cs.umb.edu/cs738/pam1.pdf).
///
/// ## Tutorial
///
/// ```
/// use rf_medoids::prelude::*;
/// use rf_medoids::Pam;
/// use ndarray::array;
///
/// let dissimilarity = DissimilarityMatrix::new(array![
///     [0., 2., 6., 10.],
///     [2., 0., 5., 9.],
///     [6., 5., 0., 4.],
///     [10., 9., 4., 0.]
/// ])
/// .unwrap();
///
/// let clustering = Pam::params(2).fit(&dissimilarity).unwrap();
///
/// assert_eq!(clustering.medoid_indices(), &[2, 1]);
/// assert_eq!(clustering.memberships(), &array![1, 1, 0, 0]);
/// ```
pub struct Pam;

impl Pam {
    /// Configures PAM to select `n_clusters` medoids
    ///
    /// Defaults are provided if the optional parameters are not specified:
    /// * `max_n_swaps = 1000`
    pub fn params(n_clusters: usize) -> PamParams {
        PamParams::new(n_clusters)
    }
}

/// The medoids found by [`Pam`], with the assignment of every observation to its closest one.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct PamClustering<F> {
    medoid_indices: Vec<usize>,
    memberships: Array1<usize>,
    cost: F,
    n_swaps: usize,
    converged: bool,
}

impl<F: Float> PamClustering<F> {
    /// Indices of the medoids into the clustered observations, ordered by medoid position
    pub fn medoid_indices(&self) -> &[usize] {
        &self.medoid_indices
    }

    /// For every observation, the position in `medoid_indices` of its closest medoid
    pub fn memberships(&self) -> &Array1<usize> {
        &self.memberships
    }

    /// Sum of the dissimilarities between each non-medoid and its closest medoid
    pub fn cost(&self) -> F {
        self.cost
    }

    /// Number of swaps applied by the swap phase
    pub fn n_swaps(&self) -> usize {
        self.n_swaps
    }

    /// `false` if the swap phase stopped at `max_n_swaps` with improvements left
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Copy the medoid observations out of `observations`
    pub fn medoids(&self, observations: &Observations<F>) -> Result<Observations<F>, Error> {
        if observations.nsamples() != self.memberships.len() {
            return Err(Error::ObservationCountMismatch {
                observations: observations.nsamples(),
                matrix: self.memberships.len(),
            });
        }

        Ok(observations.select(&self.medoid_indices))
    }
}

/// Sum over all non-medoids of the dissimilarity to their closest medoid
pub fn total_cost<F: Float>(dissimilarity: &DissimilarityMatrix<F>, medoids: &MedoidSet) -> F {
    let dissimilarity = dissimilarity.view();
    (0..dissimilarity.nrows())
        .filter(|&j| !medoids.is_medoid(j))
        .map(|j| nearest_two(&dissimilarity, j, medoids).0)
        .sum()
}

/// Position of the closest medoid for every observation, first position on ties. Medoids are
/// assigned to themselves.
pub fn assign_memberships<F: Float>(
    dissimilarity: &DissimilarityMatrix<F>,
    medoids: &MedoidSet,
) -> Array1<usize> {
    let dissimilarity = dissimilarity.view();
    Array1::from_shape_fn(dissimilarity.nrows(), |j| {
        if let Some(pos) = medoids.indices().iter().position(|&m| m == j) {
            return pos;
        }

        let mut closest = 0;
        for (pos, &m) in medoids.indices().iter().enumerate() {
            if dissimilarity[(m, j)] < dissimilarity[(medoids.indices()[closest], j)] {
                closest = pos;
            }
        }
        closest
    })
}

impl<F: Float> Fit<DissimilarityMatrix<F>, PamError> for PamValidParams {
    type Object = PamClustering<F>;

    /// Given a dissimilarity matrix over `n` observations, `fit` selects `n_clusters` medoids
    /// among them.
    ///
    /// Fails with `PamError::InvalidClusterCount` if `n_clusters > n`.
    fn fit(&self, dissimilarity: &DissimilarityMatrix<F>) -> Result<PamClustering<F>, PamError> {
        let mut medoids = build_phase(dissimilarity, self.n_clusters())?;
        log::debug!(
            "build phase: medoids {:?}, cost {}",
            medoids.indices(),
            total_cost(dissimilarity, &medoids)
        );

        let outcome = swap_phase(dissimilarity, &mut medoids, self.max_n_swaps());
        let cost = total_cost(dissimilarity, &medoids);
        log::info!(
            "pam: {} medoids {:?} after {} swaps, cost {}",
            medoids.len(),
            medoids.indices(),
            outcome.n_swaps,
            cost
        );

        Ok(PamClustering {
            memberships: assign_memberships(dissimilarity, &medoids),
            medoid_indices: medoids.into_indices(),
            cost,
            n_swaps: outcome.n_swaps,
            converged: outcome.converged,
        })
    }
}

impl PamValidParams {
    /// Runs build and swap phase on `dissimilarity` and returns the medoid observations from
    /// `observations` together with their indices.
    ///
    /// `dissimilarity` has to cover exactly the observations in `observations`, in the same
    /// order.
    pub fn cluster<F: Float>(
        &self,
        observations: &Observations<F>,
        dissimilarity: &DissimilarityMatrix<F>,
    ) -> Result<(Observations<F>, Vec<usize>), PamError> {
        if observations.nsamples() != dissimilarity.n() {
            return Err(Error::ObservationCountMismatch {
                observations: observations.nsamples(),
                matrix: dissimilarity.n(),
            }
            .into());
        }

        let clustering = <Self as Fit<_, PamError>>::fit(self, dissimilarity)?;
        let medoids = clustering.medoids(observations)?;

        Ok((medoids, clustering.medoid_indices))
    }
}

impl PamParams {
    /// Checks the hyperparameters, then behaves like [`PamValidParams::cluster`]
    pub fn cluster<F: Float>(
        &self,
        observations: &Observations<F>,
        dissimilarity: &DissimilarityMatrix<F>,
    ) -> Result<(Observations<F>, Vec<usize>), PamError> {
        self.check_ref()?.cluster(observations, dissimilarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    fn scenario() -> DissimilarityMatrix<f64> {
        DissimilarityMatrix::new(array![
            [0., 2., 6., 10.],
            [2., 0., 5., 9.],
            [6., 5., 0., 4.],
            [10., 9., 4., 0.]
        ])
        .unwrap()
    }

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<PamClustering<f64>>();
        has_autotraits::<MedoidSet>();
    }

    #[test]
    fn fits_scenario() {
        let clustering = Pam::params(2).fit(&scenario()).unwrap();

        assert_eq!(clustering.medoid_indices(), &[2, 1]);
        assert_eq!(clustering.n_swaps(), 0);
        assert!(clustering.converged());
        // 0 -> 1 at 2, 3 -> 2 at 4
        assert_abs_diff_eq!(clustering.cost(), 6.);
        assert_eq!(clustering.memberships(), &array![1, 1, 0, 0]);
    }

    #[test]
    fn cost_ignores_medoids() {
        let diss = scenario();
        let medoids = build_phase(&diss, 4).unwrap();
        assert_abs_diff_eq!(total_cost(&diss, &medoids), 0.);
    }

    #[test]
    fn membership_ties_go_to_first_position() {
        let diss =
            DissimilarityMatrix::new(array![[0., 1., 1.], [1., 0., 1.], [1., 1., 0.]]).unwrap();
        let mut medoids = MedoidSet::new(3);
        medoids.push(1);
        medoids.push(0);

        assert_eq!(assign_memberships(&diss, &medoids), array![1, 0, 0]);
    }

    #[test]
    fn too_many_clusters() {
        let res = Pam::params(5).fit(&scenario());
        assert!(matches!(
            res,
            Err(PamError::InvalidClusterCount {
                n_clusters: 5,
                n_observations: 4
            })
        ));
    }

    #[test]
    fn invalid_params_surface_through_fit() {
        let res = Pam::params(0).fit(&scenario());
        assert!(matches!(res, Err(PamError::InvalidParams(_))));
    }

    #[test]
    fn cluster_returns_medoid_observations() {
        let observations = Observations::new(array![[0.0], [2.0], [7.0], [11.0]]);
        let (medoids, indices) = Pam::params(2).cluster(&observations, &scenario()).unwrap();

        assert_eq!(indices, vec![2, 1]);
        assert_eq!(medoids.records(), array![[7.0], [2.0]]);
    }

    #[test]
    fn cluster_checks_observation_count() {
        let observations = Observations::new(Array2::<f64>::zeros((3, 2)));
        let res = Pam::params(2).cluster(&observations, &scenario());

        assert!(matches!(
            res,
            Err(PamError::Data(Error::ObservationCountMismatch {
                observations: 3,
                matrix: 4
            }))
        ));
    }
}
