use ndarray::ArrayView2;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::dataset::Float;
use crate::dissimilarity::DissimilarityMatrix;
use crate::pam::medoids::nearest_two;
use crate::pam::MedoidSet;

/// How the swap phase ended
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Number of swaps applied
    pub n_swaps: usize,
    /// `false` if the swap limit was hit while an improving swap was still available
    pub converged: bool,
}

/// PAM swap phase: steepest-descent refinement of `medoids`, in place.
///
/// Every round evaluates each pair of a medoid position `i` (observation `m_i`) and a
/// non-medoid `h`:
///
/// ```text
/// T(i, h) = sum over non-medoids j != h of K(i, h, j)
///
/// K(i, h, j) = min(0, d(j, h) - D_j)          if d(j, m_i) > D_j
///            = min(d(j, h), E_j) - D_j         otherwise
/// ```
///
/// with `D_j` and `E_j` the dissimilarities of `j` to its nearest and second nearest medoid.
/// The pair with the smallest `T` is swapped if that value is strictly negative; pairs are
/// scanned by medoid position, then by candidate index, and the first minimum wins. The phase
/// ends once no pair has a negative `T`, or after `max_n_swaps` swaps.
pub fn swap_phase<F: Float>(
    dissimilarity: &DissimilarityMatrix<F>,
    medoids: &mut MedoidSet,
    max_n_swaps: usize,
) -> SwapOutcome {
    let dissimilarity = dissimilarity.view();
    let n_observations = dissimilarity.nrows();
    let mut n_swaps = 0;

    loop {
        let nearest: Vec<(F, F)> = (0..n_observations)
            .map(|j| nearest_two(&dissimilarity, j, medoids))
            .collect();

        let mut min_effect = F::zero();
        let mut best: Option<(usize, usize)> = None;

        for (pos, &removed) in medoids.indices().iter().enumerate() {
            for h in (0..n_observations).filter(|&h| !medoids.is_medoid(h)) {
                let effect: F = (0..n_observations)
                    .filter(|&j| j != h && !medoids.is_medoid(j))
                    .map(|j| swap_contribution(&dissimilarity, removed, h, j, nearest[j]))
                    .sum();

                if effect < min_effect {
                    min_effect = effect;
                    best = Some((pos, h));
                }
            }
        }

        match best {
            None => {
                return SwapOutcome {
                    n_swaps,
                    converged: true,
                }
            }
            Some(_) if n_swaps >= max_n_swaps => {
                log::warn!(
                    "swap: stopped after {} swaps with an improving swap left",
                    n_swaps
                );
                return SwapOutcome {
                    n_swaps,
                    converged: false,
                };
            }
            Some((pos, h)) => {
                log::debug!(
                    "swap: medoid {} -> {} (effect {})",
                    medoids.indices()[pos],
                    h,
                    min_effect
                );
                medoids.replace(pos, h);
                n_swaps += 1;
            }
        }
    }
}

/// Change in `j`'s dissimilarity to its nearest medoid when `removed` is swapped for `h`
fn swap_contribution<F: Float>(
    dissimilarity: &ArrayView2<F>,
    removed: usize,
    h: usize,
    j: usize,
    (nearest, second): (F, F),
) -> F {
    let to_candidate = dissimilarity[(j, h)];

    if dissimilarity[(j, removed)] > nearest {
        (to_candidate - nearest).min(F::zero())
    } else {
        to_candidate.min(second) - nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pam::build_phase;
    use ndarray::{array, Array2};

    /// Points on a line: 0 1 2 | 10 11 12 | 20 21 22
    fn three_groups() -> DissimilarityMatrix<f64> {
        let points: [f64; 9] = [0., 1., 2., 10., 11., 12., 20., 21., 22.];
        DissimilarityMatrix::new(Array2::from_shape_fn((9, 9), |(i, j)| {
            (points[i] - points[j]).abs()
        }))
        .unwrap()
    }

    #[test]
    fn improves_build_result() {
        let diss = three_groups();
        let mut medoids = build_phase(&diss, 3).unwrap();
        // 11, then 1 and 20 win their gain ties against 2 and 21
        assert_eq!(medoids.indices(), &[4, 1, 6]);

        let outcome = swap_phase(&diss, &mut medoids, 100);
        assert_eq!(
            outcome,
            SwapOutcome {
                n_swaps: 1,
                converged: true
            }
        );
        assert_eq!(medoids.indices(), &[4, 1, 7]);
        assert_eq!(
            medoids.used(),
            &[false, true, false, false, true, false, false, true, false]
        );
    }

    #[test]
    fn refined_set_is_a_fixed_point() {
        let diss = three_groups();
        let mut medoids = build_phase(&diss, 3).unwrap();
        swap_phase(&diss, &mut medoids, 100);
        let refined = medoids.clone();

        let outcome = swap_phase(&diss, &mut medoids, 100);
        assert_eq!(outcome.n_swaps, 0);
        assert!(outcome.converged);
        assert_eq!(medoids, refined);
    }

    #[test]
    fn swap_limit_stops_refinement() {
        let diss = three_groups();
        let mut medoids = build_phase(&diss, 3).unwrap();

        let outcome = swap_phase(&diss, &mut medoids, 0);
        assert_eq!(
            outcome,
            SwapOutcome {
                n_swaps: 0,
                converged: false
            }
        );
        assert_eq!(medoids.indices(), &[4, 1, 6]);
    }

    #[test]
    fn no_candidates_no_swaps() {
        let diss =
            DissimilarityMatrix::new(array![[0., 1., 3.], [1., 0., 2.], [3., 2., 0.]]).unwrap();
        let mut medoids = build_phase(&diss, 3).unwrap();
        let before = medoids.clone();

        let outcome = swap_phase(&diss, &mut medoids, 10);
        assert_eq!(outcome.n_swaps, 0);
        assert!(outcome.converged);
        assert_eq!(medoids, before);
    }

    #[test]
    fn single_medoid_terminates() {
        let diss = DissimilarityMatrix::new(array![
            [0., 2., 6., 10.],
            [2., 0., 5., 9.],
            [6., 5., 0., 4.],
            [10., 9., 4., 0.]
        ])
        .unwrap();
        let mut medoids = build_phase(&diss, 1).unwrap();

        let outcome = swap_phase(&diss, &mut medoids, 10);
        assert_eq!(outcome.n_swaps, 0);
        assert_eq!(medoids.indices(), &[2]);
    }

    #[test]
    fn contribution_cases() {
        let diss = array![[0., 1., 4.], [1., 0., 2.], [4., 2., 0.]];
        // j = 0 is served by 1 (D = 1, E = 4); removing 2 leaves it unaffected unless 0 gets
        // closer to the candidate
        assert_eq!(swap_contribution(&diss.view(), 2, 0, 0, (1., 4.)), -1.);
        // removing its own nearest medoid sends it to the closer of candidate and second medoid
        assert_eq!(swap_contribution(&diss.view(), 1, 2, 0, (1., 4.)), 3.);
    }
}
