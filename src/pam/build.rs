use ndarray::{Array1, ArrayView2, Axis};

use crate::dataset::Float;
use crate::dissimilarity::DissimilarityMatrix;
use crate::pam::medoids::nearest_two;
use crate::pam::{MedoidSet, PamError};

/// PAM build phase: greedily selects `n_clusters` initial medoids.
///
/// The first medoid is the observation with the smallest sum of dissimilarities to all others.
/// Each further medoid is the non-medoid `i` with the largest gain
///
/// ```text
/// g(i) = sum over non-medoids j != i of max(0, D_j - d(i, j))
/// ```
///
/// where `D_j` is the dissimilarity of `j` to its nearest medoid so far. Ties go to the lowest
/// index in both steps.
///
/// Fails with `PamError::InvalidClusterCount` unless `1 <= n_clusters <= n`.
pub fn build_phase<F: Float>(
    dissimilarity: &DissimilarityMatrix<F>,
    n_clusters: usize,
) -> Result<MedoidSet, PamError> {
    let dissimilarity = dissimilarity.view();
    let n_observations = dissimilarity.nrows();
    if n_clusters == 0 || n_clusters > n_observations {
        return Err(PamError::InvalidClusterCount {
            n_clusters,
            n_observations,
        });
    }

    let mut medoids = MedoidSet::new(n_observations);
    medoids.push(first_medoid(&dissimilarity));

    let mut gains = Array1::zeros(n_observations);
    for _ in 1..n_clusters {
        let nearest: Vec<F> = (0..n_observations)
            .map(|j| nearest_two(&dissimilarity, j, &medoids).0)
            .collect();

        gains.fill(F::zero());
        for i in (0..n_observations).filter(|&i| !medoids.is_medoid(i)) {
            gains[i] = (0..n_observations)
                .filter(|&j| j != i && !medoids.is_medoid(j))
                .map(|j| contribution(nearest[j], dissimilarity[(i, j)]))
                .sum();
        }

        let mut best: Option<usize> = None;
        for i in (0..n_observations).filter(|&i| !medoids.is_medoid(i)) {
            if best.map_or(true, |b| gains[i] > gains[b]) {
                best = Some(i);
            }
        }

        match best {
            Some(i) => {
                log::debug!("build: medoid {} selected with gain {}", i, gains[i]);
                medoids.push(i);
            }
            None => break,
        }
    }

    Ok(medoids)
}

/// Observation with the smallest row sum, first occurrence on ties
fn first_medoid<F: Float>(dissimilarity: &ArrayView2<F>) -> usize {
    let sum_diss = dissimilarity.sum_axis(Axis(1));

    let mut min_idx = 0;
    for (i, &s) in sum_diss.iter().enumerate() {
        if s < sum_diss[min_idx] {
            min_idx = i;
        }
    }
    log::debug!("build: first medoid {} with total dissimilarity {}", min_idx, sum_diss[min_idx]);

    min_idx
}

/// How much closer `j` gets to the medoid set if candidate `i` joins it
fn contribution<F: Float>(nearest: F, candidate: F) -> F {
    if nearest > candidate {
        nearest - candidate
    } else {
        F::zero()
    }
}
