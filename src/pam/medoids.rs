use ndarray::ArrayView2;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::dataset::Float;
use crate::dissimilarity::DISTANCE_SENTINEL;

/// The medoids selected so far.
///
/// Medoid indices are kept in selection order next to a mask over all observations;
/// `is_medoid(idx)` holds exactly when `idx` appears in `indices()`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct MedoidSet {
    indices: Vec<usize>,
    used: Vec<bool>,
}

impl MedoidSet {
    /// An empty medoid set over `n` observations
    pub fn new(n: usize) -> Self {
        MedoidSet {
            indices: Vec::new(),
            used: vec![false; n],
        }
    }

    /// Observation indices of the medoids, in selection order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Mask over all observations marking the medoids
    pub fn used(&self) -> &[bool] {
        &self.used
    }

    pub fn is_medoid(&self, idx: usize) -> bool {
        self.used[idx]
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of observations the set ranges over
    pub fn n_observations(&self) -> usize {
        self.used.len()
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub(crate) fn push(&mut self, idx: usize) {
        debug_assert!(!self.used[idx]);
        self.used[idx] = true;
        self.indices.push(idx);
    }

    /// Put observation `idx` in place of the medoid at position `pos`
    pub(crate) fn replace(&mut self, pos: usize, idx: usize) {
        debug_assert!(!self.used[idx]);
        self.used[self.indices[pos]] = false;
        self.used[idx] = true;
        self.indices[pos] = idx;
    }
}

/// Dissimilarity from observation `j` to its nearest and second nearest medoid.
///
/// Both start at `DISTANCE_SENTINEL`, so with a single medoid the second distance stays at the
/// sentinel, and with no medoid both do.
pub(crate) fn nearest_two<F: Float>(
    dissimilarity: &ArrayView2<F>,
    j: usize,
    medoids: &MedoidSet,
) -> (F, F) {
    let mut nearest = F::cast(DISTANCE_SENTINEL);
    let mut second = F::cast(DISTANCE_SENTINEL);

    for &m in medoids.indices() {
        let d = dissimilarity[(m, j)];
        if d < nearest {
            second = nearest;
            nearest = d;
        } else if d < second {
            second = d;
        }
    }

    (nearest, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn mask_follows_indices() {
        let mut medoids = MedoidSet::new(4);
        medoids.push(2);
        medoids.push(0);
        assert_eq!(medoids.indices(), &[2, 0]);
        assert_eq!(medoids.used(), &[true, false, true, false]);

        medoids.replace(0, 3);
        assert_eq!(medoids.indices(), &[3, 0]);
        assert_eq!(medoids.used(), &[true, false, false, true]);
        assert!(medoids.is_medoid(3));
        assert!(!medoids.is_medoid(2));
    }

    #[test]
    fn nearest_and_second_nearest() {
        let diss = array![
            [0., 2., 6., 10.],
            [2., 0., 5., 9.],
            [6., 5., 0., 4.],
            [10., 9., 4., 0.]
        ];
        let mut medoids = MedoidSet::new(4);
        medoids.push(2);
        medoids.push(1);

        assert_eq!(nearest_two(&diss.view(), 0, &medoids), (2., 6.));
        assert_eq!(nearest_two(&diss.view(), 3, &medoids), (4., 9.));
    }

    #[test]
    fn single_medoid_keeps_sentinel() {
        let diss = array![[0., 3.], [3., 0.]];
        let mut medoids = MedoidSet::new(2);
        medoids.push(0);

        assert_eq!(nearest_two(&diss.view(), 1, &medoids), (3., 1e8));
    }
}
