use ndarray::{Array1, Array2};
use ndarray_rand::rand::{Rng, SeedableRng};
use ndarray_rand::rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256Plus;
use rf_medoids::pipeline::RfPipeline;
use rf_medoids::prelude::*;
use rf_medoids::{Pam, SyntheticAugmenter, OBSERVED_CLASS};

// Stand-in for forest proximities: euclidean distance between feature vectors
fn euclidean(observations: &Observations<f64>) -> Result<DissimilarityMatrix<f64>> {
    let records = observations.records();
    let n = observations.nsamples();
    DissimilarityMatrix::new(Array2::from_shape_fn((n, n), |(i, j)| {
        let diff = &records.row(i) - &records.row(j);
        diff.dot(&diff).sqrt()
    }))
}

fn main() {
    env_logger::init();

    // three groups of 40 observations, twelve real features and a boolean one
    let centres = [[1.0, 4.0, 2.5], [6.0, 1.0, 3.0], [3.0, 7.0, 0.5]];
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let rows = centres
        .iter()
        .flat_map(|centre| std::iter::repeat(centre).take(40))
        .map(|centre| {
            let mut row: Vec<FeatureValue> = (0..12)
                .map(|f| {
                    let z: f64 = rng.sample(StandardNormal);
                    (centre[f % 3] + 0.3 * z).into()
                })
                .collect();
            row.push((centre[0] > 2.0).into());
            row
        })
        .collect();
    let observed = Observations::<f64>::from_values(rows).expect("rows have equal length");

    let pipeline = RfPipeline::new(SyntheticAugmenter::new(), euclidean, Pam::params(3));
    let output = pipeline.run(&observed).expect("clustering failed");

    println!(
        "{} observations, {} after augmentation, cost {:.3} after {} swaps",
        observed.nsamples(),
        output.augmented.nsamples(),
        output.clustering.cost(),
        output.clustering.n_swaps()
    );

    let memberships = output.clustering.memberships();
    for (pos, &idx) in output.clustering.medoid_indices().iter().enumerate() {
        let members: Array1<usize> = output
            .augmented
            .targets()
            .iter()
            .zip(memberships.iter())
            .filter(|(_, m)| **m == pos)
            .map(|(&class, _)| class)
            .collect();
        let observed_members = members.iter().filter(|&&c| c == OBSERVED_CLASS).count();

        println!(
            "medoid {:>3} (class {}): {:>3} members, {:>3} observed",
            idx,
            output.augmented.targets()[idx],
            members.len(),
            observed_members
        );
    }
}
