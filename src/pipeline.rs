//! End-to-end random forest clustering
//!
//! Augments the observed data with synthetic noise, asks an external provider for the
//! dissimilarities of the augmented set and selects medoids among them with PAM.
use rand::Rng;

use crate::augment::SyntheticAugmenter;
use crate::dataset::{Float, Observations};
use crate::dissimilarity::DissimilarityMatrix;
use crate::error::{Error, Result};
use crate::pam::{PamClustering, PamError, PamParams};
use crate::traits::{Fit, Transformer};

/// Source of the pairwise dissimilarities of an observation set, typically derived from the
/// proximities of a random forest trained to separate observed from synthetic data.
///
/// Implemented for every closure taking the observations and returning the matrix.
pub trait DissimilarityProvider<F> {
    fn dissimilarity(&self, observations: &Observations<F>) -> Result<DissimilarityMatrix<F>>;
}

impl<F, P> DissimilarityProvider<F> for P
where
    P: Fn(&Observations<F>) -> Result<DissimilarityMatrix<F>>,
{
    fn dissimilarity(&self, observations: &Observations<F>) -> Result<DissimilarityMatrix<F>> {
        self(observations)
    }
}

/// Everything one pipeline run produced
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOutput<F> {
    /// Observed data followed by the synthetic data
    pub augmented: Observations<F>,
    /// Medoids over the augmented data
    pub clustering: PamClustering<F>,
    /// The medoid observations, in medoid order
    pub medoids: Observations<F>,
}

pub struct RfPipeline<R, P> {
    augmenter: SyntheticAugmenter<R>,
    provider: P,
    params: PamParams,
}

impl<R: Rng + Clone, P> RfPipeline<R, P> {
    pub fn new(augmenter: SyntheticAugmenter<R>, provider: P, params: PamParams) -> Self {
        RfPipeline {
            augmenter,
            provider,
            params,
        }
    }

    /// Run augmentation, dissimilarity computation and PAM on `observed`
    ///
    /// Fails if augmentation fails, if the provider fails or returns a matrix whose size does not
    /// match the augmented set, or if clustering fails.
    pub fn run<F: Float>(
        &self,
        observed: &Observations<F>,
    ) -> std::result::Result<PipelineOutput<F>, PamError>
    where
        P: DissimilarityProvider<F>,
    {
        let augmented = self.augmenter.transform(observed)?;
        log::info!(
            "augmented {} observations to {}",
            observed.nsamples(),
            augmented.nsamples()
        );

        let dissimilarity = self.provider.dissimilarity(&augmented)?;
        if dissimilarity.n() != augmented.nsamples() {
            return Err(Error::ObservationCountMismatch {
                observations: augmented.nsamples(),
                matrix: dissimilarity.n(),
            }
            .into());
        }

        let clustering = Fit::<_, PamError>::fit(&self.params, &dissimilarity)?;
        let medoids = clustering.medoids(&augmented)?;

        Ok(PipelineOutput {
            augmented,
            clustering,
            medoids,
        })
    }
}
