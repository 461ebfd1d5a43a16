//! `rf-medoids` clusters observations the way random forest clustering does: the observed data
//! is doubled with synthetic noise, a forest trained to tell both apart yields a dissimilarity
//! between every pair of observations, and Partitioning Around Medoids (PAM) picks `k`
//! representative observations from those dissimilarities.
//!
//! ## The big picture
//!
//! The crate covers the two ends of that chain:
//! * [synthetic augmentation](SyntheticAugmenter), which derives per-feature extrema from the
//! observed data and appends an equal number of noise observations;
//! * the [PAM](Pam) k-medoids algorithm, with its greedy build phase and steepest-descent swap
//! phase, working on a precomputed [dissimilarity matrix](DissimilarityMatrix).
//!
//! Growing the forest and turning its proximities into dissimilarities happens elsewhere; the
//! [pipeline](pipeline::RfPipeline) accepts any [provider](pipeline::DissimilarityProvider) for
//! that step.
//!
//! A couple of [similarity measures](similarity) for raw feature vectors are included as well.

mod augment;
pub mod dataset;
pub mod dissimilarity;
pub mod error;
mod pam;
pub mod param_guard;
pub mod pipeline;
pub mod prelude;
pub mod similarity;
pub mod traits;

pub use augment::*;
pub use dataset::{FeatureValue, Float, Observations, OBSERVED_CLASS, SYNTHETIC_CLASS};
pub use dissimilarity::DissimilarityMatrix;
pub use pam::*;
