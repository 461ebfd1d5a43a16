//! Synthetic augmentation
//!
//! Random forest clustering trains a forest to tell the observed data apart from generated
//! noise; the proximities of that forest then serve as dissimilarities. This module produces the
//! noise half of that training set.
mod algorithm;

pub use algorithm::*;
