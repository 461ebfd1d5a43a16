mod algorithm;
mod build;
mod errors;
mod hyperparams;
mod medoids;
mod swap;

pub use algorithm::*;
pub use build::build_phase;
pub use errors::*;
pub use hyperparams::*;
pub use medoids::MedoidSet;
pub use swap::{swap_phase, SwapOutcome};
