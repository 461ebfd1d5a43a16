use super::{Float, Observations};
use crate::error::Result;
use ndarray::{concatenate, Axis};

impl<F: Float> Observations<F> {
    /// Copy the observations at `indices`, in the order given
    pub fn select(&self, indices: &[usize]) -> Observations<F> {
        Observations {
            records: self.records.select(Axis(0), indices),
            targets: self.targets.select(Axis(0), indices),
        }
    }

    /// Append `other` after the observations of `self`
    pub fn append(&self, other: &Observations<F>) -> Result<Observations<F>> {
        let records = concatenate(Axis(0), &[self.records.view(), other.records.view()])?;
        let targets = concatenate(Axis(0), &[self.targets.view(), other.targets.view()])?;

        Ok(Observations { records, targets })
    }

    /// Overwrite every class label with `class`
    pub fn with_class(mut self, class: usize) -> Observations<F> {
        self.targets.fill(class);
        self
    }
}
