use rayon::prelude::*;

use crate::errors::{CartError, Result};
use crate::sample::{Value, Label};


/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of a single feature row.
    fn predict(&self, row: &[Value]) -> Result<Label>;


    /// Predicts the labels of `rows`.
    /// The `i`-th label corresponds to the `i`-th row.
    /// If some rows fail, the error of the first failing row is returned.
    fn predict_all<R>(&self, rows: &[R]) -> Result<Vec<Label>>
        where R: AsRef<[Value]> + Sync,
              Self: Sync,
    {
        let predictions = rows.par_iter()
            .map(|row| self.predict(row.as_ref()))
            .collect::<Vec<_>>();

        predictions.into_iter()
            .enumerate()
            .map(|(i, prediction)| prediction.map_err(|e| at_row(e, i)))
            .collect()
    }
}


/// Attach the row index to a feature count error.
#[inline]
fn at_row(error: CartError, row: usize) -> CartError {
    match error {
        CartError::FeatureCountMismatch { expected, found, .. } => {
            CartError::FeatureCountMismatch { row, expected, found }
        },
        error => error,
    }
}
