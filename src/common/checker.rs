//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::errors::{CartError, Result};
use crate::sample::Value;


/// Check whether the pair of a feature matrix and a label vector
/// is a valid training sample or not.
/// Returns the number of features on success.
#[inline]
pub(crate) fn check_sample<R, L>(rows: &[R], labels: &[L]) -> Result<usize>
    where R: AsRef<[Value]>,
{
    let n_sample = rows.len();
    let n_label = labels.len();

    // `rows` and `labels` must have the same length.
    if n_sample != n_label {
        return Err(CartError::DimensionMismatch {
            rows: n_sample,
            labels: n_label,
        });
    }


    // Since the previous check guarantees `n_sample == n_label`,
    // we only need to check `n_sample`.
    let n_feature = match rows.first() {
        Some(row) => row.as_ref().len(),
        None => { return Err(CartError::EmptyInput("fit a tree")); },
    };


    check_rows(rows, n_feature)?;
    Ok(n_feature)
}


/// Check whether every row has exactly `n_feature` features.
#[inline]
pub(crate) fn check_rows<R>(rows: &[R], n_feature: usize) -> Result<()>
    where R: AsRef<[Value]>,
{
    rows.iter()
        .enumerate()
        .try_for_each(|(i, row)| check_row(i, row.as_ref(), n_feature))
}


/// Check whether the `i`-th row has exactly `n_feature` features.
#[inline(always)]
pub(crate) fn check_row(i: usize, row: &[Value], n_feature: usize)
    -> Result<()>
{
    let found = row.len();
    if found != n_feature {
        return Err(CartError::FeatureCountMismatch {
            row: i,
            expected: n_feature,
            found,
        });
    }
    Ok(())
}
