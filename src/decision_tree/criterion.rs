//! Defines the impurity measure used to grow a decision tree.
use crate::errors::{CartError, Result};
use crate::sample::Label;
use super::partition::Example;

use std::collections::BTreeMap;


/// Returns the Gini impurity of the given labels.
///
/// The impurity is `1 - sum_v (count(v) / n)^k`,
/// where `n` is the number of labels and
/// `k` is the number of **distinct** labels.
/// For two classes this is the textbook Gini index.
/// The value lies in `[0, 1)` and is `0` iff all labels are equal.
///
/// Distinct labels are visited in ascending order,
/// so the result does not depend on the order of `labels`.
/// Fails with `EmptyInput` if `labels` is empty.
pub fn gini_impurity<'a, I>(labels: I) -> Result<f64>
    where I: IntoIterator<Item = &'a Label>
{
    let mut counter: BTreeMap<&Label, usize> = BTreeMap::new();
    let mut total = 0_usize;
    for label in labels {
        *counter.entry(label).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return Err(CartError::EmptyInput("compute the Gini impurity"));
    }


    let n_class = i32::try_from(counter.len())
        .unwrap_or(i32::MAX);
    let total = total as f64;
    let purity = counter.values()
        .map(|&count| (count as f64 / total).powi(n_class))
        .sum::<f64>();

    Ok(1.0 - purity)
}


/// Returns the weighted impurity of the children `yes` and `no`,
/// `|yes|/n * gini(yes) + |no|/n * gini(no)`.
/// An empty child has zero weight and contributes nothing.
pub fn weighted_impurity(yes: &[Example<'_>], no: &[Example<'_>])
    -> Result<f64>
{
    let total = yes.len() + no.len();
    if total == 0 {
        return Err(CartError::EmptyInput("compute the weighted impurity"));
    }

    let total = total as f64;
    [yes, no].into_iter()
        .filter(|child| !child.is_empty())
        .map(|child| {
            let weight = child.len() as f64 / total;
            let impurity = gini_impurity(child.iter().map(|(_, y)| *y))?;
            Ok(weight * impurity)
        })
        .sum()
}


/// Returns the information gain of splitting a node
/// of impurity `parent` into `yes` and `no`.
#[inline]
pub fn information_gain(
    parent: f64,
    yes: &[Example<'_>],
    no: &[Example<'_>],
) -> Result<f64>
{
    let child = weighted_impurity(yes, no)?;
    Ok(parent - child)
}
