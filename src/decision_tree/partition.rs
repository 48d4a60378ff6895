//! Splits a set of training examples by a question.
use crate::errors::{CartError, Result};
use crate::sample::{Value, Label};
use super::question::Question;


/// A training example, a feature row paired with its label.
/// Both parts are borrowed from the caller's sample.
pub type Example<'a> = (&'a [Value], &'a Label);


/// Pair each row of `rows` with the label at the same position.
/// Fails with `DimensionMismatch` if the lengths differ.
pub fn examples<'a, R>(rows: &'a [R], labels: &'a [Label])
    -> Result<Vec<Example<'a>>>
    where R: AsRef<[Value]>,
{
    if rows.len() != labels.len() {
        return Err(CartError::DimensionMismatch {
            rows: rows.len(),
            labels: labels.len(),
        });
    }

    let examples = rows.iter()
        .map(|row| row.as_ref())
        .zip(labels)
        .collect();
    Ok(examples)
}


/// Split `examples` into the examples answering `question` with "yes"
/// and the ones answering "no".
/// Both groups keep the input order.
pub fn partition<'a>(question: &Question, examples: &[Example<'a>])
    -> (Vec<Example<'a>>, Vec<Example<'a>>)
{
    examples.iter()
        .copied()
        .partition(|(row, _)| question.check_row(row))
}
