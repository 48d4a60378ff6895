//! Exhaustive search of the best question on a node.
use crate::errors::{CartError, Result};
use crate::sample::{Value, Label};
use super::criterion::{gini_impurity, information_gain};
use super::partition::{partition, Example};
use super::question::Question;

use std::collections::HashSet;


/// The best question found on a node,
/// together with the split it induces.
#[derive(Debug, Clone)]
pub struct BestSplit<'a> {
    /// The question that maximizes the information gain.
    pub question: Question,
    /// Examples answering "yes".
    pub yes: Vec<Example<'a>>,
    /// Examples answering "no".
    pub no: Vec<Example<'a>>,
    /// Information gain of the split.
    pub gain: f64,
}


/// Hashable identity of a question.
/// Thresholds are compared bitwise.
#[derive(PartialEq, Eq, Hash)]
enum QuestionKey {
    Continuous(usize, u64),
    Discrete(usize, Label),
}


impl From<&Question> for QuestionKey {
    #[inline]
    fn from(question: &Question) -> Self {
        match question {
            Question::Continuous { column, threshold } => {
                Self::Continuous(*column, threshold.to_bits())
            },
            Question::Discrete { column, value } => {
                Self::Discrete(*column, value.clone())
            },
        }
    }
}


/// Returns one question per cell of `rows`,
/// in row-major order.
/// A value that appears in several rows yields several
/// identical questions.
pub fn generate_candidate_questions<R>(rows: &[R]) -> Vec<Question>
    where R: AsRef<[Value]>,
{
    rows.iter()
        .flat_map(|row| {
            row.as_ref()
                .iter()
                .enumerate()
                .map(|(column, value)| Question::new(column, value))
        })
        .collect()
}


/// Same as [`generate_candidate_questions`],
/// but only the first occurrence of each question is kept.
pub fn unique_candidate_questions<R>(rows: &[R]) -> Vec<Question>
    where R: AsRef<[Value]>,
{
    let mut seen = HashSet::new();
    generate_candidate_questions(rows)
        .into_iter()
        .filter(|question| seen.insert(QuestionKey::from(question)))
        .collect()
}


/// Returns the question with the largest information gain.
/// On ties, the question generated first wins.
///
/// If `dedup` is `true`, duplicated candidates are evaluated once.
/// This does not change the result.
///
/// Fails with `EmptyInput` if `examples` is empty
/// or the rows have no feature.
pub fn find_best_split<'a>(examples: &[Example<'a>], dedup: bool)
    -> Result<BestSplit<'a>>
{
    let parent = gini_impurity(examples.iter().map(|(_, y)| *y))?;

    let rows = examples.iter()
        .map(|(row, _)| *row)
        .collect::<Vec<_>>();
    let questions = if dedup {
        unique_candidate_questions(&rows)
    } else {
        generate_candidate_questions(&rows)
    };


    let mut best: Option<BestSplit<'a>> = None;
    for question in questions {
        let (yes, no) = partition(&question, examples);
        let gain = information_gain(parent, &yes, &no)?;

        if best.as_ref().map_or(true, |b| b.gain < gain) {
            best = Some(BestSplit { question, yes, no, gain });
        }
    }

    best.ok_or(CartError::EmptyInput("search a split without features"))
}
