use log::{debug, info, warn};


use crate::{Classifier, Sample};
use crate::common::checker;
use crate::errors::{CartError, Result};
use crate::sample::{Value, Label};


use super::{
    builder::DecisionTreeBuilder,
    node::*,
    partition::{self, Example},
    split_search::{find_best_split, BestSplit},
    decision_tree_classifier::DecisionTreeClassifier,
};


use std::fmt;


/// The CART decision tree algorithm.
/// Given a feature matrix and a label vector,
/// [`DecisionTree`] grows a binary tree by Gini impurity
/// until every leaf is pure,
/// and keeps the result as a [`DecisionTreeClassifier`].
///
/// The code is based on the book:
/// [Classification and Regression
/// Trees](https://www.amazon.com/Classification-Regression-Wadsworth-Statistics-Probability/dp/0412048418)
/// by Leo Breiman, Jerome H. Friedman, Richard A. Olshen, and Charles J. Stone.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use cartree::prelude::*;
///
/// // Read the training data from the CSV file.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::default()
///     .file(file)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let mut tree = DecisionTreeBuilder::new().build();
/// tree.fit(sample.rows(), sample.target()).unwrap();
///
/// let predictions = tree.predict_all(sample.rows()).unwrap();
///
/// let loss = sample.target()
///     .iter()
///     .zip(predictions)
///     .map(|(ty, py)| if *ty == py { 0f64 } else { 1f64 })
///     .sum::<f64>()
///     / sample.shape().0 as f64;
/// println!("loss (train) is: {loss}");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    dedup_candidates: bool,
    tree: Option<DecisionTreeClassifier>,
}


impl Default for DecisionTree {
    fn default() -> Self {
        DecisionTreeBuilder::default().build()
    }
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(dedup_candidates: bool) -> Self {
        Self { dedup_candidates, tree: None, }
    }


    /// Returns `true` if `fit` has succeeded at least once.
    #[inline]
    pub fn is_trained(&self) -> bool {
        self.tree.is_some()
    }


    /// Returns the trained classifier, if any.
    #[inline]
    pub fn classifier(&self) -> Option<&DecisionTreeClassifier> {
        self.tree.as_ref()
    }


    /// Returns the root of the trained tree, if any.
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.tree.as_ref().map(|tree| tree.root())
    }


    /// Grow a tree on `rows` and `labels`,
    /// replacing the tree grown by a previous call.
    ///
    /// Fails with
    /// - `DimensionMismatch` if `rows` and `labels` differ in length,
    /// - `EmptyInput` if they are empty or the rows have no feature,
    /// - `FeatureCountMismatch` if the rows differ in length.
    ///
    /// On failure, the previous tree (if any) is kept.
    pub fn fit<R>(&mut self, rows: &[R], labels: &[Label]) -> Result<()>
        where R: AsRef<[Value]>,
    {
        let n_features = checker::check_sample(rows, labels)?;
        let examples = partition::examples(rows, labels)?;

        let root = self.full_tree(&examples)?;
        info!(
            "Grew a decision tree on {} examples with {} features \
             ({} leaves, depth {}).",
            examples.len(),
            n_features,
            root.leaves(),
            root.depth(),
        );

        let tree = DecisionTreeClassifier::from_components(root, n_features);
        self.tree = Some(tree);
        Ok(())
    }


    /// Grow a tree on the feature matrix and the target of `sample`.
    #[inline]
    pub fn fit_sample(&mut self, sample: &Sample) -> Result<()> {
        self.fit(sample.rows(), sample.target())
    }


    /// Construct a tree whose leaves are pure.
    fn full_tree(&self, examples: &[Example<'_>]) -> Result<Node> {
        let BestSplit { question, yes, no, gain } = find_best_split(
            examples, self.dedup_candidates
        )?;


        // No question reduces the impurity, construct a leaf node.
        if gain == 0.0 {
            let (_, label) = examples.first()
                .ok_or(CartError::EmptyInput("grow a tree"))?;

            if examples.iter().any(|(_, y)| y != label) {
                warn!(
                    "No question separates {} examples with conflicting \
                     labels. Predicting `{label}` for all of them.",
                    examples.len(),
                );
            }
            debug!("Leaf `{label}` on {} examples.", examples.len());

            return Ok(Node::leaf((*label).clone()));
        }


        debug!(
            "Split by `{question}` (gain = {gain:.6}, yes = {}, no = {}).",
            yes.len(),
            no.len(),
        );
        let no = self.full_tree(&no)?;
        let yes = self.full_tree(&yes)?;


        Ok(Node::split(question, yes, no))
    }
}


impl Classifier for DecisionTree {
    /// Fails with `UntrainedModel` before a successful `fit`.
    fn predict(&self, row: &[Value]) -> Result<Label> {
        self.tree.as_ref()
            .ok_or(CartError::UntrainedModel)?
            .predict(row)
    }


    fn predict_all<R>(&self, rows: &[R]) -> Result<Vec<Label>>
        where R: AsRef<[Value]> + Sync,
              Self: Sync,
    {
        self.tree.as_ref()
            .ok_or(CartError::UntrainedModel)?
            .predict_all(rows)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # CART Decision Tree\n\n\
            - Splitting criterion: Gini index\n\
            - Deduplicate candidates: {}\
            ",
            self.dedup_candidates,
        )?;

        match self.tree {
            Some(ref tree) => {
                let root = tree.root();
                writeln!(
                    f,
                    "- Trained: {} features, {} leaves, depth {}",
                    tree.n_features(),
                    root.leaves(),
                    root.depth(),
                )?;
            },
            None => { writeln!(f, "- Trained: no")?; },
        }

        write!(f, "----------")
    }
}
