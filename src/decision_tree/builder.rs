use super::decision_tree_algorithm::DecisionTree;


/// Candidates are not deduplicated by default.
pub const DEFAULT_DEDUP_CANDIDATES: bool = false;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
/// 
/// # Example
/// 
/// ```no_run
/// use cartree::prelude::*;
/// 
/// let tree = DecisionTreeBuilder::new()
///     .dedup_candidates(true)
///     .build();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionTreeBuilder {
    dedup_candidates: bool,
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self { dedup_candidates: DEFAULT_DEDUP_CANDIDATES, }
    }
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// dedup_candidates: DEFAULT_DEDUP_CANDIDATES == false,
    /// ```
    pub fn new() -> Self {
        Self::default()
    }


    /// Evaluate each distinct candidate question only once.
    /// The grown tree is the same either way,
    /// this only saves time on data with repeated values.
    #[inline]
    pub fn dedup_candidates(mut self, flag: bool) -> Self {
        self.dedup_candidates = flag;
        self
    }


    /// Build an untrained `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(self.dedup_candidates)
    }
}
