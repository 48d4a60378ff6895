//! The CART decision tree grown by the Gini impurity.

/// Defines the decision tree algorithm.
pub mod decision_tree_algorithm;
/// Defines the classifier produced by `DecisionTree`.
pub mod decision_tree_classifier;
/// Defines the builder of `DecisionTree`.
pub mod builder;

/// Defines the inner representations of `DecisionTreeClassifier`.
pub mod node;
/// Defines the questions asked at split nodes.
pub mod question;
/// Defines the Gini impurity and the information gain.
pub mod criterion;
/// Defines the partitioning of training examples.
pub mod partition;
/// Defines the search of the best question.
pub mod split_search;


pub use decision_tree_algorithm::DecisionTree;
pub use decision_tree_classifier::DecisionTreeClassifier;
pub use builder::DecisionTreeBuilder;
pub use node::{Node, SplitNode, LeafNode};
pub use question::Question;
pub use criterion::{gini_impurity, weighted_impurity, information_gain};
pub use partition::{partition, examples, Example};
pub use split_search::{
    BestSplit,
    find_best_split,
    generate_candidate_questions,
    unique_candidate_questions,
};
