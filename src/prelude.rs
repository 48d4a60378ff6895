//! Exports the decision tree, the sample types, and the traits.
//! 
pub use crate::decision_tree::{
    // Estimator
    DecisionTree,
    DecisionTreeBuilder,


    // Trained tree -----------------------------
    DecisionTreeClassifier,
    Node,
    SplitNode,
    LeafNode,
    Question,
};


pub use crate::sample::{
    Sample,
    SampleReader,
    Value,
    Label,
};


pub use crate::hypothesis::Classifier;


pub use crate::errors::CartError;
