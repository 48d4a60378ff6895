#![warn(missing_docs)]

//! 
//! A crate that provides the CART decision tree classifier.
//! 
//! Given a feature matrix and a label vector,
//! [`DecisionTree`] grows a binary tree
//! by choosing, on each node, the question
//! that maximizes the reduction of the Gini impurity.
//! The tree grows until every leaf is pure.
//! 
//! - Questions
//!     A feature value is an integer, a string token, or a float.
//!     Integers and tokens give discrete questions `x[j] == v`,
//!     floats give continuous questions `x[j] < v`.
//!     Every value observed in the training rows is a candidate.
//! 
//! 
//! - Samples
//!     The feature matrix is a slice of rows of [`Value`]s.
//!     [`Sample`] reads one from a CSV file, a `polars::DataFrame`,
//!     or a JSON document.
//! 
//! # Example
//! ```
//! use cartree::prelude::*;
//! 
//! let rows = vec![
//!     vec![Value::from(1), Value::from(1)],
//!     vec![Value::from(0), Value::from(1)],
//!     vec![Value::from(0), Value::from(0)],
//!     vec![Value::from(1), Value::from(0)],
//! ];
//! let labels = vec![Label::from(1), Label::from(0), Label::from(0), Label::from(0)];
//! 
//! let mut tree = DecisionTreeBuilder::new().build();
//! tree.fit(&rows, &labels).unwrap();
//! assert_eq!(tree.predict_all(&rows).unwrap(), labels);
//! ```

pub mod errors;
pub(crate) mod common;
pub mod sample;
pub mod hypothesis;
pub mod decision_tree;
pub mod prelude;


pub use errors::{CartError, Result};

pub use sample::{Sample, SampleReader, Value, Label};

pub use hypothesis::Classifier;

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    Question,
};
