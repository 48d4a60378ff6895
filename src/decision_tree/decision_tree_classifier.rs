//! Defines the decision tree classifier.
use crate::Classifier;
use crate::common::checker;
use crate::errors::Result;
use crate::sample::{Value, Label};


use super::node::*;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Decision tree classifier.
/// This struct is a trained, immutable tree
/// together with the number of features it was trained on.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeClassifier {
    root: Node,
    n_features: usize,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn from_components(root: Node, n_features: usize) -> Self {
        Self { root, n_features }
    }


    /// Returns the root node of the tree.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of features seen during training.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_features
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;


        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl Classifier for DecisionTreeClassifier {
    /// Fails with `FeatureCountMismatch` if `row` does not have
    /// as many features as the training rows.
    fn predict(&self, row: &[Value]) -> Result<Label> {
        checker::check_row(0, row, self.n_features)?;
        Ok(self.root.predict(row).clone())
    }
}
