//! Errors
//!
//! Custom error types used throughout the `cartree` crate.
use polars::prelude::PolarsError;
use thiserror::Error;


/// A `Result` whose error type is [`CartError`].
pub type Result<T> = std::result::Result<T, CartError>;


/// Errors that can occur while loading a sample,
/// growing a decision tree, or predicting with it.
#[derive(Debug, Error)]
pub enum CartError {
    /// A feature or label value is not an integer, a string, or a float.
    /// Labels additionally reject floats.
    #[error("Unsupported value type `{0}`, expected an integer, a string, or a float.")]
    UnsupportedValueType(String),
    /// The operation requires at least one label, row, or column.
    #[error("Cannot {0} on an empty input.")]
    EmptyInput(&'static str),
    /// The feature matrix and the label vector have different lengths.
    #[error("The feature matrix has {rows} rows, but {labels} labels were given.")]
    DimensionMismatch {
        /// Number of rows in the feature matrix.
        rows: usize,
        /// Number of labels.
        labels: usize,
    },
    /// A row has a different number of features than expected.
    #[error("Row {row} has {found} features, but {expected} features are expected.")]
    FeatureCountMismatch {
        /// Index of the offending row.
        row: usize,
        /// Number of features seen during `fit`.
        expected: usize,
        /// Number of features of the offending row.
        found: usize,
    },
    /// `predict` was called before a successful `fit`.
    #[error("The decision tree is not trained yet. Call `fit` first.")]
    UntrainedModel,
    /// A required parameter of a reader is not set.
    #[error("The parameter `{0}` is not set.")]
    MissingParameter(&'static str),
    /// Error raised by polars while reading or converting a data frame.
    #[error(transparent)]
    Polars(#[from] PolarsError),
    /// Error raised by serde_json while reading a JSON sample.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
