//! This file defines split rules for decision tree.
use serde_json::Value as JsonValue;

use crate::errors::Result;
use crate::sample::{Value, Label};

use std::fmt;


/// A binary predicate over a single feature column.
/// A continuous question asks `value < threshold`,
/// a discrete question asks `value == category`.
#[derive(Debug, Clone, PartialEq)]
pub enum Question {
    /// `x[column] < threshold`.
    Continuous {
        /// Column index of the feature.
        column: usize,
        /// Threshold of the comparison.
        threshold: f64,
    },
    /// `x[column] == value`.
    Discrete {
        /// Column index of the feature.
        column: usize,
        /// The exact value to match.
        value: Label,
    },
}


impl Question {
    /// Construct the question for the cell `value` at `column`.
    /// Integers and tokens produce a discrete question,
    /// floats produce a continuous question.
    #[inline]
    pub fn new(column: usize, value: &Value) -> Self {
        match value {
            Value::Int(i) => {
                Self::Discrete { column, value: Label::Int(*i) }
            },
            Value::Token(t) => {
                Self::Discrete { column, value: Label::Token(t.clone()) }
            },
            Value::Float(threshold) => {
                Self::Continuous { column, threshold: *threshold }
            },
        }
    }


    /// Construct the question from a raw JSON value.
    /// Fails with `UnsupportedValueType` for
    /// nulls, booleans, arrays, and objects.
    #[inline]
    pub fn try_new(column: usize, value: &JsonValue) -> Result<Self> {
        let value = Value::try_from(value)?;
        Ok(Self::new(column, &value))
    }


    /// Returns the column index this question looks at.
    #[inline]
    pub fn column(&self) -> usize {
        match self {
            Self::Continuous { column, .. } => *column,
            Self::Discrete { column, .. } => *column,
        }
    }


    /// Returns `true` if `value` answers the question with "yes".
    ///
    /// Numbers are compared numerically,
    /// so an integer can fall below a threshold
    /// and a float can equal an integer category.
    /// A token never falls below a threshold,
    /// and never equals a numeric category (and vice versa).
    #[inline]
    pub fn check_answer(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Continuous { threshold, .. }, value) => {
                value.as_f64()
                    .is_some_and(|x| x < *threshold)
            },
            (Self::Discrete { value: Label::Int(i), .. }, Value::Int(x)) => {
                i == x
            },
            (Self::Discrete { value: Label::Int(i), .. }, Value::Float(x)) => {
                *i as f64 == *x
            },
            (Self::Discrete { value: Label::Token(t), .. }, Value::Token(x)) => {
                t == x
            },
            _ => false,
        }
    }


    /// Returns `true` if the feature row answers the question with "yes".
    /// A row without the column answers "no".
    #[inline]
    pub fn check_row(&self, row: &[Value]) -> bool {
        row.get(self.column())
            .is_some_and(|value| self.check_answer(value))
    }
}


impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuous { column, threshold } => {
                write!(f, "f{column} < {threshold:?}")
            },
            Self::Discrete { column, value } => {
                write!(f, "f{column} = {value}")
            },
        }
    }
}
