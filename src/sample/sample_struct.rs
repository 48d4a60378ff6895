use polars::prelude::*;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use std::io::Read;

use crate::common::checker;
use crate::errors::{CartError, Result};
use super::value::{Value, Label};


/// Struct `Sample` holds a feature matrix in row-major order
/// and the parallel label vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) feature_names: Vec<String>,
    pub(super) rows: Vec<Vec<Value>>,
    pub(super) target: Vec<Label>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


/// The JSON layout accepted by [`Sample::from_json`].
#[derive(Deserialize)]
struct JsonSample {
    data: Vec<Vec<JsonValue>>,
    target: Vec<JsonValue>,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
}


impl Sample {
    /// Construct a new instance of [`Sample`]
    /// from the pair of a feature matrix and a label vector.
    /// Every row must have the same number of features,
    /// and the number of rows must equal to the number of labels.
    pub fn new(rows: Vec<Vec<Value>>, target: Vec<Label>) -> Result<Self> {
        let n_sample = rows.len();
        let n_feature = checker::check_sample(&rows, &target)?;

        let feature_names = default_names(n_feature);
        let sample = Self {
            feature_names, rows, target, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    ///
    /// Integer columns become [`Value::Int`],
    /// float columns become [`Value::Float`],
    /// and string columns become [`Value::Token`].
    /// Any other dtype, or a null cell, is rejected.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let feature_names = data.get_column_names()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let rows = rows_from_dataframe(&data)?;
        let target = series_to_values(&target)?
            .into_iter()
            .map(Label::try_from)
            .collect::<Result<Vec<_>>>()?;

        Self::new(rows, target)?.with_feature_names(feature_names)
    }


    /// Read a JSON document of the form
    /// ```json
    /// {
    ///     "data": [[5.1, 3.5, "setosa-like"], [4.9, 3.0, "other"]],
    ///     "target": [0, 1],
    ///     "feature_names": ["length", "width", "note"]
    /// }
    /// ```
    /// into a [`Sample`]. The key `feature_names` is optional.
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let json: JsonSample = serde_json::from_reader(reader)?;

        let rows = json.data.iter()
            .map(|row| {
                row.iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        let target = json.target.iter()
            .map(Label::try_from)
            .collect::<Result<Vec<_>>>()?;

        let sample = Self::new(rows, target)?;
        match json.feature_names {
            Some(names) => sample.with_feature_names(names),
            None => Ok(sample),
        }
    }


    /// Set the feature (column) names.
    /// Fails when the number of names differs from
    /// the number of features.
    pub fn with_feature_names<S>(mut self, names: Vec<S>) -> Result<Self>
        where S: Into<String>
    {
        let n_names = names.len();
        if n_names != self.n_feature {
            return Err(CartError::FeatureCountMismatch {
                row: 0,
                expected: self.n_feature,
                found: n_names,
            });
        }

        self.feature_names = names.into_iter()
            .map(Into::into)
            .collect();
        Ok(self)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the feature matrix.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows[..]
    }


    /// Returns the label vector.
    pub fn target(&self) -> &[Label] {
        &self.target[..]
    }


    /// Returns the feature names.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names[..]
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> Option<(&[Value], &Label)> {
        let x = self.rows.get(idx)?;
        let y = self.target.get(idx)?;

        Some((&x[..], y))
    }
}


/// Convert every column of `data` into [`Value`]s
/// and returns them as rows.
pub fn rows_from_dataframe(data: &DataFrame) -> Result<Vec<Vec<Value>>> {
    let n_sample = data.height();
    let columns = data.get_columns()
        .iter()
        .map(series_to_values)
        .collect::<Result<Vec<_>>>()?;

    let mut rows = vec![Vec::with_capacity(columns.len()); n_sample];
    for column in columns {
        for (row, value) in rows.iter_mut().zip(column) {
            row.push(value);
        }
    }
    Ok(rows)
}


/// Convert a `polars::Series` into a vector of [`Value`]s.
fn series_to_values(series: &Series) -> Result<Vec<Value>> {
    let name = series.name();
    let dtype = series.dtype();

    let is_integer = matches!(
        dtype, DataType::Int32 | DataType::Int64 | DataType::UInt32
    );
    let is_float = matches!(dtype, DataType::Float32 | DataType::Float64);

    let values = if is_integer {
        series.cast(&DataType::Int64)?
            .i64()?
            .into_iter()
            .map(|v| v.map(Value::Int))
            .collect::<Vec<_>>()
    } else if is_float {
        series.cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(|v| v.map(Value::Float))
            .collect::<Vec<_>>()
    } else if *dtype == DataType::Utf8 {
        series.utf8()?
            .into_iter()
            .map(|v| v.map(Value::from))
            .collect::<Vec<_>>()
    } else {
        return Err(CartError::UnsupportedValueType(
            format!("column `{name}` of dtype {dtype}")
        ));
    };


    // Missing values are not supported.
    values.into_iter()
        .enumerate()
        .map(|(i, v)| {
            v.ok_or_else(|| CartError::UnsupportedValueType(
                format!("null at row {i} of column `{name}`")
            ))
        })
        .collect()
}


/// Returns the dummy feature names `Feat. [1]`, `Feat. [2]`, ...
fn default_names(n_feature: usize) -> Vec<String> {
    (1..=n_feature).map(|i| format!("Feat. [{i}]"))
        .collect()
}
