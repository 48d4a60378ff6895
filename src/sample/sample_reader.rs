use polars::prelude::*;

use std::path::Path;

use crate::errors::{CartError, Result};
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file to [`Sample`].
/// Other formats are not supported yet.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use cartree::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    /// Without a header, polars names the columns
    /// `column_1`, `column_2`, ...
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    /// The column must hold integers or strings.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the CSV file based on the arguments, 
    /// and returns `Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or(CartError::MissingParameter("file"))?;
        let target = self.target
            .ok_or(CartError::MissingParameter("target_feature"))?;

        let mut data = CsvReader::from_path(file.as_ref())?
            .has_header(self.has_header)
            .finish()?;
        let target = data.drop_in_place(target.as_ref())?;

        Sample::from_dataframe(data, target)
    }
}
