//! Struct `Sample` represents a batch sample.  

// Provides the feature value and the label types.
pub(crate) mod value;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::SampleReader;
pub use sample_struct::{Sample, rows_from_dataframe};
pub use value::{Value, Label};
