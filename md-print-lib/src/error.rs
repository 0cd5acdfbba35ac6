//! Defines custom error types for the conversion pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a document cannot be converted.
pub enum ConvertError {
    #[error("Failed to read input file: {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input file is not valid UTF-8: {}", path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("Failed to write to output file: {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
