use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a run before any record is converted.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file '{}' could not be read", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode JSON from '{}'; check the file format", path.display())]
    DecodeInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{}' does not contain a JSON array of references", path.display())]
    NotAnArray { path: PathBuf },

    #[error("could not create output directory '{}'", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
