use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a conversion run. Per-record problems are
/// not errors; they are logged and the record is skipped.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read input file {path:?}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input file {path:?} is not valid JSON")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create output directory {path:?}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file {path:?}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
