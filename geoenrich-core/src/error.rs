use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to open input file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to create output file {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("The input has no header row")]
    MissingHeader,
    #[error("The address column '{0}' does not exist")]
    UnknownColumn(String),
    #[error("The address column #{index} is out of range (the header has {len} columns)")]
    ColumnOutOfRange { index: usize, len: usize },
    #[error("Failed to resolve address '{address}'")]
    Resolve {
        address: String,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
