use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create report file: {0}")]
    Create(#[source] std::io::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV serialization error: {0}")]
    Polars(#[from] PolarsError),
}
