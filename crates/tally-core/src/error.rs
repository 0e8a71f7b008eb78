//! Error types for tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Query timed out after {0}s")]
    QueryTimeout(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
