use thiserror::Error;

/// Errors raised while constructing a [`crate::Dataset`].
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column {name:?} has {actual} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        actual: usize,
        expected: usize,
    },
    #[error("duplicate column name {0:?}")]
    DuplicateColumn(String),
}

/// Errors raised on the ingestion path.
///
/// Every variant is recoverable: the caller reports it and keeps the
/// previously loaded dataset, if any.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("parsing succeeded but produced an empty dataset")]
    EmptyResult,
    #[error(transparent)]
    Model(#[from] ModelError),
}
