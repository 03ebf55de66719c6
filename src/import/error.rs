use crate::error::GymError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Can't open file `{path}`.")]
    CantOpenFile {
        path: String,
        source: std::io::Error,
    },
    #[error("Can't read row.")]
    CantReadRow(#[from] csv::Error),
    #[error("Expected {expected} tokens, found {found}.")]
    MalformedRow { expected: usize, found: usize },
    #[error("Invalid row [error: {0}]")]
    InvalidRow(String),
    #[error(transparent)]
    Rejected(#[from] GymError),
}
