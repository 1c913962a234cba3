use thiserror::Error;

use crate::validation::Inconsistency;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Inconsistent edge: {0}")]
    InconsistentEdge(Inconsistency),
}
