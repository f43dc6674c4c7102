use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProducerError {
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("Candidate pools must not be empty")]
    EmptyPool,
    #[error("Minimum age is greater than maximum age")]
    InvalidAgeRange,
    #[error("Unable to resolve the current process: {0}")]
    MemoryUnavailable(&'static str),
    #[error("Current process is missing from the process table")]
    ProcessNotFound,
}
