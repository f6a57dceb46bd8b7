use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TfmvError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to print output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Regex error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, TfmvError>;
