use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KvsError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot format: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Import file not found: {}", .0.display())]
    ImportSourceMissing(PathBuf),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, KvsError>;
