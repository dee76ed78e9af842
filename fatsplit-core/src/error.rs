use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Unsupported file type: {}", .0.display())]
    Unsupported(PathBuf),

    #[error("Invalid size {input:?}: {reason}")]
    InvalidSize { input: String, reason: &'static str },

    #[error("Refusing to overwrite existing part: {}. Use --overwrite to replace.", path.display())]
    Conflict { path: PathBuf },

    #[error(
        "{} would need {parts} parts (limit {max}); use a larger chunk size",
        path.display()
    )]
    TooManyParts { path: PathBuf, parts: u64, max: u64 },

    #[error("Operation cancelled by user.")]
    Cancelled,

    #[error(
        "Unexpected end of file while writing {}: expected {expected} bytes, got {got}",
        path.display()
    )]
    UnexpectedEof {
        path: PathBuf,
        expected: u64,
        got: u64,
    },

    #[error("No path provided")]
    NoInput,
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, SplitError>;
