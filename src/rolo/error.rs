use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RoloError>;

#[derive(Debug, Error)]
pub enum RoloError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    /// The configured storage path cannot be used as an address book file.
    /// Fatal at startup.
    #[error("Invalid storage file path: {}", .0.display())]
    InvalidStoragePath(PathBuf),

    #[error("Storage error: {0}")]
    Storage(String),

    /// The input line could not be parsed into a command. The message
    /// carries a usage hint for the user.
    #[error("{0}")]
    Parse(String),

    #[error("No storage target registered at index {0}")]
    StorageIndexOutOfRange(usize),
}
