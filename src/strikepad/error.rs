use crate::model::DeletionId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrikeError {
    #[error("Deletion not found: {0}")]
    DeletionNotFound(DeletionId),

    #[error("No deletion with sequence number {0}")]
    SequenceNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, StrikeError>;
