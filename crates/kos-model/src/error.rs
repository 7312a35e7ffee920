use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid doc entry id: {0:?}")]
    InvalidEntryId(String),
    #[error("invalid doc entry name: {0:?}")]
    InvalidEntryName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
