use ripple_core::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RedirectorError>;

#[derive(Debug, Error)]
pub enum RedirectorError {
    #[error("failed to load mappings: {0}")]
    Storage(#[from] StorageError),
}
