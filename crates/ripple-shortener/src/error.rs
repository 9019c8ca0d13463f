use ripple_core::{CoreError, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Error)]
pub enum ShortenerError {
    /// Every draw collided with an existing code; the table is (nearly) full.
    #[error("unable to allocate a unique short code after {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Core(#[from] CoreError),
}
