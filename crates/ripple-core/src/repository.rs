use crate::error::StorageError;
use crate::mapping::MappingSet;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of the durable mapping table.
///
/// The redirector only ever needs this half, so it can be pointed at a read
/// replica of the table.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Loads the whole mapping set.
    async fn load(&self) -> Result<MappingSet>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Replaces the stored mapping set with `mappings` as a single unit.
    ///
    /// There is no merge: the last full write wins. On error nothing of
    /// `mappings` may be considered persisted.
    async fn store(&self, mappings: &MappingSet) -> Result<()>;
}
