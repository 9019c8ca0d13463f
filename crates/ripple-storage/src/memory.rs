use async_trait::async_trait;
use parking_lot::RwLock;
use ripple_core::repository::{ReadRepository, Repository, Result};
use ripple_core::MappingSet;

/// In-memory implementation of the repository contract.
///
/// Holds one copy of the table; `store` swaps it out whole, matching the
/// replace-the-file semantics of [`JsonFileRepository`](crate::JsonFileRepository).
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    mappings: RwLock<MappingSet>,
}

impl InMemoryRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with `mappings`.
    pub fn with_mappings(mappings: MappingSet) -> Self {
        Self {
            mappings: RwLock::new(mappings),
        }
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn load(&self) -> Result<MappingSet> {
        Ok(self.mappings.read().clone())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn store(&self, mappings: &MappingSet) -> Result<()> {
        *self.mappings.write() = mappings.clone();
        Ok(())
    }
}
