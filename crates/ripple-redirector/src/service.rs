use std::sync::Arc;

use crate::error::Result;
use crate::redirector::Redirector;
use crate::resolver::{self, Resolution};
use async_trait::async_trait;
use parking_lot::RwLock;
use ripple_core::{MappingSet, ReadRepository};
use tracing::{debug, info, trace};

/// Service for handling short-link redirects.
///
/// Requests are answered from an immutable in-memory snapshot of the table;
/// the repository is only touched by [`RedirectorService::load`] and
/// [`Redirector::refresh`]. A refresh swaps in a whole new snapshot, so a
/// request sees either the old table or the new one.
#[derive(Debug)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
    snapshot: RwLock<Arc<MappingSet>>,
}

impl<R: ReadRepository> RedirectorService<R> {
    /// Creates a new RedirectorService, loading the initial snapshot from
    /// `repository`.
    pub async fn load(repository: R) -> Result<Self> {
        let mappings = repository.load().await?;
        info!(count = mappings.len(), "loaded short-link mappings");

        Ok(Self {
            repository: Arc::new(repository),
            snapshot: RwLock::new(Arc::new(mappings)),
        })
    }

    /// Returns the snapshot currently being served.
    pub fn snapshot(&self) -> Arc<MappingSet> {
        self.snapshot.read().clone()
    }
}

#[async_trait]
impl<R: ReadRepository> Redirector for RedirectorService<R> {
    fn resolve(&self, path: &str) -> Resolution {
        let snapshot = self.snapshot();
        let resolution = resolver::resolve(path, &snapshot);

        match &resolution {
            Resolution::Redirect(target) => {
                debug!(path = %path, location = %target.location, "resolved short code")
            }
            Resolution::NotFound(code) => trace!(code = %code, "short code not found"),
            Resolution::Invalid => trace!(path = %path, "not a short-link path"),
        }
        resolution
    }

    fn mapping_count(&self) -> usize {
        self.snapshot.read().len()
    }

    async fn refresh(&self) -> Result<usize> {
        let mappings = self.repository.load().await?;
        let count = mappings.len();
        *self.snapshot.write() = Arc::new(mappings);

        debug!(count, "refreshed short-link mappings");
        Ok(count)
    }
}
