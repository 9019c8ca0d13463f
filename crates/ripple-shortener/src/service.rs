use crate::allocator::Allocator;
use crate::error::{Result, ShortenerError};
use ripple_core::{MappingSet, Repository, ShortCode};
use ripple_generator::Generator;
use std::sync::Arc;
use tracing::{info, warn};

/// A freshly persisted short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub code: ShortCode,
    pub url: String,
    /// Request path the code is served under, e.g. `/ln/a1b2`.
    pub path: String,
}

/// Adds URLs to the durable short-link table.
///
/// Each call loads the full table, allocates a code against it, inserts the
/// new mapping and writes the whole table back. A code is only returned once
/// that write has succeeded.
///
/// Note: there is no locking across processes. Run one shortener at a time
/// against a given table.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    allocator: Arc<Allocator<G>>,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, allocator: Allocator<G>) -> Self {
        Self {
            repository: Arc::new(repository),
            allocator: Arc::new(allocator),
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn validate_url(url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Allocates a code for `url` and persists the updated table.
    pub async fn shorten(&self, url: impl Into<String>) -> Result<Shortened> {
        let url = url.into();
        Self::validate_url(&url)?;

        let mut mappings = self.repository.load().await?;
        let code = self.allocator.allocate(&mappings)?;
        mappings.insert(code.clone(), url.clone())?;

        if let Err(err) = self.repository.store(&mappings).await {
            warn!(code = %code, error = %err, "failed to persist mappings, discarding code");
            return Err(err.into());
        }

        info!(code = %code, url = %url, "added short link");
        Ok(Shortened {
            path: code.to_path(),
            code,
            url,
        })
    }

    /// Returns the persisted table.
    pub async fn list(&self) -> Result<MappingSet> {
        Ok(self.repository.load().await?)
    }
}
