use async_trait::async_trait;
use ripple_core::error::StorageError;
use ripple_core::repository::{ReadRepository, Repository, Result};
use ripple_core::MappingSet;
use std::io;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};

/// Flat JSON file implementation of the repository contract.
///
/// The whole table lives in one JSON object, `{ "<code>": "<url>", ... }`,
/// pretty-printed with two-space indentation. A missing file reads as an
/// empty table. Writes go to a sibling `*.json.tmp` file which is then
/// renamed over the target, so a reader sees either the old or the new table
/// and never a partial one.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository backed by the file at `path`.
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl ReadRepository for JsonFileRepository {
    async fn load(&self) -> Result<MappingSet> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "mapping file missing, starting empty");
                return Ok(MappingSet::new());
            }
            Err(err) => return Err(StorageError::Io(err)),
        };

        let mappings: MappingSet = serde_json::from_str(&json).map_err(|e| {
            StorageError::InvalidData(format!("{}: {e}", self.path.display()))
        })?;

        trace!(path = %self.path.display(), count = mappings.len(), "loaded mappings");
        Ok(mappings)
    }
}

#[async_trait]
impl Repository for JsonFileRepository {
    async fn store(&self, mappings: &MappingSet) -> Result<()> {
        let json = serde_json::to_string_pretty(mappings)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.temp_path();
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(json.as_bytes()).await?;
        // contents must be durable before the rename makes them visible
        file.sync_all().await?;
        drop(file);

        if let Err(err) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StorageError::Io(err));
        }

        debug!(path = %self.path.display(), count = mappings.len(), "stored mappings");
        Ok(())
    }
}
