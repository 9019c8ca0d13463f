use crate::error::Result;
use crate::resolver::Resolution;
use async_trait::async_trait;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a raw request path such as `/ln/a1b2`.
    fn resolve(&self, path: &str) -> Resolution;

    /// Number of mappings currently being served.
    fn mapping_count(&self) -> usize;

    /// Reloads the mappings being served. Returns how many are now live.
    async fn refresh(&self) -> Result<usize>;
}
