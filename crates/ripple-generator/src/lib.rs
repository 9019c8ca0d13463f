pub mod random;
pub mod seq;

pub use random::RandomHexGenerator;
pub use seq::SeqHexGenerator;

use ripple_core::ShortCode;

/// Trait for drawing candidate short codes.
///
/// Implementations are pure generators that don't interact with storage:
/// a drawn code may already be taken, and rejecting it is the allocator's
/// job.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Draws the next candidate code.
    fn generate(&self) -> Self::Output;
}
