//! Storage collaborators for the Ripple short-link table.
//!
//! [`JsonFileRepository`] is the durable store shared by the admin tool and
//! the gateway; [`InMemoryRepository`] backs tests and throwaway deployments.

pub mod json;
pub mod memory;

pub use json::JsonFileRepository;
pub use memory::InMemoryRepository;
pub use ripple_core::repository::{ReadRepository, Repository};
