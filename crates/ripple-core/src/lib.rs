//! Core types and traits for the Ripple short-link table.
//!
//! This crate provides the types shared by the shortener (allocation side)
//! and the redirector (lookup side): the hex [`ShortCode`], the
//! [`MappingSet`] both sides operate on, and the repository traits that
//! abstract the durable storage behind it.

pub mod error;
pub mod mapping;
pub mod repository;
pub mod shortcode;

pub use error::{CoreError, StorageError};
pub use mapping::MappingSet;
pub use repository::{ReadRepository, Repository};
pub use shortcode::{ShortCode, SHORT_PATH_PREFIX};
