//! Short-link allocation for the Ripple short-link table.
//!
//! This crate provides the [`Allocator`], which picks unused hex codes by
//! bounded rejection sampling, and the [`ShortenerService`], which runs the
//! load → allocate → insert → store flow against a repository. The `shortener`
//! binary is the administrative entry point on top of it.

pub mod allocator;
pub mod error;
pub mod service;

pub use allocator::{Allocator, AllocatorSettings, DEFAULT_MAX_ATTEMPTS};
pub use error::ShortenerError;
pub use service::{Shortened, ShortenerService};
