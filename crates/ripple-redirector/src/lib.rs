//! Redirector side of the Ripple short-link table.
//!
//! [`resolver::resolve`] is the pure lookup: a raw request path and a
//! [`MappingSet`](ripple_core::MappingSet) in, a [`Resolution`] out.
//! [`RedirectorService`] serves it from an in-memory snapshot of a
//! repository, refreshed on demand.
//!
//! # Example
//!
//! ```rust
//! use ripple_redirector::{Redirector, RedirectorService, Resolution};
//! use ripple_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RedirectorService::load(InMemoryRepository::new()).await?;
//!
//! match service.resolve("/ln/a1b2") {
//!     Resolution::Redirect(target) => println!("{} {}", target.status, target.location),
//!     Resolution::NotFound(code) => println!("no mapping for {code}"),
//!     Resolution::Invalid => println!("not a short link"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod redirector;
pub mod resolver;
pub mod service;

pub use error::{RedirectorError, Result};
pub use redirector::Redirector;
pub use resolver::{RedirectTarget, Resolution};
pub use service::RedirectorService;
