//! # Storage Layer
//!
//! The [`BookStore`] trait is the seam between the catalog logic and the place
//! the catalog lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole catalog is one JSON array in a single file
//!   - Every save goes through [`atomic::write_atomic`]
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert that failed commands never write
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "id": "1",
//!     "title": "Dune",
//!     "author": "Frank Herbert",
//!     "price": 9.99,
//!     "image_url": ""
//!   }
//! ]
//! ```
//!
//! There is no partial read or write: `load` returns every book and `save`
//! replaces every book.

use crate::catalog::Catalog;
use crate::error::Result;

pub mod atomic;
pub mod fs;
pub mod memory;

/// Whole-catalog persistence.
pub trait BookStore {
    /// Read the full catalog.
    fn load(&self) -> Result<Catalog>;

    /// Replace the stored catalog with `catalog`.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;
}
