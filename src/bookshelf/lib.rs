//! # Bookshelf Architecture
//!
//! Bookshelf keeps a catalog of books in one JSON file. Each run loads the
//! whole catalog, applies at most one change and, if something changed,
//! writes the whole catalog back with an atomic replace.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, prints results, sets up logging            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → change the Catalog → save only if changed         │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! │  - atomic::write_atomic for every write                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Commands** and **catalog**: unit tests against `InMemoryStore`.
//! 2. **Store**: unit tests against temp directories, including injected
//!    failures in the middle of an atomic write.
//! 3. **CLI**: integration tests in `tests/` that run the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`catalog`]: In-memory collection and its operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `Price`, `BookDraft`, `BookPatch`
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

#[cfg(test)]
mod test_utils;
