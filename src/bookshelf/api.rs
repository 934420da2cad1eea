//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! every bookshelf operation, whatever the UI.
//!
//! The API dispatches to the matching `commands::*::run` function and returns
//! its `CmdResult`. It holds no business logic and never prints.
//!
//! `BookshelfApi<S: BookStore>` is generic over the storage backend:
//! - Production: `BookshelfApi<FileStore>`
//! - Testing: `BookshelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{BookDraft, BookPatch};
use crate::store::BookStore;

pub struct BookshelfApi<S: BookStore> {
    store: S,
}

impl<S: BookStore> BookshelfApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_book(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn add_book(&mut self, draft: BookDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn update_book(&mut self, id: &str, patch: &BookPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_book(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
