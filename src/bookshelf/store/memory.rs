use super::BookStore;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books, saves: 0 }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<Catalog> {
        Ok(Catalog::new(self.books.clone()))
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.books = catalog.books().to_vec();
        self.saves += 1;
        Ok(())
    }
}
