//! # Catalog
//!
//! The in-memory collection of books. A catalog is loaded whole from a
//! [`BookStore`](crate::store::BookStore), changed by at most one operation,
//! and handed back to the store to be written whole.
//!
//! Lookups are linear scans with exact string comparison on the id. Ids are
//! only checked for uniqueness when a book is added.

use crate::error::{BookshelfError, Result};
use crate::model::{Book, BookPatch};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn into_books(self) -> Vec<Book> {
        self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Result<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| BookshelfError::NotFound(id.to_string()))
    }

    pub fn add(&mut self, book: Book) -> Result<()> {
        if self.books.iter().any(|b| b.id == book.id) {
            return Err(BookshelfError::AlreadyExists(book.id));
        }
        self.books.push(book);
        Ok(())
    }

    /// Applies `patch` to the book with `id` and returns the names of the
    /// fields that changed (empty when nothing did).
    pub fn update(&mut self, id: &str, patch: &BookPatch) -> Result<Vec<&'static str>> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BookshelfError::NotFound(id.to_string()))?;
        Ok(book.apply(patch))
    }

    /// Removes the first book with `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: &str) -> Result<Book> {
        let pos = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BookshelfError::NotFound(id.to_string()))?;
        Ok(self.books.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::book;

    fn ids(catalog: &Catalog) -> Vec<&str> {
        catalog.books().iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_find_is_exact_match() {
        let catalog = Catalog::new(vec![book("abc", "Title")]);
        assert!(catalog.find_by_id("abc").is_ok());
        assert!(matches!(
            catalog.find_by_id("ABC"),
            Err(BookshelfError::NotFound(_))
        ));
        assert!(matches!(
            catalog.find_by_id(" abc"),
            Err(BookshelfError::NotFound(_))
        ));
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut catalog = Catalog::default();
        catalog.add(book("2", "B")).unwrap();
        catalog.add(book("1", "A")).unwrap();
        assert_eq!(ids(&catalog), vec!["2", "1"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = Catalog::new(vec![book("1", "A")]);
        let err = catalog.add(book("1", "Other")).unwrap_err();
        assert!(matches!(err, BookshelfError::AlreadyExists(id) if id == "1"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books()[0].title, "A");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut catalog = Catalog::new(vec![book("1", "A")]);
        let patch = BookPatch::new(Some("B".into()), None, None, None);
        assert!(matches!(
            catalog.update("2", &patch),
            Err(BookshelfError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut catalog = Catalog::new(vec![book("1", "A"), book("2", "B"), book("3", "C")]);
        let removed = catalog.delete("2").unwrap();
        assert_eq!(removed.id, "2");
        assert_eq!(ids(&catalog), vec!["1", "3"]);
    }

    #[test]
    fn test_delete_removes_only_first_match() {
        let mut catalog = Catalog::new(vec![book("1", "A"), book("1", "B")]);
        catalog.delete("1").unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books()[0].title, "B");
    }
}
