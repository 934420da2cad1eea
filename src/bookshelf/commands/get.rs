use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S, id: &str) -> Result<CmdResult> {
    let catalog = store.load()?;
    let book = catalog.find_by_id(id)?.clone();
    Ok(CmdResult::default().with_listed_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookshelfError;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::book;

    #[test]
    fn test_finds_book_by_id() {
        let store = InMemoryStore::with_books(vec![book("1", "A"), book("2", "B")]);
        let result = run(&store, "2").unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].title, "B");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = InMemoryStore::with_books(vec![book("1", "A")]);
        let err = run(&store, "9").unwrap_err();
        assert!(matches!(err, BookshelfError::NotFound(id) if id == "9"));
    }
}
