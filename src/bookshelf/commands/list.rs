use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S) -> Result<CmdResult> {
    let catalog = store.load()?;
    Ok(CmdResult::default().with_listed_books(catalog.into_books()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::book;

    #[test]
    fn test_empty_catalog_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_books.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_lists_in_insertion_order() {
        let store = InMemoryStore::with_books(vec![book("b", "B"), book("a", "A")]);
        let result = run(&store).unwrap();
        let ids: Vec<_> = result.listed_books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(store.saves(), 0);
    }
}
