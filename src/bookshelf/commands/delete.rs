use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;
use tracing::info;

pub fn run<S: BookStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut catalog = store.load()?;
    let removed = catalog.delete(id)?;
    store.save(&catalog)?;
    info!(id = %id, "deleted book");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book deleted ({}): {}",
        removed.id, removed.title
    )));
    Ok(result.with_affected_books(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookshelfError;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::book;

    #[test]
    fn test_removes_one_and_keeps_order() {
        let mut store =
            InMemoryStore::with_books(vec![book("1", "A"), book("2", "B"), book("3", "C")]);
        let result = run(&mut store, "2").unwrap();

        let ids: Vec<_> = store.books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(store.saves(), 1);
        assert_eq!(result.messages[0].content, "Book deleted (2): B");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut store = InMemoryStore::with_books(vec![book("1", "A")]);
        let err = run(&mut store, "2").unwrap_err();
        assert!(matches!(err, BookshelfError::NotFound(_)));
        assert_eq!(store.saves(), 0);
        assert_eq!(store.books().len(), 1);
    }
}
