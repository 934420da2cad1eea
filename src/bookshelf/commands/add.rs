use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookDraft;
use crate::store::BookStore;
use tracing::info;

pub fn run<S: BookStore>(store: &mut S, draft: BookDraft) -> Result<CmdResult> {
    // Validate before touching the store so bad input never loads or writes.
    let book = draft.into_book()?;

    let mut catalog = store.load()?;
    catalog.add(book.clone())?;
    store.save(&catalog)?;
    info!(id = %book.id, "added book");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookshelfError;
    use crate::model::Price;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::book;

    fn draft(id: &str, title: &str) -> BookDraft {
        BookDraft {
            id: Some(id.into()),
            title: Some(title.into()),
            author: Some("Jane Austen".into()),
            price: Some(Price::new(4.5).unwrap()),
            image_url: None,
        }
    }

    #[test]
    fn test_appends_and_saves() {
        let mut store = InMemoryStore::with_books(vec![book("1", "A")]);
        let result = run(&mut store, draft("2", "Emma")).unwrap();

        assert_eq!(store.saves(), 1);
        assert_eq!(store.books().len(), 2);
        assert_eq!(store.books()[1].title, "Emma");
        assert_eq!(result.affected_books[0].id, "2");
        assert_eq!(result.messages[0].content, "Book added (2): Emma");
    }

    #[test]
    fn test_duplicate_id_is_rejected_without_saving() {
        let mut store = InMemoryStore::with_books(vec![book("1", "A")]);
        let err = run(&mut store, draft("1", "Emma")).unwrap_err();

        assert!(matches!(err, BookshelfError::AlreadyExists(_)));
        assert_eq!(store.saves(), 0);
        assert_eq!(store.books(), &[book("1", "A")]);
    }

    #[test]
    fn test_each_missing_required_field_is_rejected_without_saving() {
        let blanks: [fn(&mut BookDraft); 4] = [
            |d: &mut BookDraft| d.id = Some(String::new()),
            |d: &mut BookDraft| d.title = None,
            |d: &mut BookDraft| d.author = Some("".into()),
            |d: &mut BookDraft| d.price = None,
        ];

        for blank in blanks {
            let mut store = InMemoryStore::new();
            let mut input = draft("1", "Emma");
            blank(&mut input);

            let err = run(&mut store, input).unwrap_err();
            assert!(matches!(err, BookshelfError::Validation(_)));
            assert_eq!(store.saves(), 0);
        }
    }

    #[test]
    fn test_image_is_optional() {
        let mut store = InMemoryStore::new();
        let mut input = draft("1", "Emma");
        input.image_url = Some("https://example.com/emma.png".into());
        run(&mut store, input).unwrap();
        assert_eq!(
            store.books()[0].image_url.as_deref(),
            Some("https://example.com/emma.png")
        );
    }
}
