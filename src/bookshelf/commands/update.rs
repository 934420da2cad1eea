use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookPatch;
use crate::store::BookStore;
use tracing::info;

/// Overwrites the fields set in `patch` on the book with `id`.
///
/// The catalog is only saved when at least one value actually changes. An
/// empty patch, or one that repeats the current values, is reported as
/// "nothing changed" rather than an error. The id is still checked first, so
/// an unknown id is NotFound either way.
pub fn run<S: BookStore>(store: &mut S, id: &str, patch: &BookPatch) -> Result<CmdResult> {
    let mut catalog = store.load()?;
    let changed = catalog.update(id, patch)?;
    let book = catalog.find_by_id(id)?.clone();
    let mut result = CmdResult::default();

    if changed.is_empty() {
        let message = if patch.is_empty() {
            CmdMessage::warning(format!("Nothing changed ({}): no fields given", id))
        } else {
            CmdMessage::info(format!("Nothing changed ({}): values already match", id))
        };
        result.add_message(message);
        return Ok(result.with_affected_books(vec![book]));
    }

    store.save(&catalog)?;
    info!(id = %id, fields = ?changed, "updated book");

    result.add_message(CmdMessage::success(format!(
        "Book updated ({}): {}",
        id,
        changed.join(", ")
    )));
    Ok(result.with_affected_books(vec![book]))
}
