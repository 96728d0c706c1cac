use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, SelectionState};
use crate::store::{BlobStore, CollectionStore};

/// Toggles a collection in the active filter and reports the new header
/// label.
///
/// No existence check: toggling a since-deleted id is harmless because the
/// predicate treats unknown ids as never-matching.
pub fn run<B: BlobStore>(
    store: &CollectionStore<B>,
    selection: &mut SelectionState,
    id: Uuid,
) -> Result<CmdResult> {
    let selected = selection.toggle(id);

    let mut result = CmdResult::default().with_label(filter::selected_label(store, selection));
    if let Some(collection) = store.find(id) {
        result.add_message(CmdMessage::info(format!(
            "{}: {}",
            if selected { "Selected" } else { "Deselected" },
            collection.name
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::ShelfFixture;

    #[test]
    fn toggle_twice_restores_label() {
        let fixture = ShelfFixture::new().with_collection("Tech", &[]);
        let id = fixture.id_of("Tech");
        let mut selection = SelectionState::new();

        let result = run(&fixture.store, &mut selection, id).unwrap();
        assert_eq!(result.label.as_deref(), Some("Tech"));

        let result = run(&fixture.store, &mut selection, id).unwrap();
        assert_eq!(result.label.as_deref(), Some("All Documents"));
    }

    #[test]
    fn toggling_unknown_id_never_errors() {
        let fixture = ShelfFixture::new().with_collection("Tech", &[]);
        let mut selection = SelectionState::new();

        let result = run(&fixture.store, &mut selection, Uuid::new_v4()).unwrap();

        // Dangling selection: no name resolves, label skips it
        assert_eq!(result.label.as_deref(), Some(""));
        assert!(!selection.is_empty());
    }
}
