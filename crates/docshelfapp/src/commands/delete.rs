use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::SelectionState;
use crate::store::{BlobStore, CollectionStore};

/// Deletes a collection and drops it from the selection.
///
/// Documents are never touched—deleting a collection only forgets the
/// grouping. An unknown id is an idempotent no-op.
pub fn run<B: BlobStore>(
    store: &mut CollectionStore<B>,
    selection: &mut SelectionState,
    id: Uuid,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let removed = store.find(id).cloned();
    if !store.delete(id)? {
        result.add_message(CmdMessage::info("No such collection"));
        return Ok(result);
    }
    // Deselect so the filter self-corrects immediately
    selection.remove(id);

    if let Some(collection) = removed {
        result.add_message(CmdMessage::success(format!(
            "Collection deleted: {}",
            collection.name
        )));
        result.affected.push(collection);
    }
    Ok(result)
}
