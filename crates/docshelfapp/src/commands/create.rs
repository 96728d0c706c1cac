use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BlobStore, CollectionStore};

pub fn run<B: BlobStore>(store: &mut CollectionStore<B>, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(id) = store.create(name)? else {
        // Blank name: silent no-op in the core, the host may prompt again
        result.add_message(CmdMessage::warning("Collection name cannot be empty"));
        return Ok(result);
    };

    if let Some(collection) = store.find(id).cloned() {
        result.add_message(CmdMessage::success(format!(
            "Collection created: {}",
            collection.name
        )));
        result.affected.push(collection);
    }
    Ok(result)
}
