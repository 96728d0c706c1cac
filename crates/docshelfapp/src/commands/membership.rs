use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MembershipChange;
use crate::store::{BlobStore, CollectionStore};

/// Flips a document's membership in one collection.
pub fn toggle<B: BlobStore>(
    store: &mut CollectionStore<B>,
    collection_id: Uuid,
    document_id: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(change) = store.toggle_membership(collection_id, document_id)? else {
        result.add_message(CmdMessage::info("No such collection"));
        return Ok(result);
    };

    if let Some(collection) = store.find(collection_id).cloned() {
        let verb = match change {
            MembershipChange::Added => "added to",
            MembershipChange::Removed => "removed from",
        };
        result.add_message(CmdMessage::success(format!(
            "Document {} {} {}",
            document_id, verb, collection.name
        )));
        result.affected.push(collection);
    }
    Ok(result)
}

/// Sets a document's membership across all collections at once: it ends up in
/// exactly the given collections and no others.
pub fn assign<B: BlobStore>(
    store: &mut CollectionStore<B>,
    document_id: &str,
    collection_ids: &[Uuid],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    store.set_document_collections(document_id, collection_ids)?;

    let members: Vec<String> = store
        .collections()
        .iter()
        .filter(|c| c.contains_document(document_id))
        .map(|c| c.name.clone())
        .collect();
    if members.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Document {} is in no collections",
            document_id
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Document {} is in: {}",
            document_id,
            members.join(", ")
        )));
    }
    Ok(result)
}
