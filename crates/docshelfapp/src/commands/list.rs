use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{self, SelectionState};
use crate::model::SortMode;
use crate::store::{BlobStore, CollectionStore};

/// Materializes the display view: the sorted collections list plus the header
/// label for the current selection.
pub fn run<B: BlobStore>(
    store: &CollectionStore<B>,
    selection: &SelectionState,
    mode: SortMode,
) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed(filter::sorted_collections(store, mode))
        .with_label(filter::selected_label(store, selection)))
}
