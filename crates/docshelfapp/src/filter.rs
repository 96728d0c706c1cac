//! # Selection & Filter Engine
//!
//! The selection set and the two pure computations derived from it:
//!
//! - the membership predicate ([`should_show_document`]) that the document
//!   list renderer must honor exactly, and
//! - the display ordering of the collections list ([`sorted_collections`]).
//!
//! Both are plain functions over `(&CollectionStore, &SelectionState)`; they
//! never mutate anything, so the host can call them as often as it re-renders.
//!
//! ## Semantics
//!
//! An empty selection is a distinguished state meaning "no filter—show
//! everything", not "show nothing". A non-empty selection is a union: a
//! document passes if it belongs to at least one selected collection that
//! still exists. Selecting a since-deleted collection id is harmless; the id
//! simply never matches and the label skips it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Collection, SortMode};
use crate::store::{BlobStore, CollectionStore};

/// Header label when nothing is selected.
pub const ALL_DOCUMENTS_LABEL: &str = "All Documents";

/// The set of collection ids currently chosen as the active filter.
///
/// Insertion-ordered so the header label lists names in the order the user
/// selected them. Duplicates never occur; toggling twice restores the prior
/// state exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    ids: Vec<Uuid>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    /// Selected ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.ids.iter().copied()
    }

    /// Flips membership: adds the id if absent, removes it if present.
    /// No validation that the id resolves to a live collection—selecting a
    /// since-deleted id never matches and self-corrects on deletion.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        if let Some(pos) = self.ids.iter().position(|i| *i == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Drops the id from the selection if present. Called when a collection
    /// is deleted so the selection never accumulates known-dead ids.
    pub fn remove(&mut self, id: Uuid) {
        self.ids.retain(|i| *i != id);
    }
}

/// The filtering predicate: should this document be visible under the current
/// selection?
///
/// Empty selection shows everything. Otherwise the document must belong to at
/// least one selected collection that still exists in the store (logical OR
/// across the selection).
pub fn should_show_document<B: BlobStore>(
    store: &CollectionStore<B>,
    selection: &SelectionState,
    document_id: &str,
) -> bool {
    if selection.is_empty() {
        return true;
    }
    selection.iter().any(|id| {
        store
            .find(id)
            .is_some_and(|c| c.contains_document(document_id))
    })
}

/// Header summary of the current selection.
///
/// `"All Documents"` when nothing is selected; otherwise the selected
/// collections' names in selection order, joined with `" + "`. Ids that no
/// longer resolve are skipped silently—no error, no placeholder.
pub fn selected_label<B: BlobStore>(
    store: &CollectionStore<B>,
    selection: &SelectionState,
) -> String {
    if selection.is_empty() {
        return ALL_DOCUMENTS_LABEL.to_string();
    }
    let names: Vec<&str> = selection
        .iter()
        .filter_map(|id| store.find(id).map(|c| c.name.as_str()))
        .collect();
    names.join(" + ")
}

/// A freshly materialized display ordering of the collections list.
///
/// Never mutates the stored sequence. All modes sort stably, so collections
/// that compare equal keep their store-insertion relative order.
pub fn sorted_collections<B: BlobStore>(
    store: &CollectionStore<B>,
    mode: SortMode,
) -> Vec<Collection> {
    let mut sorted: Vec<Collection> = store.collections().to_vec();
    match mode {
        SortMode::MostDocuments => {
            sorted.sort_by(|a, b| b.document_ids.len().cmp(&a.document_ids.len()));
        }
        SortMode::FewestDocuments => {
            sorted.sort_by(|a, b| a.document_ids.len().cmp(&b.document_ids.len()));
        }
        SortMode::Alphabetical => {
            // Case-folded comparison; exact ties keep store order.
            sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }
    sorted
}
