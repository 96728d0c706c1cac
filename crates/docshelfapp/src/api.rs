//! # API Facade
//!
//! [`ShelfApi`] is the single entry point for all docshelf operations and the
//! one context object the host constructs at startup—there is no module-level
//! singleton anywhere in this crate. Build it once, pass it by reference, drop
//! it at exit.
//!
//! The facade owns the three pieces of state the domain has:
//! - the [`CollectionStore`] (persisted after every mutation),
//! - the [`SelectionState`] (in-memory, session-scoped),
//! - the current [`SortMode`].
//!
//! ## Dispatch
//!
//! Hosts with an event-style control flow hand a [`Command`] to
//! [`ShelfApi::dispatch`]; hosts that prefer direct calls use the named
//! methods. Both routes end in the same command modules.
//!
//! Every mutating call leaves the store persisted and the derived state
//! consistent before returning; the host is responsible for re-rendering
//! afterwards (typically via [`ShelfApi::list_collections`],
//! [`ShelfApi::should_show_document`], and [`ShelfApi::selected_label`]).
//!
//! ## Generic Over BlobStore
//!
//! `ShelfApi<B: BlobStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FsBlobStore>`
//! - Testing: `ShelfApi<MemBlobStore>`

use uuid::Uuid;

use crate::commands::{self, CmdResult, Command};
use crate::error::Result;
use crate::filter::{self, SelectionState};
use crate::model::{Collection, SortMode};
use crate::store::{BlobStore, CollectionStore};

/// The main API facade: explicit application context, no globals.
pub struct ShelfApi<B: BlobStore> {
    store: CollectionStore<B>,
    selection: SelectionState,
    sort_mode: SortMode,
}

impl<B: BlobStore> ShelfApi<B> {
    /// Loads the persisted shelf and starts with an empty selection and the
    /// default sort mode.
    pub fn load(backend: B) -> Result<Self> {
        Ok(Self {
            store: CollectionStore::load(backend)?,
            selection: SelectionState::new(),
            sort_mode: SortMode::default(),
        })
    }

    /// Restores a previously captured session (selection + sort mode).
    /// Dangling selected ids are tolerated; they never match.
    pub fn with_session(mut self, selection: SelectionState, sort_mode: SortMode) -> Self {
        self.selection = selection;
        self.sort_mode = sort_mode;
        self
    }

    // --- Commands ---

    pub fn dispatch(&mut self, command: Command) -> Result<CmdResult> {
        match command {
            Command::Create { name } => self.create_collection(&name),
            Command::Delete { id } => self.delete_collection(id),
            Command::ToggleSelection { id } => self.toggle_selection(id),
            Command::ToggleMembership {
                collection_id,
                document_id,
            } => self.toggle_membership(collection_id, &document_id),
            Command::SetSortMode { mode } => self.set_sort_mode(mode),
        }
    }

    pub fn create_collection(&mut self, name: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, name)
    }

    pub fn delete_collection(&mut self, id: Uuid) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &mut self.selection, id)
    }

    pub fn toggle_selection(&mut self, id: Uuid) -> Result<CmdResult> {
        commands::selection::run(&self.store, &mut self.selection, id)
    }

    pub fn toggle_membership(
        &mut self,
        collection_id: Uuid,
        document_id: &str,
    ) -> Result<CmdResult> {
        commands::membership::toggle(&mut self.store, collection_id, document_id)
    }

    /// Bulk membership edit: the document ends up in exactly the given
    /// collections.
    pub fn assign_document(
        &mut self,
        document_id: &str,
        collection_ids: &[Uuid],
    ) -> Result<CmdResult> {
        commands::membership::assign(&mut self.store, document_id, collection_ids)
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) -> Result<CmdResult> {
        self.sort_mode = mode;
        commands::list::run(&self.store, &self.selection, self.sort_mode)
    }

    // --- Queries ---

    /// The collections list in display order, plus the header label.
    pub fn list_collections(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.selection, self.sort_mode)
    }

    /// The filtering predicate the document renderer must honor exactly.
    pub fn should_show_document(&self, document_id: &str) -> bool {
        filter::should_show_document(&self.store, &self.selection, document_id)
    }

    pub fn selected_label(&self) -> String {
        filter::selected_label(&self.store, &self.selection)
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn collections(&self) -> &[Collection] {
        self.store.collections()
    }

    pub fn backend(&self) -> &B {
        self.store.backend()
    }

    /// Resolves a user-supplied collection reference: exact name match first,
    /// then unambiguous id prefix. Returns `None` if nothing (or more than one
    /// thing) matches.
    pub fn resolve(&self, reference: &str) -> Option<Uuid> {
        if let Some(c) = self.store.collections().iter().find(|c| c.name == reference) {
            return Some(c.id);
        }
        let mut matches = self
            .store
            .collections()
            .iter()
            .filter(|c| c.id.to_string().starts_with(reference));
        match (matches.next(), matches.next()) {
            (Some(c), None) => Some(c.id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBlobStore;

    fn api() -> ShelfApi<MemBlobStore> {
        ShelfApi::load(MemBlobStore::new()).unwrap()
    }

    #[test]
    fn test_dispatch_routes_commands() {
        let mut api = api();

        api.dispatch(Command::Create {
            name: "Tech".into(),
        })
        .unwrap();
        assert_eq!(api.collections().len(), 1);

        let id = api.collections()[0].id;
        api.dispatch(Command::ToggleMembership {
            collection_id: id,
            document_id: "doc1".into(),
        })
        .unwrap();
        assert!(api.collections()[0].contains_document("doc1"));

        api.dispatch(Command::ToggleSelection { id }).unwrap();
        assert!(api.selection().contains(id));

        api.dispatch(Command::SetSortMode {
            mode: SortMode::Alphabetical,
        })
        .unwrap();
        assert_eq!(api.sort_mode(), SortMode::Alphabetical);

        api.dispatch(Command::Delete { id }).unwrap();
        assert!(api.collections().is_empty());
        assert!(api.selection().is_empty());
    }

    // The full lifecycle the renderer contract is built around.
    #[test]
    fn test_example_scenario() {
        let mut api = api();

        api.create_collection("Tech").unwrap();
        let id = api.collections()[0].id;
        assert!(api.collections()[0].document_ids.is_empty());

        api.toggle_membership(id, "doc1").unwrap();
        assert_eq!(api.collections()[0].document_ids, vec!["doc1"]);

        api.toggle_selection(id).unwrap();
        assert!(api.should_show_document("doc1"));
        assert!(!api.should_show_document("doc2"));
        assert_eq!(api.selected_label(), "Tech");

        api.delete_collection(id).unwrap();
        assert_eq!(api.selected_label(), "All Documents");
        assert!(api.should_show_document("doc1"));
    }

    #[test]
    fn test_resolve_by_name_then_prefix() {
        let mut api = api();
        api.create_collection("Tech").unwrap();
        api.create_collection("News").unwrap();
        let tech = api.collections()[0].id;

        assert_eq!(api.resolve("Tech"), Some(tech));

        let prefix: String = tech.to_string().chars().take(8).collect();
        assert_eq!(api.resolve(&prefix), Some(tech));

        assert_eq!(api.resolve("nope"), None);
        // Every uuid starts with the empty prefix: ambiguous
        assert_eq!(api.resolve(""), None);
    }

    #[test]
    fn test_session_restore_tolerates_dangling_ids() {
        let mut api = api();
        api.create_collection("Tech").unwrap();
        let id = api.collections()[0].id;
        api.toggle_selection(id).unwrap();

        let mut stale = api.selection().clone();
        stale.toggle(Uuid::new_v4());

        let api = ShelfApi::load(MemBlobStore::new())
            .unwrap()
            .with_session(stale, SortMode::Alphabetical);
        // Store is empty here, so every selected id dangles: nothing matches
        assert!(!api.should_show_document("doc1"));
        assert_eq!(api.selected_label(), "");
    }
}
