//! # Domain Model: Collections
//!
//! A [`Collection`] is a named, user-created grouping of document identifiers.
//! The record is intentionally small: an opaque id, a display name, the member
//! document ids, and a creation timestamp.
//!
//! ## Membership Is a Set, Stored as a Sequence
//!
//! `document_ids` preserves insertion order so a collection's contents display
//! stably in the order the user added them, but duplicates are forbidden.
//! All mutation goes through [`Collection::toggle_document`], which enforces
//! the set semantics.
//!
//! ## Referential Integrity
//!
//! Document ids are references into an external document domain that this
//! subsystem does not own. A collection may reference a document that was
//! deleted elsewhere; that is tolerated, not an error. Nothing here validates
//! document existence.
//!
//! ## Wire Format
//!
//! The serde field names are a persistence contract shared with earlier
//! versions of the data: `id`, `name`, `document_ids`, `created`. Renaming a
//! field breaks every stored shelf, so don't.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named grouping of document identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Opaque unique id, assigned at creation, never reused.
    pub id: Uuid,
    /// Display name. Non-empty after trimming; trimmed at creation.
    pub name: String,
    /// Member document ids, insertion-ordered, no duplicates.
    pub document_ids: Vec<String>,
    /// Creation timestamp, immutable.
    pub created: DateTime<Utc>,
}

/// Outcome of a membership toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    Added,
    Removed,
}

impl Collection {
    /// Creates a collection with a fresh id and no members.
    ///
    /// The caller is responsible for validating the name first; this
    /// constructor only trims it.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            document_ids: Vec::new(),
            created: Utc::now(),
        }
    }

    pub fn contains_document(&self, document_id: &str) -> bool {
        self.document_ids.iter().any(|d| d == document_id)
    }

    /// Flips the document's membership: removes it if present, appends it
    /// otherwise. Never introduces a duplicate.
    pub fn toggle_document(&mut self, document_id: &str) -> MembershipChange {
        if let Some(pos) = self.document_ids.iter().position(|d| d == document_id) {
            self.document_ids.remove(pos);
            MembershipChange::Removed
        } else {
            self.document_ids.push(document_id.to_string());
            MembershipChange::Added
        }
    }
}

/// Display ordering for the collections list.
///
/// Affects only the materialized view handed to the renderer; never the stored
/// sequence and never `document_ids` within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Descending by member count.
    MostDocuments,
    /// Ascending by member count.
    FewestDocuments,
    /// Ascending by case-folded name.
    Alphabetical,
}

impl Default for SortMode {
    fn default() -> Self {
        Self::MostDocuments
    }
}
