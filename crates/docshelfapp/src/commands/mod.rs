//! # Command Layer
//!
//! This module contains the **core business logic** of docshelf. Each command
//! lives in its own submodule and implements pure Rust functions that operate
//! on data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on `CollectionStore`, `SelectionState`, and `SortMode`
//! - Return structured `CmdResult` with affected collections and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr, or terminal concerns (persistence happens
//!   inside the store, not here)
//! - **Argument parsing**: That's the host's job
//! - **User interaction**: No prompts or confirmations; return data, UI decides
//!
//! ## The Command Enum
//!
//! Hosts that work event-style (a click handler, a key binding) build a
//! [`Command`] value and hand it to `ShelfApi::dispatch`. The core never
//! inspects UI structure; the host translates its events into these variants.
//!
//! ## Error Discipline
//!
//! Domain no-ops (blank name, unknown id) come back as `Ok` with at most a
//! warning/info message. `Err` is reserved for persistence failures.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a collection
//! - [`delete`]: Delete a collection (and deselect it)
//! - [`membership`]: Toggle or bulk-edit a document's memberships
//! - [`selection`]: Toggle a collection in the active filter
//! - [`list`]: Materialize the sorted display view

use serde::Serialize;
use uuid::Uuid;

use crate::model::{Collection, SortMode};

pub mod create;
pub mod delete;
pub mod list;
pub mod membership;
pub mod selection;

/// Host-facing dispatch surface: one variant per user-triggered mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { name: String },
    Delete { id: Uuid },
    ToggleSelection { id: Uuid },
    ToggleMembership { collection_id: Uuid, document_id: String },
    SetSortMode { mode: SortMode },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured command outcome for the host to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Collections a mutation touched.
    pub affected: Vec<Collection>,
    /// Collections to display, already in display order.
    pub listed: Vec<Collection>,
    /// Header summary of the current selection, when the command computes one.
    pub label: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, collections: Vec<Collection>) -> Self {
        self.listed = collections;
        self
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = Some(label);
        self
    }
}
