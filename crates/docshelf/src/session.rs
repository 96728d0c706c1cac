//! CLI session state.
//!
//! The library keeps the selection and sort mode in memory: they are
//! session-scoped, not part of the collections data. A terminal "session"
//! spans many process invocations, so the CLI captures both under their own
//! blob key between runs. Collections data never mixes into this blob.

use docshelfapp::error::Result;
use docshelfapp::filter::SelectionState;
use docshelfapp::model::SortMode;
use docshelfapp::store::BlobStore;
use serde::{Deserialize, Serialize};

const SESSION_KEY: &str = "session";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Session {
    pub selection: SelectionState,
    pub sort_mode: SortMode,
}

impl Session {
    /// Loads the saved session, falling back to the default (empty selection,
    /// default sort) when absent or unreadable. A corrupt session blob is not
    /// worth failing the command over; it just means starting unfiltered.
    pub fn load<B: BlobStore>(backend: &B) -> Self {
        match backend.read(SESSION_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn save<B: BlobStore>(&self, backend: &B) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        backend.write(SESSION_KEY, &raw)
    }
}
