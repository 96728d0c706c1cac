//! # Docshelf Architecture
//!
//! Docshelf is a **UI-agnostic document-collections library**. It is not a CLI
//! application that happens to have some library code—it's a library that happens
//! to have a CLI client.
//!
//! The domain is small and deliberate: users group documents into named
//! collections, pick a subset of collections as an active filter, and choose how
//! the collections list is ordered on screen. The library owns the data model and
//! the two derived computations (the membership predicate and the display sort);
//! rendering belongs entirely to the host.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (CLI binary, or any other UI)                         │
//! │  - Parses input, renders output, owns the event loop        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ShelfApi: the one context object, built at startup       │
//! │  - Dispatches Command values into the command layer         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns structured CmdResult        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract BlobStore trait                                 │
//! │  - FsBlobStore (production), MemBlobStore (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust
//! types (`Result<CmdResult>`), never writes to stdout/stderr, and never assumes
//! a terminal. The same core could back a TUI, a web service, or an editor
//! plugin.
//!
//! ## Error Philosophy
//!
//! Domain-level oddities are never errors. Creating a collection with a blank
//! name, deleting an id that isn't there, toggling membership on an unknown
//! collection, selecting a since-deleted collection—all of these are silent
//! no-ops so every command is idempotent and safe to retry without pre-checking.
//! Only persistence I/O and corrupt stored data produce `Err`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`filter`]: Selection state, the membership predicate, and display sorting
//! - [`model`]: Core data types (`Collection`, `SortMode`)
//! - [`store`]: Storage abstraction and implementations
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod filter;
pub mod model;
pub mod store;
