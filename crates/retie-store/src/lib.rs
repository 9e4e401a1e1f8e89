//! Durable key-value persistence for retie
//!
//! Two layers:
//! - [`StorageBackend`] — the raw per-origin key-value slot seam, with an
//!   in-memory and a file-per-key implementation
//! - [`Store`] — the typed adapter over a backend, exposing the posts slot
//!   (a JSON-encoded, insertion-ordered list) and the theme slot
//!
//! Reads fail soft: an unset or unparseable slot is treated as "no data" and
//! never surfaced to callers. Writes are full overwrites of a single slot;
//! the last save wins. There is exactly one logical writer per backend.

pub mod backend;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, StoreError};
pub use store::{Store, POSTS_KEY, THEME_KEY};
