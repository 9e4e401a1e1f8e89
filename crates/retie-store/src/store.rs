//! Typed store adapter over a storage backend
//!
//! One backend namespace, two logically separate slots: the JSON post list
//! and the theme flag. The adapter owns the backend; the controller owns the
//! adapter. No other component touches storage.

use crate::backend::{StorageBackend, StoreError};
use retie_post::Post;

/// Slot key for the persisted post list
pub const POSTS_KEY: &str = "retie-posts";

/// Slot key for the persisted theme flag
pub const THEME_KEY: &str = "theme";

/// Store adapter
///
/// # Invariants
/// - The posts slot is either absent or a JSON array of `{title, content,
///   date}` records in insertion order (oldest first)
/// - A malformed posts slot reads as `None` — callers treat it as "no data"
///   and reseed; the malformed value is overwritten by the next save
#[derive(Debug, Clone)]
pub struct Store<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Store<B> {
    /// Wrap a backend
    #[inline]
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the persisted post list
    ///
    /// Returns `None` when the slot is unset or fails to parse. Parse
    /// failures are logged and swallowed; they are recoverable by reseeding
    /// and must never reach the user.
    #[must_use]
    pub fn load_posts(&self) -> Option<Vec<Post>> {
        let raw = self.backend.get(POSTS_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(posts) => Some(posts),
            Err(error) => {
                tracing::warn!(%error, "persisted post list is malformed; treating as empty");
                None
            }
        }
    }

    /// Serialize and overwrite the persisted post list
    ///
    /// The full list is written every time; there are no partial updates.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot record the value.
    pub fn save_posts(&mut self, posts: &[Post]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(posts)?;
        self.backend.set(POSTS_KEY, &raw)
    }

    /// Read the persisted theme flag, if any
    #[must_use]
    pub fn load_theme(&self) -> Option<String> {
        self.backend.get(THEME_KEY)
    }

    /// Overwrite the persisted theme flag
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot record the value.
    pub fn save_theme(&mut self, theme: &str) -> Result<(), StoreError> {
        self.backend.set(THEME_KEY, theme)
    }

    /// Borrow the underlying backend
    #[inline]
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Recover the underlying backend
    #[inline]
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
