//! Error types for the controller
//!
//! The taxonomy is deliberately small: draft rejection is a silent no-op at
//! this level (never an error), and a malformed store reads as empty and is
//! reseeded. What remains is storage infrastructure failing to record a
//! write.

use retie_store::StoreError;

/// Controller error type
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// Persisting to the store failed
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}
