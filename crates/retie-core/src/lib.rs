//! retie core — the post list controller and theme switch
//!
//! The controller owns the store adapter and keeps it consistent with a
//! display surface supplied by the host:
//! 1. **Initialize**: load the persisted list (seeding it on first run) and
//!    render it newest-first.
//! 2. **Create**: validate form input, render the new card on top, append
//!    the record to the persisted list.
//!
//! All collaborators — storage backend, display surface, form, dialog — are
//! injected; nothing in this crate reaches for globals.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use retie_core::{Blog, BlogConfig};
//! use retie_post::SystemClock;
//! use retie_render::MemorySurface;
//! use retie_store::MemoryBackend;
//!
//! let mut blog = Blog::new(MemoryBackend::new(), SystemClock::new());
//! let mut surface = MemorySurface::new();
//! blog.initialize(&mut surface)?;
//! ```

pub mod blog;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod theme;

pub use blog::Blog;
pub use collaborators::{ComposeForm, Dialog};
pub use config::BlogConfig;
pub use error::BlogError;
pub use theme::{ParseThemeError, Theme};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
