//! Post data model
//!
//! Defines the [`Post`] record and everything needed to mint one:
//! - [`PostDraft`] validation (trimmed, non-empty title and content)
//! - [`Clock`] abstraction so creation dates are testable
//! - The two fixed seed posts used on first run
//!
//! A `Post` is immutable after construction: its `date` is stamped exactly
//! once, at creation, and carried as opaque text from then on. Re-deriving
//! the date at render time is explicitly not supported.

pub mod clock;
pub mod post;
pub mod seed;

pub use clock::{format_ko_kr, Clock, SystemClock};
pub use post::{DraftError, Post, PostDraft};
pub use seed::{seed_posts, FIRST_SEED_TITLE, SECOND_SEED_TITLE};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
