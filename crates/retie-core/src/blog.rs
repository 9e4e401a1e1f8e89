//! Post list controller
//!
//! The central coordinator that:
//! - Loads the persisted list at startup, seeding an empty store
//! - Renders posts newest-first by prepending cards in insertion order
//! - Validates and persists newly composed posts
//! - Flips and persists the theme flag

use crate::collaborators::{ComposeForm, Dialog};
use crate::config::BlogConfig;
use crate::error::BlogError;
use crate::theme::Theme;
use retie_post::{seed_posts, Clock, Post, PostDraft};
use retie_render::{render_card, DisplaySurface};
use retie_store::{StorageBackend, Store};

/// Controller lifecycle state
///
/// The transition happens exactly once, at startup; the rest of the session
/// runs in `Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControllerState {
    Uninitialized,
    Loaded,
}

/// The post list controller
///
/// Owns the store adapter and an in-memory copy of the persisted list; the
/// display surface, form, and dialog are injected per call because the host
/// owns them.
///
/// # Invariants
/// - The persisted list is insertion-ordered (oldest first); display order
///   is newest-first, a presentation transform only
/// - A post's `date` is fixed at creation and never recomputed on re-render
#[derive(Debug)]
pub struct Blog<B: StorageBackend, C: Clock> {
    config: BlogConfig,
    store: Store<B>,
    clock: C,
    posts: Vec<Post>,
    state: ControllerState,
}

impl<B: StorageBackend, C: Clock> Blog<B, C> {
    /// Create controller with default configuration
    #[inline]
    #[must_use]
    pub fn new(backend: B, clock: C) -> Self {
        Self::with_config(BlogConfig::default(), backend, clock)
    }

    /// Create controller with explicit configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: BlogConfig, backend: B, clock: C) -> Self {
        Self {
            config,
            store: Store::new(backend),
            clock,
            posts: Vec::new(),
            state: ControllerState::Uninitialized,
        }
    }

    /// Load persisted posts and render them onto `surface`
    ///
    /// An absent, malformed, or empty store is seeded with the two fixed
    /// example posts, which are persisted immediately so the next session
    /// loads them instead of reseeding. Cards are prepended in insertion
    /// order, so the surface ends up newest-first.
    ///
    /// Calling this a second time in the same session is a no-op.
    ///
    /// # Errors
    /// Returns [`BlogError::Store`] if persisting the seed posts fails.
    pub fn initialize(&mut self, surface: &mut dyn DisplaySurface) -> Result<(), BlogError> {
        if self.state == ControllerState::Loaded {
            tracing::debug!("initialize called twice; ignoring");
            return Ok(());
        }

        let posts = match self.store.load_posts() {
            Some(posts) if !posts.is_empty() => posts,
            _ if self.config.seed_on_empty => {
                let seeds = seed_posts(&self.clock);
                self.store.save_posts(&seeds)?;
                tracing::info!(count = seeds.len(), "seeded empty store");
                seeds
            }
            _ => Vec::new(),
        };

        surface.clear();
        for post in &posts {
            surface.prepend(render_card(post));
        }
        tracing::info!(count = posts.len(), "rendered post list");

        self.posts = posts;
        self.state = ControllerState::Loaded;
        Ok(())
    }

    /// Compose a new post from the form and publish it
    ///
    /// On a valid draft: the card is prepended (so it appears above all
    /// existing posts without a reload), the record is appended to the
    /// persisted list, and the form is reset and the dialog closed. On a
    /// draft that trims to empty, the whole call is a silent no-op: no
    /// render, no persistence, no reset, no close.
    ///
    /// # Errors
    /// Returns [`BlogError::Store`] if persisting the updated list fails.
    pub fn create_post(
        &mut self,
        surface: &mut dyn DisplaySurface,
        form: &mut dyn ComposeForm,
        dialog: &mut dyn Dialog,
    ) -> Result<(), BlogError> {
        let draft = PostDraft::new(form.title(), form.content());
        let post = match draft.compose(&self.clock) {
            Ok(post) => post,
            Err(reason) => {
                tracing::debug!(%reason, "draft rejected");
                return Ok(());
            }
        };

        surface.prepend(render_card(&post));

        if self.state == ControllerState::Uninitialized {
            // Composing before startup still has to respect what is already
            // persisted, not clobber it.
            self.posts = self.store.load_posts().unwrap_or_default();
        }
        self.posts.push(post);
        self.store.save_posts(&self.posts)?;
        tracing::info!(count = self.posts.len(), "post published");

        form.reset();
        dialog.close();
        Ok(())
    }

    /// The persisted theme, or the configured default when unset or
    /// unrecognized
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        self.store
            .load_theme()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(self.config.default_theme)
    }

    /// Flip the theme, persist it, and return the new value
    ///
    /// The caller applies the returned theme to its presentation context.
    ///
    /// # Errors
    /// Returns [`BlogError::Store`] if persisting the flag fails.
    pub fn toggle_theme(&mut self) -> Result<Theme, BlogError> {
        let next = self.current_theme().toggled();
        self.store.save_theme(next.as_str())?;
        tracing::info!(theme = %next, "theme toggled");
        Ok(next)
    }

    /// Posts in insertion order (oldest first), as persisted
    #[inline]
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Recover the store adapter (ends the session)
    #[inline]
    #[must_use]
    pub fn into_store(self) -> Store<B> {
        self.store
    }
}
