//! Post record and draft validation
//!
//! [`Post`] is the sole persisted entity. It is produced either by seeding
//! (first run) or by composing a [`PostDraft`] from raw form input. There is
//! no edit or delete path: once created, a post is never mutated.

use crate::clock::{format_ko_kr, Clock};
use serde::{Deserialize, Serialize};

/// One authored entry
///
/// # Invariants
/// - `title` and `content` are non-empty, already trimmed
/// - `date` is stamped at creation and never recomputed
/// - JSON shape is exactly `{title, content, date}` (the persisted wire form)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Author-supplied title
    pub title: String,
    /// Author-supplied body; embedded line breaks are preserved verbatim
    pub content: String,
    /// Locale-formatted creation date, opaque text
    pub date: String,
}

/// Errors rejecting a draft
///
/// The controller treats these as a silent no-op; they exist so callers that
/// *do* want to report validation (tests, embedders) can distinguish cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// Title is empty after trimming
    #[error("title is empty after trimming")]
    EmptyTitle,

    /// Content is empty after trimming
    #[error("content is empty after trimming")]
    EmptyContent,
}

/// Raw title/content as supplied by a composition form
///
/// Holds the untrimmed input; [`PostDraft::compose`] is the single place
/// where validation and date stamping happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
}

impl PostDraft {
    /// Create draft from raw form input
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Validate and stamp the draft into a [`Post`]
    ///
    /// Trims both fields; the trimmed values are what get stored, so
    /// whitespace-only input is equivalent to empty. The creation date is
    /// taken from `clock` exactly once, here.
    ///
    /// # Errors
    /// Returns [`DraftError::EmptyTitle`] or [`DraftError::EmptyContent`]
    /// when the corresponding field trims to nothing.
    pub fn compose(&self, clock: &dyn Clock) -> Result<Post, DraftError> {
        let title = self.title.trim();
        let content = self.content.trim();

        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(DraftError::EmptyContent);
        }

        Ok(Post {
            title: title.to_string(),
            content: content.to_string(),
            date: format_ko_kr(clock.today()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug)]
    struct TestClock(NaiveDate);

    impl Clock for TestClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn clock() -> TestClock {
        TestClock(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap())
    }

    #[test]
    fn compose_trims_and_stamps() {
        let post = PostDraft::new("  hello  ", "\nbody\n")
            .compose(&clock())
            .unwrap();
        assert_eq!(post.title, "hello");
        assert_eq!(post.content, "body");
        assert_eq!(post.date, "2026. 8. 30.");
    }

    #[test]
    fn compose_preserves_interior_line_breaks() {
        let post = PostDraft::new("t", "line one\nline two")
            .compose(&clock())
            .unwrap();
        assert_eq!(post.content, "line one\nline two");
    }

    #[test]
    fn compose_rejects_empty_title() {
        let result = PostDraft::new("", "x").compose(&clock());
        assert_eq!(result, Err(DraftError::EmptyTitle));
    }

    #[test]
    fn compose_rejects_empty_content() {
        let result = PostDraft::new("x", "").compose(&clock());
        assert_eq!(result, Err(DraftError::EmptyContent));
    }

    #[test]
    fn compose_rejects_whitespace_only_fields() {
        assert_eq!(
            PostDraft::new("  ", "  ").compose(&clock()),
            Err(DraftError::EmptyTitle)
        );
        assert_eq!(
            PostDraft::new("x", " \t ").compose(&clock()),
            Err(DraftError::EmptyContent)
        );
    }

    #[test]
    fn post_json_field_names_match_wire_form() {
        let post = Post {
            title: "t".to_string(),
            content: "c".to_string(),
            date: "2026. 8. 30.".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "t", "content": "c", "date": "2026. 8. 30."})
        );
    }
}
