//! Testing utilities for the retie workspace
//!
//! Shared fixtures: a pinned clock, scripted form and dialog collaborators,
//! and surface inspection helpers.

#![allow(missing_docs)]

use chrono::NaiveDate;
use retie_core::{ComposeForm, Dialog};
use retie_post::Clock;
use retie_render::{DisplaySurface, Node};

/// Clock pinned to one calendar date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Pin the clock to `year-month-day`.
///
/// Panics on an invalid calendar date; fixtures are test-only.
#[must_use]
pub fn fixed_clock(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date"))
}

/// Form pre-loaded with one title/content pair, recording resets.
#[derive(Debug, Clone, Default)]
pub struct ScriptedForm {
    pub title: String,
    pub content: String,
    pub reset_count: usize,
}

impl ScriptedForm {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            reset_count: 0,
        }
    }

    #[must_use]
    pub fn was_reset(&self) -> bool {
        self.reset_count > 0
    }
}

impl ComposeForm for ScriptedForm {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn content(&self) -> String {
        self.content.clone()
    }

    fn reset(&mut self) {
        self.title.clear();
        self.content.clear();
        self.reset_count += 1;
    }
}

/// Dialog that records visibility transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingDialog {
    pub open_count: usize,
    pub close_count: usize,
}

impl RecordingDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Dialog for RecordingDialog {
    fn open(&mut self) {
        self.open_count += 1;
    }

    fn close(&mut self) {
        self.close_count += 1;
    }
}

/// Titles shown on a surface, top to bottom.
///
/// Reads each card's `h3`; non-card children contribute their text content.
#[must_use]
pub fn surface_titles(surface: &dyn DisplaySurface) -> Vec<String> {
    surface
        .children()
        .iter()
        .map(|child| {
            child
                .find("h3")
                .map_or_else(|| child.text_content(), title_text)
        })
        .collect()
}

fn title_text(heading: &retie_render::Element) -> String {
    heading.children.iter().map(Node::text_content).collect()
}

/// Dates shown on a surface, top to bottom.
#[must_use]
pub fn surface_dates(surface: &dyn DisplaySurface) -> Vec<String> {
    surface
        .children()
        .iter()
        .filter_map(|child| {
            child.find("div").map(|date| {
                date.children
                    .iter()
                    .map(Node::text_content)
                    .collect::<String>()
            })
        })
        .collect()
}
