//! Host-owned collaborator seams
//!
//! The composition form and the modal dialog belong to the surrounding
//! host. The controller only ever reads raw input, resets the form, and
//! closes the dialog after a successful create — and does none of those on a
//! rejected draft.

/// Composition form supplying raw author input
#[cfg_attr(test, mockall::automock)]
pub trait ComposeForm {
    /// Raw title field value, untrimmed
    fn title(&self) -> String;

    /// Raw content field value, untrimmed
    fn content(&self) -> String;

    /// Clear both fields
    fn reset(&mut self);
}

/// Modal dialog visibility toggle
#[cfg_attr(test, mockall::automock)]
pub trait Dialog {
    /// Show the dialog
    fn open(&mut self);

    /// Hide the dialog
    fn close(&mut self);
}
