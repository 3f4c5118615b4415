//! The presentation shell the controller drives, and the events it emits.
//!
//! # Design
//! The shell owns markup placement, form widgets, the modal, and blocking
//! dialogs. The controller never reads widget state back; everything it needs
//! arrives inside a `UserAction`.

use crate::edit::{ClickTarget, CloseReason};
use crate::form::TodoForm;
use crate::types::{Filter, Stats};

/// Page visibility as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Everything the shell can report back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    FilterSelected(Filter),
    CreateSubmitted(TodoForm),
    EditRequested(String),
    EditSubmitted(TodoForm),
    EditDismissed(CloseReason),
    ModalClicked(ClickTarget),
    DeleteRequested(String),
    VisibilityChanged(Visibility),
}

/// Output side of the UI.
///
/// `alert` and `confirm` block until the user answers.
pub trait Shell {
    /// Replace the list container's markup.
    fn show_list(&mut self, markup: &str);

    fn show_stats(&mut self, stats: &Stats);

    /// Mark `filter`'s tab active and every other tab inactive.
    fn activate_tab(&mut self, filter: Filter);

    fn set_create_date(&mut self, value: &str);

    fn reset_create_form(&mut self);

    fn open_edit_modal(&mut self, form: &TodoForm);

    /// Hide the modal and clear its fields.
    fn close_edit_modal(&mut self);

    fn alert(&mut self, message: &str);

    fn confirm(&mut self, message: &str) -> bool;
}
