//! Edit modal state machine.
//!
//! `Closed` → `Editing` when the user asks to edit a rendered todo;
//! `Editing` → `Closed` on save, cancel, the close button, or a click on the
//! backdrop. Opening while already editing replaces the current session.

use crate::form::TodoForm;
use crate::types::TodoRecord;

/// Why the modal closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Saved,
    Cancelled,
    Closed,
    Backdrop,
}

/// Where a click inside the modal overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay itself, outside the dialog.
    Backdrop,
    /// Anything inside the dialog.
    Content,
}

impl ClickTarget {
    pub fn closes_modal(self) -> bool {
        matches!(self, ClickTarget::Backdrop)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Editing {
        id: String,
        snapshot: TodoForm,
    },
}

impl EditSession {
    /// Start editing `record`, replacing any open session.
    pub fn open(&mut self, record: &TodoRecord) {
        *self = EditSession::Editing {
            id: record.id.clone(),
            snapshot: TodoForm::from_record(record),
        };
    }

    /// Close the session. Returns the id that was being edited, if any.
    pub fn close(&mut self, reason: CloseReason) -> Option<String> {
        match std::mem::take(self) {
            EditSession::Editing { id, .. } => {
                tracing::debug!(id = %id, ?reason, "edit session closed");
                Some(id)
            }
            EditSession::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditSession::Editing { id, .. } => Some(id),
            EditSession::Closed => None,
        }
    }

    pub fn snapshot(&self) -> Option<&TodoForm> {
        match self {
            EditSession::Editing { snapshot, .. } => Some(snapshot),
            EditSession::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoStatus;

    fn record(id: &str, content: &str) -> TodoRecord {
        TodoRecord {
            id: id.to_string(),
            content: content.to_string(),
            target_date: "2026-01-20T09:30:00".to_string(),
            status: "진행중".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn starts_closed() {
        let session = EditSession::default();
        assert!(!session.is_open());
        assert!(session.editing_id().is_none());
    }

    #[test]
    fn open_snapshots_record() {
        let mut session = EditSession::default();
        session.open(&record("7", "Study"));
        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.content, "Study");
        assert_eq!(snapshot.target_date, "2026-01-20T09:30");
        assert_eq!(snapshot.status, TodoStatus::InProgress);
        assert_eq!(session.editing_id(), Some("7"));
    }

    #[test]
    fn reopening_replaces_session() {
        let mut session = EditSession::default();
        session.open(&record("1", "first"));
        session.open(&record("2", "second"));
        assert_eq!(session.editing_id(), Some("2"));
        assert_eq!(session.snapshot().unwrap().content, "second");
    }

    #[test]
    fn close_clears_id() {
        let mut session = EditSession::default();
        session.open(&record("1", "first"));
        assert_eq!(session.close(CloseReason::Cancelled), Some("1".to_string()));
        assert_eq!(session, EditSession::Closed);
        assert_eq!(session.close(CloseReason::Closed), None);
    }

    #[test]
    fn only_backdrop_clicks_close() {
        assert!(ClickTarget::Backdrop.closes_modal());
        assert!(!ClickTarget::Content.closes_modal());
    }
}
