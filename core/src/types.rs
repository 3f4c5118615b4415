//! Domain DTOs for the todo service.
//!
//! # Design
//! These types mirror the service's JSON schema but are defined independently
//! from the mock-server crate; integration tests catch schema drift.
//! `TodoRecord` keeps the status as the raw wire label because the service
//! owns the set of labels. Anything the client does not recognise is styled
//! and edited as `TodoStatus::Scheduled`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a todo, serialized as the service's display label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TodoStatus {
    #[default]
    #[serde(rename = "예정")]
    Scheduled,
    #[serde(rename = "진행중")]
    InProgress,
    #[serde(rename = "완료")]
    Completed,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 3] = [
        TodoStatus::Scheduled,
        TodoStatus::InProgress,
        TodoStatus::Completed,
    ];

    /// The localized label used on the wire and in the status badge.
    pub fn label(self) -> &'static str {
        match self {
            TodoStatus::Scheduled => "예정",
            TodoStatus::InProgress => "진행중",
            TodoStatus::Completed => "완료",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    /// CSS class token for list items and badges.
    pub fn class_token(self) -> &'static str {
        match self {
            TodoStatus::Scheduled => "scheduled",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which subset of todos the list shows. Selected through the filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Scheduled,
    InProgress,
    Completed,
}

impl Filter {
    pub const TABS: [Filter; 4] = [
        Filter::All,
        Filter::Scheduled,
        Filter::InProgress,
        Filter::Completed,
    ];

    /// Path segment used by `GET /api/todos/{filter}`.
    pub fn path_segment(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Scheduled => "scheduled",
            Filter::InProgress => "in-progress",
            Filter::Completed => "completed",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::TABS
            .into_iter()
            .find(|filter| filter.path_segment() == segment)
    }

    /// The status this filter narrows to, `None` for `All`.
    pub fn status(self) -> Option<TodoStatus> {
        match self {
            Filter::All => None,
            Filter::Scheduled => Some(TodoStatus::Scheduled),
            Filter::InProgress => Some(TodoStatus::InProgress),
            Filter::Completed => Some(TodoStatus::Completed),
        }
    }

    pub fn matches(self, record: &TodoRecord) -> bool {
        match self.status() {
            None => true,
            Some(status) => TodoStatus::from_label(&record.status) == Some(status),
        }
    }
}

/// A single todo as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: String,
    pub content: String,
    pub target_date: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl TodoRecord {
    /// Status used for styling and edit pre-fill; unknown labels fall back
    /// to `Scheduled`.
    pub fn status_kind(&self) -> TodoStatus {
        TodoStatus::from_label(&self.status).unwrap_or_default()
    }
}

/// Request body for `POST /api/todos` and `PUT /api/todos/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPayload {
    pub content: String,
    pub target_date: String,
    pub status: TodoStatus,
}

/// Aggregate counts computed by the service across every todo.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub total: u64,
    pub scheduled: u64,
    pub in_progress: u64,
    pub completed: u64,
}

/// Body the service sends alongside a non-success status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
