//! Create/edit form values and their local validation.

use crate::date;
use crate::error::ValidationError;
use crate::types::{TodoPayload, TodoRecord, TodoStatus};

/// Values of the create form or the edit modal, as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    pub content: String,
    /// Datetime field value (`YYYY-MM-DDTHH:mm`).
    pub target_date: String,
    pub status: TodoStatus,
}

impl TodoForm {
    pub fn new(content: impl Into<String>, target_date: impl Into<String>, status: TodoStatus) -> Self {
        Self {
            content: content.into(),
            target_date: target_date.into(),
            status,
        }
    }

    /// Pre-fill for the edit modal.
    pub fn from_record(record: &TodoRecord) -> Self {
        Self {
            content: record.content.clone(),
            target_date: date::form_input_from_wire(&record.target_date),
            status: record.status_kind(),
        }
    }

    /// Check the form before anything is sent. Content is trimmed.
    pub fn validate(&self) -> Result<TodoPayload, ValidationError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        let target_date = self.target_date.trim();
        if target_date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        Ok(TodoPayload {
            content: content.to_string(),
            target_date: target_date.to_string(),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_content() {
        let form = TodoForm::new("  Buy milk \n", "2026-02-15T10:00", TodoStatus::InProgress);
        let payload = form.validate().unwrap();
        assert_eq!(payload.content, "Buy milk");
        assert_eq!(payload.target_date, "2026-02-15T10:00");
        assert_eq!(payload.status, TodoStatus::InProgress);
    }

    #[test]
    fn blank_content_is_rejected() {
        let form = TodoForm::new("   ", "2026-02-15T10:00", TodoStatus::Scheduled);
        assert_eq!(form.validate(), Err(ValidationError::EmptyContent));
    }

    #[test]
    fn missing_date_is_rejected() {
        let form = TodoForm::new("Buy milk", "", TodoStatus::Scheduled);
        assert_eq!(form.validate(), Err(ValidationError::MissingDate));
    }

    #[test]
    fn from_record_reformats_date_and_normalizes_status() {
        let record = TodoRecord {
            id: "42".to_string(),
            content: "<b>bold</b>".to_string(),
            target_date: "2026-01-30T08:07:00".to_string(),
            status: "보류".to_string(),
            created_at: None,
            updated_at: None,
        };
        let form = TodoForm::from_record(&record);
        assert_eq!(form.content, "<b>bold</b>");
        assert_eq!(form.target_date, "2026-01-30T08:07");
        assert_eq!(form.status, TodoStatus::Scheduled);
    }
}
