//! Markup for the todo list, its empty states, and the stats counters.
//!
//! # Design
//! Rendering is a pure function of the records passed in. Every interpolated
//! value goes through `escape_html`, including ids and dates, since all of it
//! originates outside the client. Per-item buttons carry a `data-action` and
//! the todo id; the shell feeds those two attributes to `action_from_trigger`.

use crate::date;
use crate::shell::UserAction;
use crate::types::{Stats, TodoRecord};

const EMPTY_LIST: &str = r#"<div class="empty-state"><div class="empty-state-icon">📋</div><div class="empty-state-text">TODO가 없습니다.</div></div>"#;
const LOAD_ERROR: &str = r#"<div class="empty-state"><div class="empty-state-icon">⚠️</div><div class="empty-state-text">TODO를 불러올 수 없습니다.</div></div>"#;

pub const EDIT_ACTION: &str = "edit";
pub const DELETE_ACTION: &str = "delete";

/// Escape `& < > " '` for use in element text and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render `records`; an empty slice renders the "no todos" state.
pub fn render(records: &[TodoRecord]) -> String {
    if records.is_empty() {
        return EMPTY_LIST.to_string();
    }
    let mut markup = String::new();
    for record in records {
        render_item(&mut markup, record);
    }
    markup
}

/// Shown in place of the list after a failed fetch.
pub fn render_load_error() -> String {
    LOAD_ERROR.to_string()
}

fn render_item(out: &mut String, record: &TodoRecord) {
    let class = record.status_kind().class_token();
    let id = escape_html(&record.id);
    let content = escape_html(&record.content);
    let raw_date = escape_html(&record.target_date);
    let status = escape_html(&record.status);
    let shown_date = escape_html(&date::display_wire(&record.target_date));

    out.push_str(&format!(
        concat!(
            r#"<div class="todo-item {class}" data-todo-id="{id}" data-todo-content="{content}" data-todo-date="{raw_date}" data-todo-status="{status}">"#,
            r#"<div class="todo-info"><div class="todo-content">{content}</div>"#,
            r#"<div class="todo-meta"><div class="todo-date">📅 {shown_date}</div>"#,
            r#"<span class="todo-status {class}">{status}</span></div></div>"#,
            r#"<div class="todo-actions">"#,
            r#"<button class="todo-btn edit-btn" data-action="{edit}" data-todo-id="{id}">편집</button>"#,
            r#"<button class="todo-btn delete-btn" data-action="{delete}" data-todo-id="{id}">삭제</button>"#,
            r#"</div></div>"#,
        ),
        class = class,
        id = id,
        content = content,
        raw_date = raw_date,
        status = status,
        shown_date = shown_date,
        edit = EDIT_ACTION,
        delete = DELETE_ACTION,
    ));
}

/// Map a clicked item button back to the action it requests.
pub fn action_from_trigger(action: &str, id: &str) -> Option<UserAction> {
    match action {
        EDIT_ACTION => Some(UserAction::EditRequested(id.to_string())),
        DELETE_ACTION => Some(UserAction::DeleteRequested(id.to_string())),
        _ => None,
    }
}

/// Element id of each counter paired with its value.
pub fn stat_slots(stats: &Stats) -> [(&'static str, u64); 4] {
    [
        ("stat-total", stats.total),
        ("stat-scheduled", stats.scheduled),
        ("stat-in-progress", stats.in_progress),
        ("stat-completed", stats.completed),
    ]
}
