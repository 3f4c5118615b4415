//! Application controller: filter state, the edit session, and the
//! refresh-after-mutation flow.
//!
//! # Design
//! Every handler runs to completion on `&mut self`, awaiting one service call
//! at a time. A mutation's follow-up list reload and stats refresh are issued
//! only after the mutation has succeeded. Errors stop at the handler that
//! caused them and reach the user through `Shell::alert`; a failed stats
//! refresh is only logged and the previous counters stay on screen.
//!
//! The controller keeps the records of the last successful list render keyed
//! by id, which is what the edit modal is filled from.

use std::collections::HashMap;

use tracing::{debug, error, warn};

use crate::date;
use crate::edit::{ClickTarget, CloseReason, EditSession};
use crate::error::ApiError;
use crate::form::TodoForm;
use crate::service::TodoService;
use crate::shell::{Shell, UserAction, Visibility};
use crate::types::{Filter, TodoRecord};
use crate::view;

pub const VALIDATION_MESSAGE: &str = "할 일과 목표 날짜를 입력해주세요.";
pub const GENERIC_FAILURE_MESSAGE: &str = "오류가 발생했습니다.";
pub const DELETE_CONFIRM_MESSAGE: &str = "이 TODO를 삭제하시겠습니까?";
pub const DELETE_FAILED_MESSAGE: &str = "오류: TODO를 삭제할 수 없습니다.";
pub const EDIT_LOAD_FAILED_MESSAGE: &str = "TODO를 불러올 수 없습니다.";

pub struct AppController<S, D> {
    service: S,
    shell: D,
    filter: Filter,
    edit: EditSession,
    rendered: HashMap<String, TodoRecord>,
    visibility: Visibility,
}

impl<S: TodoService, D: Shell> AppController<S, D> {
    pub fn new(service: S, shell: D) -> Self {
        Self {
            service,
            shell,
            filter: Filter::All,
            edit: EditSession::Closed,
            rendered: HashMap::new(),
            visibility: Visibility::Visible,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn shell(&self) -> &D {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut D {
        &mut self.shell
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// The record rendered under `id` by the last successful list load.
    pub fn rendered(&self, id: &str) -> Option<&TodoRecord> {
        self.rendered.get(id)
    }

    /// Initial load: the full list, the counters, and tomorrow's date in the
    /// creation form.
    pub async fn start(&mut self) {
        self.filter = Filter::All;
        self.shell.activate_tab(self.filter);
        self.reload_list().await;
        self.refresh_stats().await;
        self.shell.set_create_date(&date::default_proposed_date());
    }

    pub async fn dispatch(&mut self, action: UserAction) {
        match action {
            UserAction::FilterSelected(filter) => self.on_filter_tab_selected(filter).await,
            UserAction::CreateSubmitted(form) => self.on_create_submit(form).await,
            UserAction::EditRequested(id) => self.on_edit_requested(&id),
            UserAction::EditSubmitted(form) => self.on_edit_submit(form).await,
            UserAction::EditDismissed(reason) => self.on_edit_dismissed(reason),
            UserAction::ModalClicked(target) => self.on_modal_clicked(target),
            UserAction::DeleteRequested(id) => self.on_delete_requested(&id).await,
            UserAction::VisibilityChanged(visibility) => {
                self.on_visibility_changed(visibility).await
            }
        }
    }

    /// Switch filters. Stats are global, so only the list reloads.
    pub async fn on_filter_tab_selected(&mut self, filter: Filter) {
        self.filter = filter;
        self.shell.activate_tab(filter);
        self.reload_list().await;
    }

    pub async fn on_create_submit(&mut self, form: TodoForm) {
        let Ok(payload) = form.validate() else {
            self.shell.alert(VALIDATION_MESSAGE);
            return;
        };

        match applied(self.service.create(&payload).await) {
            Ok(created) => {
                if let Some(created) = created {
                    debug!(id = %created.id, "todo created");
                }
                self.shell.reset_create_form();
                self.shell.set_create_date(&date::default_proposed_date());
                self.reload_list().await;
                self.refresh_stats().await;
            }
            Err(err) => self.report_failure("create", &err),
        }
    }

    /// Open the edit modal from the last rendered copy of `id`.
    pub fn on_edit_requested(&mut self, id: &str) {
        let Some(record) = self.rendered.get(id) else {
            warn!(id, "edit requested for a todo that is not rendered");
            self.shell.alert(EDIT_LOAD_FAILED_MESSAGE);
            return;
        };
        self.edit.open(record);
        if let Some(form) = self.edit.snapshot() {
            self.shell.open_edit_modal(form);
        }
    }

    pub async fn on_edit_submit(&mut self, form: TodoForm) {
        let Ok(payload) = form.validate() else {
            self.shell.alert(VALIDATION_MESSAGE);
            return;
        };
        let Some(id) = self.edit.editing_id().map(str::to_owned) else {
            warn!("edit submitted without an open edit session");
            return;
        };

        match applied(self.service.update(&id, &payload).await) {
            Ok(_) => {
                self.close_edit(CloseReason::Saved);
                self.reload_list().await;
                self.refresh_stats().await;
            }
            Err(err) => self.report_failure("update", &err),
        }
    }

    pub fn on_edit_dismissed(&mut self, reason: CloseReason) {
        self.close_edit(reason);
    }

    pub fn on_modal_clicked(&mut self, target: ClickTarget) {
        if target.closes_modal() {
            self.close_edit(CloseReason::Backdrop);
        }
    }

    /// Delete after the user confirms; a declined prompt sends nothing.
    pub async fn on_delete_requested(&mut self, id: &str) {
        if !self.shell.confirm(DELETE_CONFIRM_MESSAGE) {
            debug!(id, "delete declined");
            return;
        }

        match self.service.remove(id).await {
            Ok(()) => {
                self.reload_list().await;
                self.refresh_stats().await;
            }
            Err(err) if err.status().is_some() => {
                error!(id, error = %err, "delete rejected");
                self.shell.alert(DELETE_FAILED_MESSAGE);
            }
            Err(err) => {
                error!(id, error = %err, "delete failed");
                self.shell.alert(GENERIC_FAILURE_MESSAGE);
            }
        }
    }

    /// Reload list and stats when the page comes back from the background.
    pub async fn on_visibility_changed(&mut self, visibility: Visibility) {
        let regained =
            self.visibility == Visibility::Hidden && visibility == Visibility::Visible;
        self.visibility = visibility;
        if regained {
            self.reload_list().await;
            self.refresh_stats().await;
        }
    }

    fn close_edit(&mut self, reason: CloseReason) {
        self.edit.close(reason);
        self.shell.close_edit_modal();
    }

    async fn reload_list(&mut self) {
        match self.service.list(self.filter).await {
            Ok(records) => {
                self.shell.show_list(&view::render(&records));
                self.rendered = records
                    .into_iter()
                    .map(|record| (record.id.clone(), record))
                    .collect();
            }
            Err(err) => {
                error!(filter = self.filter.path_segment(), error = %err, "failed to load todos");
                self.rendered.clear();
                self.shell.show_list(&view::render_load_error());
            }
        }
    }

    async fn refresh_stats(&mut self) {
        match self.service.stats().await {
            Ok(stats) => self.shell.show_stats(&stats),
            Err(err) => warn!(error = %err, "failed to refresh stats"),
        }
    }

    fn report_failure(&mut self, operation: &str, err: &ApiError) {
        error!(operation, error = %err, "todo request failed");
        match err.rejection_message() {
            Some(message) => self.shell.alert(&format!("오류: {message}")),
            None => self.shell.alert(GENERIC_FAILURE_MESSAGE),
        }
    }
}

/// A 2xx whose body did not decode still means the mutation was applied.
fn applied<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::Deserialization(reason)) => {
            warn!(%reason, "mutation applied but its response body was unreadable");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
