//! In-memory todo service implementing the API the board client consumes.
//!
//! Todos keep insertion order. Status labels, filter segments and error
//! bodies follow the production service so client integration tests exercise
//! the same contract.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoStatus {
    #[serde(rename = "예정")]
    Scheduled,
    #[serde(rename = "진행중")]
    InProgress,
    #[serde(rename = "완료")]
    Completed,
}

impl TodoStatus {
    pub fn label(self) -> &'static str {
        match self {
            TodoStatus::Scheduled => "예정",
            TodoStatus::InProgress => "진행중",
            TodoStatus::Completed => "완료",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [TodoStatus::Scheduled, TodoStatus::InProgress, TodoStatus::Completed]
            .into_iter()
            .find(|status| status.label() == label)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub content: String,
    pub target_date: NaiveDateTime,
    pub status: TodoStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub content: Option<String>,
    pub target_date: Option<String>,
    pub status: Option<String>,
}

/// Absent fields are left unchanged.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub content: Option<String>,
    pub target_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// A rejection carried back to the caller as `{"error": ...}`.
#[derive(Debug, PartialEq, Eq)]
pub struct ServiceError {
    pub status: StatusCode,
    pub message: String,
}

impl ServiceError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(id: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("ID '{id}'인 TODO를 찾을 수 없습니다"),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

#[derive(Debug, Default)]
pub struct Store {
    todos: Vec<Todo>,
}

impl Store {
    /// The three todos the demo service starts with.
    pub fn with_samples() -> Self {
        let mut store = Self::default();
        let samples = [
            ("Python Flask 학습", (2026, 1, 20), TodoStatus::InProgress),
            ("TODO 앱 완성", (2026, 1, 30), TodoStatus::Scheduled),
            ("테스트 코드 작성", (2026, 1, 15), TodoStatus::Completed),
        ];
        for (content, (y, m, d), status) in samples {
            if let Some(target_date) =
                NaiveDate::from_ymd_opt(y, m, d).and_then(|date| date.and_hms_opt(0, 0, 0))
            {
                store.insert(content.to_string(), target_date, status);
            }
        }
        store
    }

    pub fn list(&self, status: Option<TodoStatus>) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| status.map_or(true, |status| todo.status == status))
            .cloned()
            .collect()
    }

    pub fn create(&mut self, input: CreateTodo) -> Result<Todo, ServiceError> {
        let (Some(content), Some(target_date)) = (input.content, input.target_date) else {
            return Err(ServiceError::bad_request("필수 필드가 없습니다"));
        };
        let target_date = parse_target_date(&target_date)?;
        let content = validate_content(&content)?;
        let status = match input.status {
            Some(label) => parse_status(&label)?,
            None => TodoStatus::Scheduled,
        };
        Ok(self.insert(content, target_date, status))
    }

    pub fn update(&mut self, id: &str, input: UpdateTodo) -> Result<Todo, ServiceError> {
        let target_date = input.target_date.as_deref().map(parse_target_date).transpose()?;
        let content = input.content.as_deref().map(validate_content).transpose()?;
        let status = input.status.as_deref().map(parse_status).transpose()?;

        let todo = self.find_mut(id).ok_or_else(|| ServiceError::not_found(id))?;
        if let Some(content) = content {
            todo.content = content;
        }
        if let Some(target_date) = target_date {
            todo.target_date = target_date;
        }
        if let Some(status) = status {
            todo.status = status;
        }
        todo.updated_at = now();
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), ServiceError> {
        let position = Uuid::parse_str(id)
            .ok()
            .and_then(|uuid| self.todos.iter().position(|todo| todo.id == uuid))
            .ok_or_else(|| ServiceError::not_found(id))?;
        self.todos.remove(position);
        Ok(())
    }

    pub fn stats(&self) -> StatsResponse {
        let count = |status| self.todos.iter().filter(|todo| todo.status == status).count();
        StatsResponse {
            total: self.todos.len(),
            scheduled: count(TodoStatus::Scheduled),
            in_progress: count(TodoStatus::InProgress),
            completed: count(TodoStatus::Completed),
        }
    }

    fn insert(&mut self, content: String, target_date: NaiveDateTime, status: TodoStatus) -> Todo {
        let created_at = now();
        let todo = Todo {
            id: Uuid::new_v4(),
            content,
            target_date,
            status,
            created_at,
            updated_at: created_at,
        };
        self.todos.push(todo.clone());
        todo
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Todo> {
        let uuid = Uuid::parse_str(id).ok()?;
        self.todos.iter_mut().find(|todo| todo.id == uuid)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn validate_content(raw: &str) -> Result<String, ServiceError> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(ServiceError::bad_request("TODO 내용은 비울 수 없습니다."));
    }
    Ok(content.to_string())
}

fn parse_status(label: &str) -> Result<TodoStatus, ServiceError> {
    TodoStatus::from_label(label)
        .ok_or_else(|| ServiceError::bad_request(format!("입력 오류: 알 수 없는 상태 '{label}'")))
}

/// Accepts the ISO shapes browsers and the board client submit.
fn parse_target_date(raw: &str) -> Result<NaiveDateTime, ServiceError> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }
    [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ]
    .iter()
    .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    .or_else(|| {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
    .ok_or_else(|| ServiceError::bad_request(format!("입력 오류: 잘못된 날짜 형식 '{raw}'")))
}

/// Map a `/api/todos/{filter}` segment to the status it selects.
fn filter_status(segment: &str) -> Result<Option<TodoStatus>, ServiceError> {
    match segment {
        "all" => Ok(None),
        "scheduled" => Ok(Some(TodoStatus::Scheduled)),
        "in-progress" => Ok(Some(TodoStatus::InProgress)),
        "completed" => Ok(Some(TodoStatus::Completed)),
        label => TodoStatus::from_label(label)
            .map(Some)
            .ok_or_else(|| ServiceError::bad_request("유효하지 않은 상태")),
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::default())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/api/todos", get(list_all).post(create_todo))
        .route(
            "/api/todos/{key}",
            get(list_by_filter).put(update_todo).delete(delete_todo),
        )
        .route("/api/stats", get(stats))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Store::default()).await
}

pub async fn run_with(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

async fn list_all(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list(None))
}

async fn list_by_filter(
    State(db): State<Db>,
    Path(filter): Path<String>,
) -> Result<Json<Vec<Todo>>, ServiceError> {
    let status = filter_status(&filter)?;
    Ok(Json(db.read().await.list(status)))
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ServiceError> {
    let todo = db.write().await.create(input)?;
    tracing::info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ServiceError> {
    let todo = db.write().await.update(&id, input)?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ServiceError> {
    db.write().await.delete(&id)?;
    tracing::info!(id = %id, "todo deleted");
    Ok(Json(MessageResponse {
        message: "TODO가 삭제되었습니다".to_string(),
    }))
}

async fn stats(State(db): State<Db>) -> Json<StatsResponse> {
    Json(db.read().await.stats())
}
