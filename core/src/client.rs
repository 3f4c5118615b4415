//! Stateless HTTP request builder and response parser for the todo service.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The round-trip in between belongs to a `Transport`, keeping this module
//! deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorBody, Filter, Stats, TodoPayload, TodoRecord};

/// Synchronous, stateless client for the todo service API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self, filter: Filter) -> HttpRequest {
        self.bodyless(
            HttpMethod::Get,
            format!("{}/api/todos/{}", self.base_url, filter.path_segment()),
        )
    }

    pub fn build_create(&self, payload: &TodoPayload) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, format!("{}/api/todos", self.base_url), payload)
    }

    pub fn build_update(&self, id: &str, payload: &TodoPayload) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, self.item_url(id), payload)
    }

    pub fn build_remove(&self, id: &str) -> HttpRequest {
        self.bodyless(HttpMethod::Delete, self.item_url(id))
    }

    pub fn build_stats(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, format!("{}/api/stats", self.base_url))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<TodoRecord>, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<TodoRecord, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<TodoRecord, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    /// Any 2xx counts as removed; the body is ignored.
    pub fn parse_remove(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_stats(&self, response: HttpResponse) -> Result<Stats, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/api/todos/{}", self.base_url, urlencoding::encode(id))
    }

    fn bodyless(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map non-success status codes to `ApiError::Rejected` when the body has a
/// JSON `error` field, `ApiError::Status` otherwise. Raw bodies never become
/// messages.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let status = response.status;
    Err(match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) => ApiError::Rejected {
            status,
            message: body.error,
        },
        Err(_) => ApiError::Status { status },
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoStatus;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:5000")
    }

    fn payload() -> TodoPayload {
        TodoPayload {
            content: "Buy milk".to_string(),
            target_date: "2026-02-15T10:00".to_string(),
            status: TodoStatus::Scheduled,
        }
    }

    const RECORD: &str = r#"{"id":"6f1c","content":"Buy milk","target_date":"2026-02-15T10:00:00","status":"예정"}"#;

    #[test]
    fn build_list_uses_filter_segment() {
        let req = client().build_list(Filter::InProgress);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/api/todos/in-progress");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_produces_json_request() {
        let req = client().build_create(&payload()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5000/api/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["content"], "Buy milk");
        assert_eq!(body["target_date"], "2026-02-15T10:00");
        assert_eq!(body["status"], "예정");
    }

    #[test]
    fn build_update_targets_item() {
        let req = client().build_update("6f1c", &payload()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:5000/api/todos/6f1c");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_remove_encodes_opaque_id() {
        let req = client().build_remove("a b/c");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:5000/api/todos/a%20b%2Fc");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_stats_produces_correct_request() {
        let req = client().build_stats();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/api/stats");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:5000/");
        let req = client.build_stats();
        assert_eq!(req.path, "http://localhost:5000/api/stats");
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse::new(200, format!("[{RECORD}]"));
        let todos = client().parse_list(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].content, "Buy milk");
    }

    #[test]
    fn parse_list_empty_is_not_an_error() {
        let todos = client().parse_list(HttpResponse::new(200, "[]")).unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn parse_create_accepts_any_2xx() {
        let todo = client().parse_create(HttpResponse::new(201, RECORD)).unwrap();
        assert_eq!(todo.id, "6f1c");
        let todo = client().parse_create(HttpResponse::new(200, RECORD)).unwrap();
        assert_eq!(todo.status, "예정");
    }

    #[test]
    fn parse_create_rejection_uses_error_field() {
        let response = HttpResponse::new(400, r#"{"error":"필수 필드가 없습니다"}"#);
        let err = client().parse_create(response).unwrap_err();
        match err {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "필수 필드가 없습니다");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_update_html_error_page_carries_no_message() {
        let response = HttpResponse::new(502, "<html><body>Bad Gateway</body></html>");
        let err = client().parse_update(response).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502 });
        assert_eq!(err.rejection_message(), None);
    }

    #[test]
    fn json_without_error_field_carries_no_message() {
        let response = HttpResponse::new(500, r#"{"detail":"boom"}"#);
        let err = client().parse_create(response).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500 });
    }

    #[test]
    fn parse_remove_rejection_without_body() {
        let err = client().parse_remove(HttpResponse::new(404, "")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.rejection_message(), None);
    }

    #[test]
    fn parse_remove_ignores_body() {
        let response = HttpResponse::new(200, r#"{"message":"TODO가 삭제되었습니다"}"#);
        assert!(client().parse_remove(response).is_ok());
        assert!(client().parse_remove(HttpResponse::new(204, "")).is_ok());
    }

    #[test]
    fn parse_stats_success() {
        let response = HttpResponse::new(
            200,
            r#"{"total":5,"scheduled":2,"in_progress":1,"completed":2}"#,
        );
        let stats = client().parse_stats(response).unwrap();
        assert_eq!(
            stats,
            Stats {
                total: 5,
                scheduled: 2,
                in_progress: 1,
                completed: 2
            }
        );
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client().parse_list(HttpResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
