//! The todo service as seen by the controller.
//!
//! # Design
//! `TodoService` is the seam the controller depends on, so controller tests
//! can inject an in-memory fake. `HttpTodoService` is the real implementation:
//! it pairs the stateless `TodoClient` with a `Transport` and performs one
//! build/execute/parse cycle per call.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::Transport;
use crate::transport::ReqwestTransport;
use crate::types::{Filter, Stats, TodoPayload, TodoRecord};

/// Remote todo operations. Each call is atomic from the caller's view.
#[async_trait]
pub trait TodoService: Send + Sync {
    async fn list(&self, filter: Filter) -> Result<Vec<TodoRecord>, ApiError>;

    async fn create(&self, payload: &TodoPayload) -> Result<TodoRecord, ApiError>;

    async fn update(&self, id: &str, payload: &TodoPayload) -> Result<TodoRecord, ApiError>;

    async fn remove(&self, id: &str) -> Result<(), ApiError>;

    async fn stats(&self) -> Result<Stats, ApiError>;
}

/// `TodoService` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTodoService<T = ReqwestTransport> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> HttpTodoService<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }
}

impl HttpTodoService<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.request_timeout_secs))?;
        Ok(Self::new(TodoClient::new(&config.base_url), transport))
    }
}

#[async_trait]
impl<T: Transport> TodoService for HttpTodoService<T> {
    async fn list(&self, filter: Filter) -> Result<Vec<TodoRecord>, ApiError> {
        debug!(filter = filter.path_segment(), "listing todos");
        let response = self.transport.execute(self.client.build_list(filter)).await?;
        self.client.parse_list(response)
    }

    async fn create(&self, payload: &TodoPayload) -> Result<TodoRecord, ApiError> {
        debug!("creating todo");
        let request = self.client.build_create(payload)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create(response)
    }

    async fn update(&self, id: &str, payload: &TodoPayload) -> Result<TodoRecord, ApiError> {
        debug!(id, "updating todo");
        let request = self.client.build_update(id, payload)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update(response)
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        debug!(id, "removing todo");
        let response = self.transport.execute(self.client.build_remove(id)).await?;
        self.client.parse_remove(response)
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        let response = self.transport.execute(self.client.build_stats()).await?;
        self.client.parse_stats(response)
    }
}
