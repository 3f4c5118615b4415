//! Client core for the todo board.
//!
//! # Overview
//! Everything between the presentation shell and the remote todo service:
//! filter state, the edit modal's state machine, list/stats rendering, date
//! normalization, and the HTTP contract. The shell is a trait the host
//! implements; the service is reached through a pluggable `Transport`.
//!
//! # Design
//! - `TodoClient` only builds `HttpRequest` values and parses `HttpResponse`
//!   values (host-does-IO); `HttpTodoService` adds a `Transport` on top.
//! - `AppController` depends on the `TodoService` and `Shell` traits, so it
//!   can be driven in tests with in-memory fakes.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod date;
pub mod edit;
pub mod error;
pub mod form;
pub mod http;
pub mod service;
pub mod shell;
pub mod transport;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use controller::AppController;
pub use edit::{ClickTarget, CloseReason, EditSession};
pub use error::{ApiError, ConfigError, ValidationError};
pub use form::TodoForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use service::{HttpTodoService, TodoService};
pub use shell::{Shell, UserAction, Visibility};
pub use transport::ReqwestTransport;
pub use types::{Filter, Stats, TodoPayload, TodoRecord, TodoStatus};
