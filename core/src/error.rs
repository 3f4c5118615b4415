//! Error types for the todo board client.
//!
//! # Design
//! Service failures fall into two tiers. `Network` means the request never
//! produced a response. `Rejected` and `Status` mean the service answered
//! with a non-success status; only `Rejected` carries a message, taken from
//! the service's JSON `error` field. Body (de)serialization problems get
//! their own variants so they are not mistaken for either tier.
//! `Deserialization` is only produced after a 2xx, so the request itself
//! was applied.
//!
//! Form validation happens before any request is built and has its own type.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods, transports and services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not complete (connect, DNS, timeout, reset).
    #[error("network failure: {0}")]
    Network(String),

    /// The service returned a non-2xx status with a JSON `error` message.
    #[error("HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The service returned a non-2xx status and no usable `error` field
    /// (empty body, HTML error page, unrelated JSON).
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// A 2xx response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// The non-success status the service answered with, if it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } | ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The service-supplied message, if the service rejected the request.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// A create or edit form that must not reach the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("content is empty")]
    EmptyContent,

    #[error("target date is missing")]
    MissingDate,
}

/// Errors while loading `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
