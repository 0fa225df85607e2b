//! Error types for the vocabulary client and component.
//!
//! # Design
//! `ApiError` separates "never reached the server" (`Network`) from "server
//! answered with a non-2xx status" (`Http`). Both are propagated unchanged by
//! `VocabClient`; the component decides how to react.

use thiserror::Error;

/// Errors produced by `VocabClient` and transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Invalid client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    #[error("base URL must start with http:// or https://, got {0:?}")]
    UnsupportedScheme(String),

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// A draft entry was rejected before any request was sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("word must not be empty")]
    EmptyWord,
}

/// The server's reply to a create could not be matched to the pending row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("created entry has no id")]
    MissingId,

    #[error("pending row no longer in the list")]
    UnknownRow,
}

/// Errors surfaced by `WordListComponent` operations.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}
