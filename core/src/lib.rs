//! Client core for the vocabulary service.
//!
//! # Overview
//! Keeps a list of vocabulary entries in sync with a remote HTTP API that
//! offers four calls: list all, list a page after an id, create, and delete.
//!
//! # Design
//! - `VocabClient` is stateless; it builds `HttpRequest` values and parses
//!   `HttpResponse` values. A [`Transport`] performs the I/O in between.
//! - `WordList` holds the entries and exposes optimistic transitions with
//!   explicit rollbacks, as pure functions over values.
//! - `WordListComponent` wires the two together: it mounts, submits,
//!   removes and pages, and renders a [`View`].
//! - Configuration is injected through `ClientConfig`; nothing reads globals.

pub mod client;
pub mod component;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;
pub mod words;

pub use client::VocabClient;
pub use component::WordListComponent;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use error::{ApiError, ComponentError, ConfigError, ReconcileError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{WordEntry, WordId};
pub use view::{FormView, RowView, View};
pub use words::{PendingCreate, PendingRemove, RowState, WordList, WordRow};
