//! Stateless HTTP request builder and response parser for the vocabulary API.
//!
//! # Design
//! `VocabClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The plain `fetch_words` / `add_word` / ...
//! methods chain build, [`Transport::execute`] and parse for callers that
//! don't need the split.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{CreateEntry, WordEntry, WordId};

#[derive(Debug, Clone)]
pub struct VocabClient {
    base_url: String,
}

impl VocabClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `ClientConfig` has already normalized the URL.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_fetch_words(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/get-words", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Page of at most `count` entries positioned after `id`.
    pub fn build_fetch_words_by_id(&self, id: WordId, count: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/get-words-after/{id}/{count}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The body never contains `id`, even if `entry` has one.
    pub fn build_add_word(&self, entry: &WordEntry) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&CreateEntry::from(entry))
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/create-entry", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_remove_word(&self, id: WordId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/delete-word/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_fetch_words(&self, response: HttpResponse) -> Result<Vec<WordEntry>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_fetch_words_by_id(&self, response: HttpResponse) -> Result<Vec<WordEntry>, ApiError> {
        self.parse_fetch_words(response)
    }

    pub fn parse_add_word(&self, response: HttpResponse) -> Result<WordEntry, ApiError> {
        check_status(&response)?;
        let entry: WordEntry =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        if !entry.is_persisted() {
            return Err(ApiError::Deserialization(
                "created entry has no id".to_string(),
            ));
        }
        Ok(entry)
    }

    pub fn parse_remove_word(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn fetch_words(&self, transport: &impl Transport) -> Result<Vec<WordEntry>, ApiError> {
        let response = execute(transport, self.build_fetch_words())?;
        self.parse_fetch_words(response)
    }

    pub fn fetch_words_by_id(
        &self,
        transport: &impl Transport,
        id: WordId,
        count: u32,
    ) -> Result<Vec<WordEntry>, ApiError> {
        let response = execute(transport, self.build_fetch_words_by_id(id, count))?;
        self.parse_fetch_words_by_id(response)
    }

    pub fn add_word(&self, transport: &impl Transport, entry: &WordEntry) -> Result<WordEntry, ApiError> {
        let response = execute(transport, self.build_add_word(entry)?)?;
        self.parse_add_word(response)
    }

    pub fn remove_word(&self, transport: &impl Transport, id: WordId) -> Result<(), ApiError> {
        let response = execute(transport, self.build_remove_word(id))?;
        self.parse_remove_word(response)
    }
}

fn execute(transport: &impl Transport, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    tracing::trace!(method = request.method.as_str(), path = %request.path, "sending request");
    let response = transport.execute(request)?;
    tracing::trace!(status = response.status, "received response");
    Ok(response)
}

/// Map non-2xx status codes to `ApiError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
