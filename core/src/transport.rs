//! The I/O seam between `VocabClient` and the network.
//!
//! # Design
//! A transport executes one `HttpRequest` and hands back the raw
//! `HttpResponse`. It reports only failures that prevented a response from
//! arriving (`ApiError::Network`); non-2xx statuses are returned as data so
//! the client stays the single place that interprets them.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::blocking::UreqTransport;

#[cfg(feature = "ureq")]
mod blocking {
    use ureq::{Agent, RequestBuilder};

    use super::Transport;
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Blocking transport backed by a ureq agent.
    ///
    /// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
    /// responses come back as data rather than `Err`.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            let agent = Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
        for (key, value) in headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder
    }

    impl Transport for UreqTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let HttpRequest {
                method,
                path,
                headers,
                body,
            } = request;

            let result = match (method, body) {
                (HttpMethod::Get, _) => with_headers(self.agent.get(&path), &headers).call(),
                (HttpMethod::Delete, _) => with_headers(self.agent.delete(&path), &headers).call(),
                (HttpMethod::Post, Some(body)) => {
                    with_headers(self.agent.post(&path), &headers).send(body.as_bytes())
                }
                (HttpMethod::Post, None) => with_headers(self.agent.post(&path), &headers).send_empty(),
            };
            let mut response = result.map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| ApiError::Network(e.to_string()))?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
