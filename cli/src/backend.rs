//! `reqwest` transport for the advisor `/query` endpoint.
//!
//! One POST per query, no retries, no client-side timeout. The HTTP status is
//! logged but not interpreted; the body is decoded whatever the status.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use advisor::{BackendConfig, QueryError, QueryOutcome, QueryRequest};

pub struct QueryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl QueryClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self { http: reqwest::Client::new(), endpoint: config.query_endpoint() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one query and decode the answer.
    ///
    /// # Errors
    ///
    /// [`QueryError::Transport`] when the request fails or the body cannot be
    /// read; [`QueryError::Decode`] when the body is not a usable response.
    pub async fn send(&self, request: &QueryRequest) -> Result<QueryOutcome, QueryError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        tracing::debug!(status = response.status().as_u16(), "query answered");

        let body = response.bytes().await.map_err(|e| QueryError::Transport(e.to_string()))?;
        advisor::decode_response(&body)
    }
}
