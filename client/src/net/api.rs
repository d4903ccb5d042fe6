//! HTTP helper for the advisor backend.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning [`QueryError::Unavailable`] since queries
//! are only sent from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (send, body read, decode) comes back as a `QueryError` so the
//! caller can record one fixed bot message instead of panicking. Non-2xx
//! statuses are not failures here: the body is decoded like any other.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use advisor::{QueryError, QueryOutcome, QueryRequest};

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(stage: &str, detail: impl std::fmt::Display) -> QueryError {
    QueryError::Transport(format!("{stage}: {detail}"))
}

/// Send one query to `endpoint` (`{base_url}/query`) and decode the answer.
///
/// Exactly one attempt, no timeout beyond the browser's own.
///
/// # Errors
///
/// Returns [`QueryError::Transport`] if the request cannot be built, sent, or
/// its body read, and [`QueryError::Decode`] if the body is not a usable JSON
/// response.
pub async fn post_query(endpoint: &str, request: &QueryRequest) -> Result<QueryOutcome, QueryError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(request)
            .map_err(|e| transport_error("encode request", e))?
            .send()
            .await
            .map_err(|e| transport_error("send", e))?;
        let body = resp.binary().await.map_err(|e| transport_error("read body", e))?;
        advisor::decode_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, request);
        Err(QueryError::Unavailable)
    }
}
