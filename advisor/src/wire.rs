//! Wire schema for the backend `/query` endpoint.
//!
//! DESIGN
//! ======
//! The backend answers with one loosely shaped JSON object whose fields
//! double as a discriminator (`message` vs `error` vs neither). The body is
//! decoded exactly once here into [`QueryOutcome`], so the session and the
//! views only ever match on a tagged variant.
//!
//! ERROR HANDLING
//! ==============
//! Only bodies that cannot be rendered at all become [`QueryError::Decode`]:
//! not JSON, JSON `null`, or a `qdrant` answer whose `score` is not a number.
//! Text fields of the wrong type read as absent, so a well-formed object with
//! nothing usable in it is [`QueryOutcome::Empty`], which is a normal exchange
//! rather than a failure.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Bot text shown when the exchange failed before a body could be read.
pub const CONNECTION_FAILED_TEXT: &str = "❌ Error connecting to backend.";
/// Bot text shown when the backend answered with neither `message` nor `error`.
pub const NO_RESULTS_TEXT: &str = "❌ No results found.";
/// Prefix for errors reported by the backend itself.
pub const BACKEND_ERROR_PREFIX: &str = "❌ Error: ";
/// Suffix appended to answers fetched from the live finance source.
pub const LIVE_SOURCE_SUFFIX: &str = "\n\n(Fetched from live finance API)";
/// Rendered in place of a missing semantic-search score.
pub const MISSING_SCORE_PLACEHOLDER: &str = "undefined";

/// Request body for `POST /query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Raw response body as the backend sends it.
///
/// Unknown fields (the backend also returns a `parsed_query` object) are
/// ignored. `message`, `source` and `error` are kept only when they are
/// non-empty strings; `score` stays raw until an answer needs it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub source: Option<String>,
    #[serde(default)]
    pub score: Option<Value>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub error: Option<String>,
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Where an answer came from, per the backend's `source` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerSource {
    /// `"qdrant"`: best match from the vector index.
    SemanticSearch,
    /// `"live"`: fetched from the live finance API.
    Live,
    /// Any other tag; rendered without a suffix.
    Other(String),
}

impl AnswerSource {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "qdrant" => Self::SemanticSearch,
            "live" => Self::Live,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// A backend response decoded into exactly one shape.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryOutcome {
    Answer { text: String, source: Option<AnswerSource>, score: Option<f64> },
    BackendError { text: String },
    Empty,
}

impl QueryOutcome {
    /// Transcript text for this outcome.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Answer { text, source: Some(AnswerSource::SemanticSearch), score } => {
                format!("{text}\n\n(Qdrant match score: {})", format_score(*score))
            }
            Self::Answer { text, source: Some(AnswerSource::Live), .. } => format!("{text}{LIVE_SOURCE_SUFFIX}"),
            Self::Answer { text, .. } => text.clone(),
            Self::BackendError { text } => format!("{BACKEND_ERROR_PREFIX}{text}"),
            Self::Empty => NO_RESULTS_TEXT.to_owned(),
        }
    }
}

impl QueryResponse {
    /// Collapse the field-presence encoding into a [`QueryOutcome`].
    ///
    /// Empty strings count as absent, so `{"message": "", "error": "x"}` is a
    /// backend error.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Decode`] for a `qdrant` answer whose `score` is
    /// present but not a number. Other answers ignore a non-numeric `score`.
    pub fn into_outcome(self) -> Result<QueryOutcome, QueryError> {
        let Some(text) = self.message else {
            return Ok(match self.error {
                Some(text) => QueryOutcome::BackendError { text },
                None => QueryOutcome::Empty,
            });
        };
        let source = self.source.as_deref().map(AnswerSource::from_tag);
        let score = match (&source, self.score) {
            (_, None | Some(Value::Null)) => None,
            (_, Some(Value::Number(n))) => n.as_f64(),
            (Some(AnswerSource::SemanticSearch), Some(other)) => {
                return Err(QueryError::Decode(serde::de::Error::custom(format!(
                    "qdrant score is not a number: {other}"
                ))));
            }
            (_, Some(_)) => None,
        };
        Ok(QueryOutcome::Answer { text, source, score })
    }
}

/// Failure of a `/query` exchange. The detail is for logs only; users see
/// [`CONNECTION_FAILED_TEXT`].
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The request never produced a readable response.
    #[error("transport failed: {0}")]
    Transport(String),
    /// The response body could not be interpreted.
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    /// No HTTP transport in this build (server-side render).
    #[error("query transport unavailable")]
    Unavailable,
}

/// Decode a raw `/query` response body.
///
/// # Errors
///
/// Returns [`QueryError::Decode`] when the body is not JSON, is JSON `null`,
/// or is a `qdrant` answer with a non-numeric `score`.
pub fn decode_response(body: &[u8]) -> Result<QueryOutcome, QueryError> {
    let value: Value = serde_json::from_slice(body)?;
    match value {
        Value::Null => Err(QueryError::Decode(serde::de::Error::custom("null response body"))),
        Value::Object(_) => {
            let raw: QueryResponse = serde_json::from_value(value)?;
            raw.into_outcome()
        }
        _ => Ok(QueryOutcome::Empty),
    }
}

/// Bot text for a finished exchange, successful or not.
#[must_use]
pub fn outcome_text(result: &Result<QueryOutcome, QueryError>) -> String {
    match result {
        Ok(outcome) => outcome.display_text(),
        Err(_) => CONNECTION_FAILED_TEXT.to_owned(),
    }
}

fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| MISSING_SCORE_PLACEHOLDER.to_owned(), to_fixed_2)
}

/// Two-decimal rendering with exact midpoints rounded away from zero.
///
/// `{:.2}` rounds on the exact binary value, which matches except at exact
/// midpoints, where it picks the even digit. A double sits exactly between two
/// hundredths only when it is an odd multiple of 1/8 (0.125, 0.375, ...); for
/// those `score * 100.0` is exact and `round` goes away from zero. Negative
/// zero prints unsigned.
fn to_fixed_2(score: f64) -> String {
    if score == 0.0 {
        return "0.00".to_owned();
    }
    let eighths = score * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (score * 100.0).round() / 100.0);
    }
    format!("{score:.2}")
}
