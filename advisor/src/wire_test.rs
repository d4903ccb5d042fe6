use super::*;

fn decode(json: &str) -> QueryOutcome {
    decode_response(json.as_bytes()).expect("decode should succeed")
}

// =============================================================
// Display text
// =============================================================

#[test]
fn qdrant_answer_appends_score_to_two_decimals() {
    let outcome = decode(r#"{"message":"Buy low","source":"qdrant","score":0.8765}"#);
    assert_eq!(outcome.display_text(), "Buy low\n\n(Qdrant match score: 0.88)");
}

#[test]
fn qdrant_answer_without_score_renders_placeholder() {
    let outcome = decode(r#"{"message":"x","source":"qdrant"}"#);
    assert_eq!(outcome.display_text(), "x\n\n(Qdrant match score: undefined)");

    let outcome = decode(r#"{"message":"x","source":"qdrant","score":null}"#);
    assert_eq!(outcome.display_text(), "x\n\n(Qdrant match score: undefined)");
}

#[test]
fn qdrant_score_midpoints_round_up() {
    let text = |score: f64| {
        QueryOutcome::Answer { text: "x".to_owned(), source: Some(AnswerSource::SemanticSearch), score: Some(score) }
            .display_text()
    };
    assert_eq!(text(0.125), "x\n\n(Qdrant match score: 0.13)");
    assert_eq!(text(0.625), "x\n\n(Qdrant match score: 0.63)");
    assert_eq!(text(-0.125), "x\n\n(Qdrant match score: -0.13)");
    assert_eq!(text(1.0), "x\n\n(Qdrant match score: 1.00)");
    assert_eq!(text(-0.0), "x\n\n(Qdrant match score: 0.00)");
}

#[test]
fn qdrant_score_near_midpoint_uses_binary_value() {
    // 0.615 is stored just below the midpoint, 0.135 just above.
    let outcome = decode(r#"{"message":"x","source":"qdrant","score":0.615}"#);
    assert_eq!(outcome.display_text(), "x\n\n(Qdrant match score: 0.61)");
    let outcome = decode(r#"{"message":"x","source":"qdrant","score":0.135}"#);
    assert_eq!(outcome.display_text(), "x\n\n(Qdrant match score: 0.14)");
}

#[test]
fn live_answer_appends_live_suffix() {
    let outcome = decode(r#"{"message":"Rates rose","source":"live"}"#);
    assert_eq!(outcome.display_text(), "Rates rose\n\n(Fetched from live finance API)");
}

#[test]
fn unknown_or_missing_source_has_no_suffix() {
    assert_eq!(decode(r#"{"message":"plain","source":"cache"}"#).display_text(), "plain");
    assert_eq!(decode(r#"{"message":"plain"}"#).display_text(), "plain");
}

#[test]
fn backend_error_is_prefixed() {
    assert_eq!(decode(r#"{"error":"rate limited"}"#).display_text(), "❌ Error: rate limited");
}

#[test]
fn empty_object_means_no_results() {
    assert_eq!(decode("{}").display_text(), "❌ No results found.");
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn message_wins_over_error() {
    let outcome = decode(r#"{"message":"ok","error":"ignored"}"#);
    assert!(matches!(outcome, QueryOutcome::Answer { ref text, .. } if text == "ok"));
}

#[test]
fn empty_message_falls_through_to_error() {
    let outcome = decode(r#"{"message":"","error":"boom"}"#);
    assert_eq!(outcome, QueryOutcome::BackendError { text: "boom".to_owned() });
}

#[test]
fn empty_error_means_no_results() {
    assert_eq!(decode(r#"{"error":""}"#), QueryOutcome::Empty);
}

#[test]
fn extra_backend_fields_are_ignored() {
    let outcome = decode(
        r#"{"message":"m","source":"live","score":null,"parsed_query":{"stocks_mentioned":["AAPL"],"date_range":"none","if_vector_or_live":"live"}}"#,
    );
    assert_eq!(
        outcome,
        QueryOutcome::Answer { text: "m".to_owned(), source: Some(AnswerSource::Live), score: None }
    );
}

#[test]
fn non_object_json_means_no_results() {
    assert_eq!(decode("[]"), QueryOutcome::Empty);
    assert_eq!(decode(r#""text""#), QueryOutcome::Empty);
    assert_eq!(decode("42"), QueryOutcome::Empty);
}

#[test]
fn null_body_is_a_decode_error() {
    let err = decode_response(b"null").expect_err("null should fail");
    assert!(matches!(err, QueryError::Decode(_)));
}

#[test]
fn non_json_body_is_a_decode_error() {
    let err = decode_response(b"<html>502 Bad Gateway</html>").expect_err("html should fail");
    assert!(matches!(err, QueryError::Decode(_)));
}

#[test]
fn wrongly_typed_score_is_a_decode_error() {
    let err = decode_response(br#"{"message":"m","source":"qdrant","score":"high"}"#).expect_err("should fail");
    assert!(matches!(err, QueryError::Decode(_)));
}

#[test]
fn wrongly_typed_source_means_no_results() {
    assert_eq!(decode(r#"{"source":5}"#).display_text(), "❌ No results found.");
}

#[test]
fn error_with_wrongly_typed_score_is_still_reported() {
    let outcome = decode(r#"{"error":"rate limited","score":"high"}"#);
    assert_eq!(outcome.display_text(), "❌ Error: rate limited");
}

#[test]
fn live_answer_ignores_wrongly_typed_score() {
    let outcome = decode(r#"{"message":"Rates rose","source":"live","score":"n/a"}"#);
    assert_eq!(outcome.display_text(), "Rates rose\n\n(Fetched from live finance API)");
}

#[test]
fn non_string_text_fields_read_as_absent() {
    assert_eq!(decode(r#"{"message":42,"error":"boom"}"#), QueryOutcome::BackendError { text: "boom".to_owned() });
    assert_eq!(decode(r#"{"error":{"code":500}}"#), QueryOutcome::Empty);
    assert_eq!(
        decode(r#"{"message":"m","source":["qdrant"]}"#),
        QueryOutcome::Answer { text: "m".to_owned(), source: None, score: None }
    );
}

#[test]
fn source_tags_map_to_variants() {
    assert_eq!(AnswerSource::from_tag("qdrant"), AnswerSource::SemanticSearch);
    assert_eq!(AnswerSource::from_tag("live"), AnswerSource::Live);
    assert_eq!(AnswerSource::from_tag("Qdrant"), AnswerSource::Other("Qdrant".to_owned()));
}

// =============================================================
// Request + failure text
// =============================================================

#[test]
fn request_serializes_query_field() {
    let req = QueryRequest { query: "  AAPL price? ".to_owned() };
    let json = serde_json::to_value(&req).expect("serialize");
    assert_eq!(json, serde_json::json!({ "query": "  AAPL price? " }));
}

#[test]
fn failed_exchange_uses_fixed_text() {
    let result: Result<QueryOutcome, QueryError> = Err(QueryError::Transport("connection refused".to_owned()));
    assert_eq!(outcome_text(&result), "❌ Error connecting to backend.");
    assert_eq!(outcome_text(&Err(QueryError::Unavailable)), CONNECTION_FAILED_TEXT);
}
