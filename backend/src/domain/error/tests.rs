//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> TraceId {
    TRACE_ID.parse().expect("fixture is a valid UUID")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_in_scope(trace_id: TraceId) {
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_without_missing_trace() {
    let value = serde_json::to_value(Error::invalid_request("bad")).expect("serialise");
    assert_eq!(value, json!({"code": "invalid_request", "message": "bad"}));
}

#[rstest]
fn serialises_trace_id_when_present() {
    let value = serde_json::to_value(Error::internal("boom").with_trace_id(TRACE_ID))
        .expect("serialise");
    assert_eq!(value.get("traceId").and_then(Value::as_str), Some(TRACE_ID));
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::service_unavailable("store offline").to_string(), "store offline");
}

#[rstest]
#[case(Error::service_unavailable("server selection timeout: db0:27017"), "Service temporarily unavailable")]
#[case(Error::internal("product repository error: bad document"), "Internal server error")]
#[case(Error::invalid_request("invalid JSON body: EOF"), "invalid JSON body: EOF")]
fn redaction_hides_infrastructure_detail(#[case] error: Error, #[case] expected: &str) {
    let redacted = error.clone().with_trace_id(TRACE_ID).redacted();

    assert_eq!(redacted.code(), error.code());
    assert_eq!(redacted.message(), expected);
    assert_eq!(redacted.trace_id(), Some(TRACE_ID));
}
