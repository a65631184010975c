//! Assertions for the problem-details error contract.
//!
//! Works on raw response parts so it does not depend on backend types.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde_json::Value;

/// Assert an error response and return its parsed body.
///
/// Checks the status, the `application/problem+json` content type, the
/// `code`, and that the body `trace_id` equals the `x-trace-id` header.
pub async fn assert_problem_details<B>(
    resp: ServiceResponse<B>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) -> Value
where
    B: MessageBody,
{
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;
    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    )
}

pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) -> Value {
    assert_eq!(status, expected_status, "unexpected status");

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(content_type, "application/problem+json");

    let problem: Value =
        serde_json::from_slice(body).expect("body should be problem-details JSON");

    assert_eq!(problem["code"], expected_code);
    assert_eq!(problem["status"], expected_status.as_u16());
    assert!(problem["title"].is_string(), "title missing");
    assert!(problem["type"].is_string(), "type missing");

    let header_trace = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert_eq!(problem["trace_id"], header_trace, "trace id mismatch");

    if let Some(fragment) = expected_detail_contains {
        let detail = problem["detail"].as_str().unwrap_or_default();
        assert!(
            detail.contains(fragment),
            "detail {detail:?} does not contain {fragment:?}"
        );
    }

    problem
}
