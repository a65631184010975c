use actix_web::test;

use crate::support::http::{json_body, test_state, trace_header};

#[actix_web::test]
async fn health_reports_ok_with_trace_header() {
    let app = init_app!(test_state());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.status().is_success());
    let trace = trace_header(&resp);
    assert!(uuid::Uuid::parse_str(&trace).is_ok(), "trace id {trace:?}");

    let body = json_body(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["active_sessions"], 0);
    assert!(body["app_version"].is_string());
}

#[actix_web::test]
async fn each_request_gets_its_own_trace_id() {
    let app = init_app!(test_state());

    let first = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let second = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_ne!(trace_header(&first), trace_header(&second));
}
