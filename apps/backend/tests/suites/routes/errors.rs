// Error shape for extractor failures and unknown resources.

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use backend_test_support::problem_details::assert_problem_details;
use serde_json::json;

use crate::common::assert_trace_id_matches;
use crate::support::http::{post_json, test_state, trace_header};

#[actix_web::test]
async fn non_numeric_and_non_positive_ids_are_bad_requests() {
    let app = init_app!(test_state());

    for uri in ["/api/games/abc", "/api/games/0", "/api/games/-3/turn", "/api/players/x1"] {
        let resp = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
        assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None).await;
    }
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = init_app!(test_state());

    let req = TestRequest::post()
        .uri("/api/players")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, Some("JSON")).await;
}

#[actix_web::test]
async fn missing_field_is_a_bad_request() {
    let app = init_app!(test_state());

    let resp = test::call_service(&app, post_json("/api/games", json!({ "rules": "x" })).to_request()).await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None).await;
}

#[actix_web::test]
async fn unknown_game_is_not_found_with_matching_trace() {
    let app = init_app!(test_state());

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/games/77/history").to_request(),
    )
    .await;
    let header = trace_header(&resp);
    let problem = assert_problem_details(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND, Some("77")).await;
    assert_trace_id_matches(&problem, &header);
    assert_eq!(problem["type"], "https://uno.example/errors/GAME_NOT_FOUND");
}

#[actix_web::test]
async fn out_of_range_seat_cap_is_unprocessable() {
    let app = init_app!(test_state());

    let resp = test::call_service(
        &app,
        post_json("/api/games", json!({ "title": "t", "max_players": 1 })).to_request(),
    )
    .await;
    assert_problem_details(resp, "VALIDATION_ERROR", StatusCode::UNPROCESSABLE_ENTITY, Some("max_players")).await;
}
