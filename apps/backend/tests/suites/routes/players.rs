use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use serde_json::json;

use crate::support::http::{json_body, post_json, test_state};

#[actix_web::test]
async fn register_then_find_and_list() {
    let app = init_app!(test_state());

    let resp = test::call_service(
        &app,
        post_json("/api/players", json!({ "name": "  Ana " })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = json_body(resp).await;
    assert_eq!(created["name"], "Ana");
    assert!(created["game_id"].is_null());
    let id = created["id"].as_i64().unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/players/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["name"], "Ana");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/players").to_request()).await;
    let listed = json_body(resp).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn duplicate_name_conflicts_case_insensitively() {
    let app = init_app!(test_state());
    test::call_service(
        &app,
        post_json("/api/players", json!({ "name": "ana" })).to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        post_json("/api/players", json!({ "name": "ANA" })).to_request(),
    )
    .await;
    assert_problem_details(resp, "PLAYER_NAME_TAKEN", StatusCode::CONFLICT, None).await;
}

#[actix_web::test]
async fn blank_name_is_unprocessable() {
    let app = init_app!(test_state());
    let resp = test::call_service(
        &app,
        post_json("/api/players", json!({ "name": "   " })).to_request(),
    )
    .await;
    assert_problem_details(
        resp,
        "INVALID_PLAYER_NAME",
        StatusCode::UNPROCESSABLE_ENTITY,
        None,
    )
    .await;
}

#[actix_web::test]
async fn unknown_player_is_not_found() {
    let app = init_app!(test_state());
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/players/42").to_request(),
    )
    .await;
    assert_problem_details(resp, "PLAYER_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
}

#[actix_web::test]
async fn cards_of_a_player_outside_any_game() {
    let app = init_app!(test_state());
    let resp = test::call_service(
        &app,
        post_json("/api/players", json!({ "name": "solo" })).to_request(),
    )
    .await;
    let id = json_body(resp).await["id"].as_i64().unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/players/{id}/cards"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["cards"], json!([]));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/players/{id}/declare"))
            .to_request(),
    )
    .await;
    assert_problem_details(
        resp,
        "PLAYER_NOT_SEATED",
        StatusCode::UNPROCESSABLE_ENTITY,
        None,
    )
    .await;
}

#[actix_web::test]
async fn rename_then_delete() {
    let app = init_app!(test_state());
    let resp = test::call_service(
        &app,
        post_json("/api/players", json!({ "name": "ana" })).to_request(),
    )
    .await;
    let id = json_body(resp).await["id"].as_i64().unwrap();
    test::call_service(
        &app,
        post_json("/api/players", json!({ "name": "bo" })).to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/players/{id}"))
            .set_json(json!({ "name": "Bo" }))
            .to_request(),
    )
    .await;
    assert_problem_details(resp, "PLAYER_NAME_TAKEN", StatusCode::CONFLICT, None).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/players/{id}"))
            .set_json(json!({ "name": "anabel" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["name"], "anabel");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/players/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/players/{id}"))
            .to_request(),
    )
    .await;
    assert_problem_details(resp, "PLAYER_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
}
