use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use backend_test_support::problem_details::assert_problem_details;
use serde_json::{json, Value};

use crate::support::http::{json_body, post_json, test_state};

macro_rules! call {
    ($app:expr, $req:expr) => {
        test::call_service(&$app, $req.to_request()).await
    };
}

/// Call and parse a JSON body, asserting `expected` status.
macro_rules! call_json {
    ($app:expr, $req:expr, $expected:expr) => {{
        let resp = call!($app, $req);
        assert_eq!(resp.status(), $expected, "unexpected status");
        json_body(resp).await
    }};
}

fn id_of(body: &Value) -> i64 {
    body["id"].as_i64().expect("id field")
}

#[actix_web::test]
async fn full_round_over_http() {
    let app = init_app!(test_state());

    let ana = id_of(&call_json!(app, post_json("/api/players", json!({ "name": "ana" })), StatusCode::CREATED));
    let bo = id_of(&call_json!(app, post_json("/api/players", json!({ "name": "bo" })), StatusCode::CREATED));

    let game = call_json!(
        app,
        post_json("/api/games", json!({ "title": "lunch", "max_players": 4 })),
        StatusCode::CREATED
    );
    let game_id = id_of(&game);
    assert_eq!(game["status"], "stopped");

    call_json!(app, post_json(&format!("/api/games/{game_id}/join"), json!({ "player_id": ana })), StatusCode::OK);
    let seats = call_json!(
        app,
        post_json(&format!("/api/games/{game_id}/join"), json!({ "player_id": bo })),
        StatusCode::OK
    );
    assert_eq!(seats["players"], json!(["ana", "bo"]));

    let started = call_json!(
        app,
        post_json(&format!("/api/games/{game_id}/start"), json!({ "player_id": ana })),
        StatusCode::OK
    );
    assert_eq!(started["status"], "in_progress");
    assert_eq!(started["owner"], ana);

    let dealt = call_json!(
        app,
        post_json(&format!("/api/games/{game_id}/deal"), json!({ "hand_size": 3 })),
        StatusCode::OK
    );
    assert_eq!(dealt["hand_size"], 3);
    assert_eq!(dealt["hands"].as_array().map(Vec::len), Some(2));

    let turn = call_json!(
        app,
        TestRequest::get().uri(&format!("/api/games/{game_id}/turn")),
        StatusCode::OK
    );
    assert_eq!(turn["current_player"], "ana");

    let hand = call_json!(
        app,
        TestRequest::get().uri(&format!("/api/players/{ana}/cards")),
        StatusCode::OK
    );
    let cards = hand["cards"].as_array().cloned().unwrap_or_default();
    assert_eq!(cards.len(), 3);

    // Opening play is free, any held card goes
    let first = cards[0].as_str().unwrap().to_string();
    let played = call_json!(
        app,
        post_json(
            &format!("/api/games/{game_id}/play"),
            json!({ "player_id": ana, "card": first })
        ),
        StatusCode::OK
    );
    assert_eq!(played["card"], first.as_str());
    assert_eq!(played["next_player"], "ana");
    assert_eq!(played["remaining"], 2);

    let top = call_json!(
        app,
        TestRequest::get().uri(&format!("/api/games/{game_id}/top-card")),
        StatusCode::OK
    );
    assert_eq!(top["card"], first.as_str());

    let drew = call_json!(
        app,
        post_json(&format!("/api/games/{game_id}/draw"), json!({ "player_id": ana })),
        StatusCode::OK
    );
    assert_eq!(drew["cards"].as_array().map(Vec::len), Some(1));
    assert_eq!(drew["next_player"], "bo");

    let history = call_json!(
        app,
        TestRequest::get().uri(&format!("/api/games/{game_id}/history")),
        StatusCode::OK
    );
    let texts: Vec<&str> = history
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["text"].as_str())
        .collect();
    assert!(texts.contains(&format!("ana played {first}").as_str()));
    assert!(texts.iter().any(|t| t.starts_with("ana drew ")));

    let snapshot = call_json!(
        app,
        TestRequest::get().uri(&format!("/api/games/{game_id}")),
        StatusCode::OK
    );
    assert_eq!(snapshot["current_player"], "bo");
    assert_eq!(snapshot["direction"], "forward");
    assert_eq!(snapshot["hands"][0]["cards"].as_array().map(Vec::len), Some(3));

    let status = call_json!(
        app,
        TestRequest::get().uri(&format!("/api/games/{game_id}/status")),
        StatusCode::OK
    );
    assert_eq!(status["status"], "in_progress");

    let scores = call_json!(
        app,
        TestRequest::get().uri(&format!("/api/games/{game_id}/scores")),
        StatusCode::OK
    );
    assert_eq!(scores["scores"], json!({}));
}

#[actix_web::test]
async fn rule_rejections_map_to_problem_details() {
    let app = init_app!(test_state());
    let ana = id_of(&call_json!(app, post_json("/api/players", json!({ "name": "ana" })), StatusCode::CREATED));
    let bo = id_of(&call_json!(app, post_json("/api/players", json!({ "name": "bo" })), StatusCode::CREATED));
    let game_id = id_of(&call_json!(app, post_json("/api/games", json!({ "title": "t" })), StatusCode::CREATED));

    // Not started yet
    call_json!(app, post_json(&format!("/api/games/{game_id}/join"), json!({ "player_id": ana })), StatusCode::OK);
    let resp = call!(app, post_json(&format!("/api/games/{game_id}/start"), json!({ "player_id": ana })));
    assert_problem_details(resp, "INSUFFICIENT_PLAYERS", StatusCode::UNPROCESSABLE_ENTITY, None).await;

    let resp = call!(app, post_json(&format!("/api/games/{game_id}/draw"), json!({ "player_id": ana })));
    assert_problem_details(resp, "GAME_NOT_ACTIVE", StatusCode::CONFLICT, None).await;

    call_json!(app, post_json(&format!("/api/games/{game_id}/join"), json!({ "player_id": bo })), StatusCode::OK);
    call_json!(app, post_json(&format!("/api/games/{game_id}/start"), json!({ "player_id": ana })), StatusCode::OK);

    let resp = call!(app, post_json(&format!("/api/games/{game_id}/draw"), json!({ "player_id": bo })));
    assert_problem_details(resp, "NOT_YOUR_TURN", StatusCode::CONFLICT, Some("Expected player")).await;

    let resp = call!(
        app,
        post_json(&format!("/api/games/{game_id}/play"), json!({ "player_id": ana, "card": "purple 11" }))
    );
    assert_problem_details(resp, "PARSE_CARD", StatusCode::UNPROCESSABLE_ENTITY, None).await;

    let resp = call!(
        app,
        post_json(&format!("/api/games/{game_id}/play"), json!({ "player_id": ana, "card": "red 5" }))
    );
    assert_problem_details(resp, "CARD_NOT_OWNED", StatusCode::UNPROCESSABLE_ENTITY, None).await;

    let resp = call!(app, post_json(&format!("/api/games/{game_id}/end"), json!({ "player_id": bo })));
    assert_problem_details(resp, "NOT_GAME_OWNER", StatusCode::UNPROCESSABLE_ENTITY, None).await;

    let resp = call!(app, post_json(&format!("/api/games/{game_id}/join"), json!({ "player_id": bo })));
    assert_problem_details(resp, "GAME_ALREADY_STARTED", StatusCode::CONFLICT, None).await;

    let resp = call!(app, post_json(&format!("/api/players/{bo}/challenge"), json!({})));
    assert_problem_details(resp, "NOT_ELIGIBLE", StatusCode::UNPROCESSABLE_ENTITY, None).await;
}

#[actix_web::test]
async fn leave_route_is_not_read_as_a_game_id() {
    let app = init_app!(test_state());
    let ana = id_of(&call_json!(app, post_json("/api/players", json!({ "name": "ana" })), StatusCode::CREATED));
    let game_id = id_of(&call_json!(app, post_json("/api/games", json!({ "title": "t" })), StatusCode::CREATED));
    call_json!(app, post_json(&format!("/api/games/{game_id}/join"), json!({ "player_id": ana })), StatusCode::OK);

    let left = call_json!(app, post_json("/api/games/leave", json!({ "player_id": ana })), StatusCode::OK);
    assert_eq!(left["game_id"], game_id);

    let players = call_json!(
        app,
        TestRequest::get().uri(&format!("/api/games/{game_id}/players")),
        StatusCode::OK
    );
    assert_eq!(players, json!([]));
}

#[actix_web::test]
async fn delete_then_lookups_are_not_found() {
    let app = init_app!(test_state());
    let game_id = id_of(&call_json!(app, post_json("/api/games", json!({ "title": "t" })), StatusCode::CREATED));

    let listed = call_json!(app, TestRequest::get().uri("/api/games"), StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let resp = call!(app, TestRequest::delete().uri(&format!("/api/games/{game_id}")));
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = call!(app, TestRequest::get().uri(&format!("/api/games/{game_id}")));
    assert_problem_details(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND, None).await;

    let resp = call!(app, TestRequest::delete().uri(&format!("/api/games/{game_id}")));
    assert_problem_details(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
}

#[actix_web::test]
async fn patch_edits_a_stopped_game_only() {
    let app = init_app!(test_state());
    let ana = id_of(&call_json!(app, post_json("/api/players", json!({ "name": "ana" })), StatusCode::CREATED));
    let bo = id_of(&call_json!(app, post_json("/api/players", json!({ "name": "bo" })), StatusCode::CREATED));
    let game_id = id_of(&call_json!(app, post_json("/api/games", json!({ "title": "t" })), StatusCode::CREATED));

    let edited = call_json!(
        app,
        TestRequest::patch()
            .uri(&format!("/api/games/{game_id}"))
            .set_json(json!({ "title": "finals", "rules": "no stacking" })),
        StatusCode::OK
    );
    assert_eq!(edited["title"], "finals");
    assert_eq!(edited["rules"], "no stacking");

    call_json!(app, post_json(&format!("/api/games/{game_id}/join"), json!({ "player_id": ana })), StatusCode::OK);
    call_json!(app, post_json(&format!("/api/games/{game_id}/join"), json!({ "player_id": bo })), StatusCode::OK);
    call_json!(app, post_json(&format!("/api/games/{game_id}/start"), json!({ "player_id": ana })), StatusCode::OK);

    let resp = call!(
        app,
        TestRequest::patch()
            .uri(&format!("/api/games/{game_id}"))
            .set_json(json!({ "title": "too late" }))
    );
    assert_problem_details(resp, "GAME_ALREADY_STARTED", StatusCode::CONFLICT, None).await;
}
