//! Request builders and body helpers for route tests.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test::{self, TestRequest};
use serde_json::Value;
use uno_backend::{AppState, EngineConfig};

/// Fresh in-memory state with a fixed seed.
pub fn test_state() -> AppState {
    AppState::in_memory(EngineConfig::seeded(0x5eed_cafe))
}

pub fn post_json(uri: &str, body: Value) -> TestRequest {
    TestRequest::post().uri(uri).set_json(body)
}

/// Trace id echoed by the request middleware.
pub fn trace_header<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id should be ASCII")
        .to_string()
}

pub async fn json_body<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body should be JSON")
}
