use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::Card;
use crate::error::AppError;
use crate::extractors::{PlayerIdParam, ValidatedJson};
use crate::repos::Player;
use crate::services::game_flow::ChallengeOutcome;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RenameRequest {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ChallengeRequest {
    #[serde(default)]
    challenger_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct HandResponse {
    player_id: i64,
    cards: Vec<Card>,
}

#[derive(Debug, Serialize)]
struct DeclareResponse {
    player_id: i64,
    declared: bool,
}

/// POST /api/players
async fn register(
    body: ValidatedJson<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player = app_state.players.register(&body.name)?;
    Ok(HttpResponse::Created().json(player))
}

/// GET /api/players
async fn list(app_state: web::Data<AppState>) -> Result<web::Json<Vec<Player>>, AppError> {
    Ok(web::Json(app_state.players.list()?))
}

/// GET /api/players/{player_id}
async fn find(
    player_id: PlayerIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Player>, AppError> {
    Ok(web::Json(app_state.players.find(player_id.0)?))
}

/// PATCH /api/players/{player_id}
async fn rename(
    player_id: PlayerIdParam,
    body: ValidatedJson<RenameRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Player>, AppError> {
    Ok(web::Json(app_state.players.rename(player_id.0, &body.name)?))
}

/// DELETE /api/players/{player_id}
async fn delete(
    player_id: PlayerIdParam,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.flow.delete_player(player_id.0)?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/players/{player_id}/cards
async fn cards(
    player_id: PlayerIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<HandResponse>, AppError> {
    let cards = app_state.flow.hand_of(player_id.0)?;
    Ok(web::Json(HandResponse {
        player_id: player_id.0,
        cards,
    }))
}

/// POST /api/players/{player_id}/declare
async fn declare(
    player_id: PlayerIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<DeclareResponse>, AppError> {
    app_state.flow.declare_last_card(player_id.0)?;
    Ok(web::Json(DeclareResponse {
        player_id: player_id.0,
        declared: true,
    }))
}

/// POST /api/players/{player_id}/challenge
///
/// `{player_id}` is the challenged player.
async fn challenge(
    player_id: PlayerIdParam,
    body: ValidatedJson<ChallengeRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ChallengeOutcome>, AppError> {
    let outcome = app_state
        .flow
        .challenge(player_id.0, body.challenger_id)?;
    Ok(web::Json(outcome))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(register)),
    );
    cfg.service(
        web::resource("/{player_id}")
            .route(web::get().to(find))
            .route(web::patch().to(rename))
            .route(web::delete().to(delete)),
    );
    cfg.service(web::resource("/{player_id}/cards").route(web::get().to(cards)));
    cfg.service(web::resource("/{player_id}/declare").route(web::post().to(declare)));
    cfg.service(web::resource("/{player_id}/challenge").route(web::post().to(challenge)));
}
