use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::rules::DRAW_COUNT;
use crate::domain::{Card, GameStatus, HistoryEntry};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{GameIdParam, ValidatedJson};
use crate::repos::{Game, Player};
use crate::services::game_flow::{
    DealOutcome, DrawOutcome, GameSnapshot, HandView, PlayOutcome,
};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateGameRequest {
    title: String,
    #[serde(default)]
    rules: Option<String>,
    #[serde(default)]
    max_players: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct UpdateGameRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    rules: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlayerRequest {
    player_id: i64,
}

#[derive(Debug, Deserialize)]
struct DealRequest {
    #[serde(default)]
    hand_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct PlayRequest {
    player_id: i64,
    card: String,
}

#[derive(Debug, Deserialize)]
struct DrawRequest {
    player_id: i64,
    #[serde(default)]
    count: Option<usize>,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    game_id: i64,
    status: GameStatus,
}

#[derive(Debug, Serialize)]
struct SeatsResponse {
    game_id: i64,
    players: Vec<String>,
}

#[derive(Debug, Serialize)]
struct LeaveResponse {
    player_id: i64,
    game_id: i64,
}

#[derive(Debug, Serialize)]
struct TurnResponse {
    game_id: i64,
    current_player: Option<String>,
}

#[derive(Debug, Serialize)]
struct TopCardResponse {
    game_id: i64,
    card: Option<Card>,
}

#[derive(Debug, Serialize)]
struct ScoresResponse {
    game_id: i64,
    scores: BTreeMap<String, i64>,
}

/// POST /api/games
async fn create_game(
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let game = app_state
        .flow
        .create_game(&body.title, body.rules, body.max_players)?;
    Ok(HttpResponse::Created().json(game))
}

/// GET /api/games
async fn list_games(app_state: web::Data<AppState>) -> Result<web::Json<Vec<Game>>, AppError> {
    Ok(web::Json(app_state.flow.list_games()?))
}

/// GET /api/games/{game_id}
async fn snapshot(
    game_id: GameIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameSnapshot>, AppError> {
    Ok(web::Json(app_state.flow.snapshot(game_id.0)?))
}

/// PATCH /api/games/{game_id}
async fn update_game(
    game_id: GameIdParam,
    body: ValidatedJson<UpdateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Game>, AppError> {
    let body = body.into_inner();
    Ok(web::Json(app_state.flow.update_game(
        game_id.0,
        body.title.as_deref(),
        body.rules,
    )?))
}

/// DELETE /api/games/{game_id}
async fn delete_game(
    game_id: GameIdParam,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if app_state.flow.delete_game(game_id.0)? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::not_found(
            ErrorCode::GameNotFound,
            format!("Game {} not found", game_id.0),
        ))
    }
}

/// GET /api/games/{game_id}/status
async fn status(
    game_id: GameIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<StatusResponse>, AppError> {
    Ok(web::Json(StatusResponse {
        game_id: game_id.0,
        status: app_state.flow.game_status(game_id.0)?,
    }))
}

/// GET /api/games/{game_id}/players
async fn players(
    game_id: GameIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<Player>>, AppError> {
    Ok(web::Json(app_state.flow.players_in_game(game_id.0)?))
}

/// POST /api/games/{game_id}/join
async fn join(
    game_id: GameIdParam,
    body: ValidatedJson<PlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<SeatsResponse>, AppError> {
    let players = app_state.flow.join_game(game_id.0, body.player_id)?;
    Ok(web::Json(SeatsResponse {
        game_id: game_id.0,
        players,
    }))
}

/// POST /api/games/leave
async fn leave(
    body: ValidatedJson<PlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<LeaveResponse>, AppError> {
    let game_id = app_state.flow.leave_game(body.player_id)?;
    Ok(web::Json(LeaveResponse {
        player_id: body.player_id,
        game_id,
    }))
}

/// POST /api/games/{game_id}/start
async fn start(
    game_id: GameIdParam,
    body: ValidatedJson<PlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Game>, AppError> {
    Ok(web::Json(app_state.flow.start_game(game_id.0, body.player_id)?))
}

/// POST /api/games/{game_id}/end
async fn end(
    game_id: GameIdParam,
    body: ValidatedJson<PlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Game>, AppError> {
    Ok(web::Json(app_state.flow.end_game(game_id.0, body.player_id)?))
}

/// POST /api/games/{game_id}/deal
async fn deal(
    game_id: GameIdParam,
    body: ValidatedJson<DealRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<DealOutcome>, AppError> {
    Ok(web::Json(app_state.flow.deal(game_id.0, body.hand_size)?))
}

/// GET /api/games/{game_id}/turn
async fn turn(
    game_id: GameIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TurnResponse>, AppError> {
    Ok(web::Json(TurnResponse {
        game_id: game_id.0,
        current_player: app_state.flow.current_turn(game_id.0)?,
    }))
}

/// GET /api/games/{game_id}/top-card
async fn top_card(
    game_id: GameIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<TopCardResponse>, AppError> {
    Ok(web::Json(TopCardResponse {
        game_id: game_id.0,
        card: app_state.flow.top_card(game_id.0)?,
    }))
}

/// GET /api/games/{game_id}/history
async fn history(
    game_id: GameIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<HistoryEntry>>, AppError> {
    Ok(web::Json(app_state.flow.history(game_id.0)?))
}

/// GET /api/games/{game_id}/hands
async fn hands(
    game_id: GameIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<HandView>>, AppError> {
    Ok(web::Json(app_state.flow.hands(game_id.0)?))
}

/// POST /api/games/{game_id}/play
async fn play(
    game_id: GameIdParam,
    body: ValidatedJson<PlayRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PlayOutcome>, AppError> {
    let card: Card = body.card.parse()?;
    Ok(web::Json(app_state.flow.play_card(game_id.0, body.player_id, card)?))
}

/// POST /api/games/{game_id}/draw
async fn draw(
    game_id: GameIdParam,
    body: ValidatedJson<DrawRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<DrawOutcome>, AppError> {
    let count = body.count.unwrap_or(DRAW_COUNT);
    Ok(web::Json(app_state.flow.buy_card(game_id.0, body.player_id, count)?))
}

/// GET /api/games/{game_id}/scores
async fn scores(
    game_id: GameIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScoresResponse>, AppError> {
    app_state.flow.game_status(game_id.0)?;
    Ok(web::Json(ScoresResponse {
        game_id: game_id.0,
        scores: app_state.scores.scores_for_game(game_id.0)?,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    );
    // Registered before `/{game_id}` so "leave" is never read as an id
    cfg.service(web::resource("/leave").route(web::post().to(leave)));
    cfg.service(
        web::resource("/{game_id}")
            .route(web::get().to(snapshot))
            .route(web::patch().to(update_game))
            .route(web::delete().to(delete_game)),
    );
    cfg.service(web::resource("/{game_id}/status").route(web::get().to(status)));
    cfg.service(web::resource("/{game_id}/players").route(web::get().to(players)));
    cfg.service(web::resource("/{game_id}/join").route(web::post().to(join)));
    cfg.service(web::resource("/{game_id}/start").route(web::post().to(start)));
    cfg.service(web::resource("/{game_id}/end").route(web::post().to(end)));
    cfg.service(web::resource("/{game_id}/deal").route(web::post().to(deal)));
    cfg.service(web::resource("/{game_id}/turn").route(web::get().to(turn)));
    cfg.service(web::resource("/{game_id}/top-card").route(web::get().to(top_card)));
    cfg.service(web::resource("/{game_id}/history").route(web::get().to(history)));
    cfg.service(web::resource("/{game_id}/hands").route(web::get().to(hands)));
    cfg.service(web::resource("/{game_id}/play").route(web::post().to(play)));
    cfg.service(web::resource("/{game_id}/draw").route(web::post().to(draw)));
    cfg.service(web::resource("/{game_id}/scores").route(web::get().to(scores)));
}
