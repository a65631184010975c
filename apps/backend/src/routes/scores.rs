use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::{ScoreIdParam, ValidatedJson};
use crate::repos::ScoreEntry;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct RecordScoreRequest {
    player_id: i64,
    game_id: i64,
    points: i32,
}

/// GET /api/scores
async fn list(app_state: web::Data<AppState>) -> Result<web::Json<Vec<ScoreEntry>>, AppError> {
    Ok(web::Json(app_state.scores.list_scores()?))
}

/// POST /api/scores
async fn record(
    body: ValidatedJson<RecordScoreRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let entry = app_state
        .scores
        .record_score(body.player_id, body.game_id, body.points)?;
    Ok(HttpResponse::Created().json(entry))
}

/// GET /api/scores/{score_id}
async fn find(
    score_id: ScoreIdParam,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScoreEntry>, AppError> {
    Ok(web::Json(app_state.scores.find_score(score_id.0)?))
}

/// DELETE /api/scores/{score_id}
async fn delete(
    score_id: ScoreIdParam,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.scores.delete_score(score_id.0)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(record)),
    );
    cfg.service(
        web::resource("/{score_id}")
            .route(web::get().to(find))
            .route(web::delete().to(delete)),
    );
}
