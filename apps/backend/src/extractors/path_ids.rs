//! Positive integer ids taken from route path segments.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

fn parse_id(req: &HttpRequest, segment: &str) -> Result<i64, AppError> {
    let raw = req.match_info().get(segment).ok_or_else(|| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Missing {segment} parameter"))
    })?;

    let id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid {segment}: {raw}"))
    })?;

    if id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::BadRequest,
            format!("{segment} must be positive, got: {id}"),
        ));
    }
    Ok(id)
}

/// Game id from the `{game_id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct GameIdParam(pub i64);

impl FromRequest for GameIdParam {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id(req, "game_id").map(GameIdParam))
    }
}

/// Player id from the `{player_id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct PlayerIdParam(pub i64);

impl FromRequest for PlayerIdParam {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id(req, "player_id").map(PlayerIdParam))
    }
}

/// Score entry id from the `{score_id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct ScoreIdParam(pub i64);

impl FromRequest for ScoreIdParam {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id(req, "score_id").map(ScoreIdParam))
    }
}
