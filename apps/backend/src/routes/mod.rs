use actix_web::web;

pub mod games;
pub mod health;
pub mod players;
pub mod scores;

/// Register every route. Used by `main.rs` and by route tests alike.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Player routes: /api/players/**
    cfg.service(web::scope("/api/players").configure(players::configure_routes));

    // Game routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));

    // Score ledger routes: /api/scores/**
    cfg.service(web::scope("/api/scores").configure(scores::configure_routes));
}
