use actix_web::{web, App, HttpServer};
use uno_backend::config::engine::EngineConfig;
use uno_backend::middleware::request_trace::RequestTrace;
use uno_backend::routes;
use uno_backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;
    tracing::info!(
        host = %host,
        port,
        seeded = config.rng_seed.is_some(),
        "Starting Uno backend"
    );

    let data = web::Data::new(AppState::in_memory(config));

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
