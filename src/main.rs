use std::io;

use actix_cors::Cors;
use actix_web::{http::header, App, HttpServer};
use dotenvy::dotenv;
use tracing::info;
use tracing_actix_web::TracingLogger;

use kakeibo_be::app::{self, AppState};
use kakeibo_be::config::Settings;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings =
        Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Created once so every worker shares the same records
    let state = AppState::seeded(settings.id_allocation);

    info!(
        id_allocation = ?settings.id_allocation,
        "Starting server at http://{}:{}",
        settings.host,
        settings.port
    );

    let bind_addr = (settings.host.clone(), settings.port);

    HttpServer::new(move || {
        let settings = settings.clone();

        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                origin
                    .to_str()
                    .map(|origin| settings.is_origin_allowed(origin))
                    .unwrap_or(false)
            })
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            // Middleware (order matters: outer to inner)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(app::configure(state.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await
}
