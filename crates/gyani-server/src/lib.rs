//! HTTP surface for Gyani.
//!
//! - [`routes`]: handlers and the JSON error mapping
//! - [`state::AppState`]: config, completer and humanizer shared by every worker
//! - `cors`: origin allow-list from `server.allowedOrigins`

mod cors;
pub mod routes;
pub mod state;

use actix_web::{web, App, HttpServer};
use tracing::info;

pub use cors::{build_cors, check_origins};
pub use routes::configure;
pub use state::AppState;

/// Bind `server.host:server.port` and serve until shutdown.
pub async fn run(state: AppState) -> std::io::Result<()> {
    let host = state.config.server.host.clone();
    let port = state.config.server.port;
    let origins = state.config.server.allowed_origins.clone();
    let data = web::Data::new(state);

    info!(host = %host, port, origins = origins.len(), "Starting HTTP server");

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&origins))
            .app_data(data.clone())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
