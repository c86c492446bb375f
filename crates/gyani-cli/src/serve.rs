//! `gyani serve`: validate keys, then run the HTTP server.
//!
//! Startup sequence:
//! 1. Load config, apply `--host` / `--port`
//! 2. Initialize logging (stderr + optional file)
//! 3. Refuse to start unless every known model has a key and every CORS
//!    origin parses
//! 4. Build the completer and shared state
//! 5. Serve until Ctrl+C

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use gyani_core::config::load_config;
use gyani_providers::Completer;
use gyani_server::AppState;

use crate::helpers;
use crate::logging::init_logging;

pub async fn run(
    config_path: &Path,
    host: Option<String>,
    port: Option<u16>,
    logs: bool,
) -> Result<()> {
    let mut config = load_config(Some(config_path));
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let log_file = config.logging.file.as_deref().map(helpers::expand_tilde);
    init_logging(logs || config.app.debug, true, log_file.as_deref())?;

    config.validate().context("refusing to start")?;
    gyani_server::check_origins(&config.server.allowed_origins).context("refusing to start")?;

    helpers::print_banner();
    println!(
        "  Listening on http://{}:{}",
        config.server.host, config.server.port
    );
    println!();

    let config = Arc::new(config);
    let completer =
        Completer::from_config(config.clone()).context("failed to build HTTP client")?;
    let state = AppState::new(config.clone(), completer);

    info!(
        app = %config.app.name,
        default_model = %config.models.default_model,
        humanizer = config.humanizer.enabled,
        "Starting backend"
    );

    gyani_server::run(state).await.with_context(|| {
        format!(
            "server failed on {}:{}",
            config.server.host, config.server.port
        )
    })?;

    info!("Server stopped");
    Ok(())
}
