//! Gyani CLI: entry point.
//!
//! # Commands
//!
//! - `gyani serve [--host H] [--port P]`: run the HTTP backend
//! - `gyani ask -p PROMPT [-m MODEL] [--raw]`: single-shot completion
//! - `gyani status`: show configuration and key status
//! - `gyani init`: write a default config file
//!
//! Every command accepts `--config PATH` (default `~/.gyani/config.json`).
//! A `.env` file in the working directory is loaded first; real environment
//! variables win over it.

mod helpers;
mod init;
mod logging;
mod serve;
mod status;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use gyani_core::config::load_config;
use gyani_core::utils::truncate_string;
use gyani_humanizer::Humanizer;
use gyani_providers::Completer;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// 📚 Gyani: academic assistant backend over OpenRouter
#[derive(Parser)]
#[command(name = "gyani", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP backend
    Serve {
        /// Config file path
        #[arg(short, long)]
        config: Option<String>,

        /// Listen address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Ask a single question and print the answer
    Ask {
        /// The prompt to send
        #[arg(short, long)]
        prompt: String,

        /// Model id (defaults to `models.defaultModel`)
        #[arg(short, long)]
        model: Option<String>,

        /// Print the model output without the rewriting pass
        #[arg(long, default_value_t = false)]
        raw: bool,

        /// Config file path
        #[arg(short, long)]
        config: Option<String>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Show configuration and key status
    Status {
        /// Config file path
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Write a default config file
    Init {
        /// Config file path
        #[arg(short, long)]
        config: Option<String>,
    },
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            logs,
        } => {
            let path = helpers::resolve_config_path(config.as_deref());
            serve::run(&path, host, port, logs).await
        }
        Commands::Ask {
            prompt,
            model,
            raw,
            config,
            logs,
        } => {
            let path = helpers::resolve_config_path(config.as_deref());
            run_ask(&path, &prompt, model.as_deref(), raw, logs).await
        }
        Commands::Status { config } => {
            status::run(&helpers::resolve_config_path(config.as_deref()))
        }
        Commands::Init { config } => {
            init::run(&helpers::resolve_config_path(config.as_deref())).map(|_| ())
        }
    }
}

// ─────────────────────────────────────────────
// Ask command
// ─────────────────────────────────────────────

async fn run_ask(
    config_path: &Path,
    prompt: &str,
    model: Option<&str>,
    raw: bool,
    logs: bool,
) -> Result<()> {
    let config = load_config(Some(config_path));
    logging::init_logging(logs || config.app.debug, false, None)?;

    if prompt.trim().is_empty() {
        anyhow::bail!("Prompt cannot be empty");
    }

    let humanizer = Humanizer::new(config.humanizer.enabled && !raw);
    let completer =
        Completer::from_config(Arc::new(config)).context("failed to build HTTP client")?;

    info!(
        prompt = %truncate_string(prompt, 50),
        model = model.unwrap_or("default"),
        "Asking"
    );
    let text = completer
        .request_completion(prompt, model)
        .await
        .context("completion failed")?;

    helpers::print_response(&humanizer.apply(&text));
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
