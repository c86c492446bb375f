//! `gyani status`: show configuration and key status.
//!
//! Key values are never printed, only whether each one is set.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use gyani_core::config::load_config;
use gyani_core::registry::MODELS;

/// Run the status command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = load_config(Some(config_path));

    println!();
    println!("{}", "📚 Gyani Status".cyan().bold());
    println!();

    // Config
    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_path.exists() {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    println!("  {:<18} {}", "App:".bold(), config.app.name);
    println!("  {:<18} {}", "Default model:".bold(), config.models.default_model);
    println!("  {:<18} {}", "Endpoint:".bold(), config.openrouter.api_url);
    println!(
        "  {:<18} {}:{} {}",
        "Listen:".bold(),
        config.server.host,
        config.server.port,
        format!("({} CORS origins)", config.server.allowed_origins.len()).dimmed()
    );
    println!(
        "  {:<18} {}",
        "Humanizer:".bold(),
        if config.humanizer.enabled {
            "on".green().to_string()
        } else {
            "off".dimmed().to_string()
        }
    );
    println!(
        "  {:<18} {}",
        "Log file:".bold(),
        config.logging.file.as_deref().unwrap_or("(stderr only)")
    );

    // Keys
    println!();
    println!("  {}", "API keys:".bold());
    for spec in MODELS {
        let status = if config.has_key_for(spec.id) {
            format!("{} (key set)", "✓".green())
        } else {
            format!("{} {}", "·".dimmed(), format!("not configured ({})", spec.env_key).dimmed())
        };
        println!("    {:<26} {}", spec.display_name, status);
    }

    if let Err(e) = config.validate() {
        println!();
        println!("  {} {}", "!".yellow().bold(), e.to_string().yellow());
    }

    println!();

    Ok(())
}
