//! `gyani init`: write a default config file.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use gyani_core::config::{save_config, Config};
use gyani_core::registry::MODELS;

/// Run the init command. Returns `true` if a new file was written.
///
/// An existing file is left untouched.
pub fn run(config_path: &Path) -> Result<bool> {
    println!();
    println!("{}", "📚 Gyani Setup".cyan().bold());
    println!();

    if config_path.exists() {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
        println!();
        return Ok(false);
    }

    // Plain defaults: keys from the environment must not end up on disk.
    save_config(&Config::default(), Some(config_path))
        .with_context(|| format!("failed to write config: {}", config_path.display()))?;
    println!(
        "  {} created config at {}",
        "✓".green(),
        config_path.display()
    );

    println!();
    println!("  Next, add your OpenRouter keys under {} or set:", "models.keys".bold());
    for spec in MODELS {
        println!("    {}", spec.env_key.dimmed());
    }
    println!();

    Ok(true)
}
