//! Shared CLI helpers: path expansion, response printing, banner.

use std::path::PathBuf;

use colored::Colorize;

use gyani_core::config::get_config_path;

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// `--config` if given, else `~/.gyani/config.json`.
pub fn resolve_config_path(arg: Option<&str>) -> PathBuf {
    arg.map(expand_tilde).unwrap_or_else(get_config_path)
}

/// Print a completion to stdout.
pub fn print_response(response: &str) {
    println!();
    println!("{}", "📚 Gyani".cyan().bold());
    if response.is_empty() {
        println!("{}", "(no response)".dimmed());
    } else {
        println!("{response}");
    }
    println!();
}

/// Print the banner shown when the server starts.
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", "📚 Gyani".cyan().bold(), version.dimmed());
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
