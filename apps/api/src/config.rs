use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding `<display name>.json` profiles.
    pub profiles_dir: PathBuf,
    /// Directory holding `<prompt>.txt` prompt templates.
    pub prompts_dir: PathBuf,
    /// External layout engine. When unset, documents are returned as JSON trees.
    pub render_service_url: Option<String>,
    pub render_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            profiles_dir: PathBuf::from(env_or("PROFILES_DIR", "resumes")),
            prompts_dir: PathBuf::from(env_or("PROMPTS_DIR", "prompts")),
            render_service_url: std::env::var("RENDER_SERVICE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            render_timeout: Duration::from_secs(
                env_or("RENDER_TIMEOUT_SECS", "60")
                    .parse::<u64>()
                    .context("RENDER_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
