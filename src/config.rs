use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::generation::GenerationSettings;

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Process-wide settings, read once at start-up and handed to the router.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub generation: GenerationSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env file if present

        let api_key = get_env_opt(API_KEY_VAR);

        let port = get_env_or_default("PORT", &DEFAULT_PORT.to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;
        let timeout_secs = get_env_or_default(
            "GENERATION_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            host: "0.0.0.0".to_string(),
            port,
            static_dir: PathBuf::from(get_env_or_default("STATIC_DIR", "static")),
            generation: GenerationSettings {
                api_key,
                timeout: Duration::from_secs(timeout_secs),
                ..GenerationSettings::default()
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    get_env_opt(key).unwrap_or_else(|| default.to_string())
}
