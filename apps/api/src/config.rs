use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Which generation engine serves `/api/generate`.
/// The two engines are alternatives, not layers — one is picked at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorBackend {
    /// Hosted chat-completion endpoint (requires OPENAI_API_KEY).
    Remote,
    /// Deterministic/random template tables, no network.
    Local,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub generator_backend: GeneratorBackend,
    pub openai_api_key: Option<String>,
    /// Directory holding the persisted key/value store (usage, entitlement).
    pub data_dir: PathBuf,
    /// Dev-override billing backend: grants purchases without a platform.
    pub billing_dev_grant: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();

        let generator_backend = match std::env::var("GENERATOR_BACKEND").as_deref() {
            Ok("remote") => GeneratorBackend::Remote,
            Ok("local") => GeneratorBackend::Local,
            Ok(other) => bail!("GENERATOR_BACKEND must be 'remote' or 'local', got '{other}'"),
            // Default: remote when a key is configured, local otherwise.
            Err(_) => {
                if openai_api_key.is_some() {
                    GeneratorBackend::Remote
                } else {
                    GeneratorBackend::Local
                }
            }
        };

        if generator_backend == GeneratorBackend::Remote && openai_api_key.is_none() {
            bail!("OPENAI_API_KEY is required when GENERATOR_BACKEND=remote");
        }

        Ok(Config {
            generator_backend,
            openai_api_key,
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            billing_dev_grant: std::env::var("BILLING_DEV_GRANT")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
