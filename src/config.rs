//! Application configuration.
//!
//! Server settings are layered the same way throughout: defaults, then an
//! optional YAML file, then `COMPOSER_`-prefixed environment variables, then
//! explicit CLI flags. Chat pipeline settings come from the environment
//! only (`LLM_BASE_URL`, `LLM_MODEL`, `LLM_API_KEY`), loaded once at
//! startup.

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use url::Url;

use crate::llm::LlmSettings;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Host to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,
}

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub chat: ChatConfig,
}

/// HTTP server settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Chat pipeline behavior settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// System prompt installed on every new session.
    pub system_prompt: String,
    /// Idle minutes before a session is evicted.
    pub session_timeout_minutes: u64,
}

impl AppConfig {
    /// Load configuration from CLI args, environment, and optional file.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Load configuration from an explicit argument list.
    ///
    /// Split out from [`AppConfig::load`] so tests can drive the CLI layer
    /// without spawning a subprocess.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("chat.system_prompt", "You are a helpful assistant.")?
            .set_default("chat.session_timeout_minutes", 30)?;

        // Optional config file: explicit flag/env first, then ./config.yaml.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else {
            builder = builder.add_source(File::with_name("config").required(false));
        }

        // Environment variables, e.g. COMPOSER_SERVER__PORT=8000.
        builder = builder.add_source(
            Environment::with_prefix("COMPOSER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags win over everything else.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}

/// Load chat endpoint settings from the environment.
///
/// `LLM_BASE_URL` and `LLM_MODEL` are required; `LLM_API_KEY` is optional
/// for endpoints that do not authenticate (local runtimes).
pub fn load_llm_settings() -> Result<LlmSettings, String> {
    let base_url = env::var("LLM_BASE_URL")
        .map_err(|_| "Missing required env var: LLM_BASE_URL".to_string())?;
    if base_url.trim().is_empty() {
        return Err("LLM_BASE_URL cannot be empty".to_string());
    }
    Url::parse(&base_url).map_err(|e| format!("LLM_BASE_URL is not a valid URL: {e}"))?;

    let model =
        env::var("LLM_MODEL").map_err(|_| "Missing required env var: LLM_MODEL".to_string())?;
    if model.trim().is_empty() {
        return Err("LLM_MODEL cannot be empty".to_string());
    }

    let api_key = env::var("LLM_API_KEY").ok().filter(|s| !s.trim().is_empty());

    Ok(LlmSettings {
        base_url,
        api_key,
        model,
    })
}
