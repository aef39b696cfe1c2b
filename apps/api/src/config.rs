use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::llm_client::{huggingface, openai};

/// Which text-generation backend serves recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    OpenAi,
    HuggingFace,
}

impl FromStr for AiProvider {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(AiProvider::OpenAi),
            "huggingface" | "hf" => Ok(AiProvider::HuggingFace),
            other => bail!("AI_PROVIDER must be 'openai' or 'huggingface', got '{other}'"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: AiProvider,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub ai: AiConfig,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            jwt_secret: require_env("JWT_SECRET")?,
            ai: ai_from_env()?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn ai_from_env() -> Result<AiConfig> {
    let provider: AiProvider = std::env::var("AI_PROVIDER")
        .unwrap_or_else(|_| "openai".to_string())
        .parse()?;

    let (api_key, model) = match provider {
        AiProvider::OpenAi => (
            require_env("OPENAI_API_KEY")?,
            env_or("OPENAI_MODEL", openai::DEFAULT_MODEL),
        ),
        AiProvider::HuggingFace => (
            require_env("HUGGINGFACE_API_KEY")?,
            env_or("HUGGINGFACE_MODEL", huggingface::DEFAULT_MODEL),
        ),
    };

    let timeout_secs = std::env::var("AI_TIMEOUT_SECS")
        .unwrap_or_else(|_| "60".to_string())
        .parse::<u64>()
        .context("AI_TIMEOUT_SECS must be a whole number of seconds")?;

    Ok(AiConfig {
        provider,
        api_key,
        model,
        timeout_secs,
    })
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
