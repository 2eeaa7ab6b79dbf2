//! # configs
//!
//! Process configuration, read once at startup from `.env` and the
//! environment. Every key has a default so the site starts with no setup.

use std::path::PathBuf;

use config::{Config, Environment};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

/// Used when `ADMIN_KEY` is not set.
pub const FALLBACK_ADMIN_KEY: &str = "jaxelricweb";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug)]
pub struct Settings {
    pub admin_key: SecretString,
    /// True when `admin_key` is [`FALLBACK_ADMIN_KEY`]
    pub admin_key_is_fallback: bool,
    /// sqlx SQLite URL
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// SPA bundle served for every non-API path
    pub static_dir: PathBuf,
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
}

#[derive(Deserialize)]
struct RawSettings {
    admin_key: Option<String>,
    database_url: String,
    host: String,
    port: u16,
    static_dir: PathBuf,
    max_body_bytes: usize,
    log_format: LogFormat,
}

impl Settings {
    /// Loads `.env` (if present) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env(Environment::default())
    }

    pub fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let raw: RawSettings = Config::builder()
            .set_default("database_url", "sqlite:portfolio.db")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000_i64)?
            .set_default("static_dir", "dist")?
            .set_default("max_body_bytes", 50_i64 * 1024 * 1024)?
            .set_default("log_format", "text")?
            .add_source(env)
            .build()?
            .try_deserialize()?;

        let (admin_key, admin_key_is_fallback) = match raw.admin_key {
            Some(key) if !key.is_empty() => (key, false),
            _ => (FALLBACK_ADMIN_KEY.to_string(), true),
        };

        Ok(Self {
            admin_key: SecretString::from(admin_key),
            admin_key_is_fallback,
            database_url: raw.database_url,
            host: raw.host,
            port: raw.port,
            static_dir: raw.static_dir,
            max_body_bytes: raw.max_body_bytes,
            log_format: raw.log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
