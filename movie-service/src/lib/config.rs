use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    /// Directory served for requests no route matches.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Token signing settings. The secret has no default and must be supplied.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiration_days")]
    pub expiration_days: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_days", &self.expiration_days)
            .finish()
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_expiration_days() -> i64 {
    auth::DEFAULT_TOKEN_TTL_DAYS
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config: Self = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that deserialize but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let days = self.jwt.expiration_days;
        if !(1..=auth::MAX_TOKEN_TTL_DAYS).contains(&days) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_days must be between 1 and {}, got {}",
                auth::MAX_TOKEN_TTL_DAYS,
                days
            )));
        }
        Ok(())
    }
}
