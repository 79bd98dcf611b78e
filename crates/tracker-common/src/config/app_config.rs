//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub admission: AdmissionConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations at startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

/// JWT validation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_jwt_issuer")]
    pub issuer: String,
    #[serde(default = "default_jwt_audience")]
    pub audience: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
}

/// Tuning for the capacity-checked accept path
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AdmissionConfig {
    /// Total attempts when the accept transaction hits a transient failure
    #[serde(default = "default_admission_max_attempts")]
    pub max_attempts: u32,
    /// Linear backoff step between attempts, in milliseconds
    #[serde(default = "default_admission_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// How long the accept transaction waits for the event lock, in milliseconds
    #[serde(default = "default_admission_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
}

impl AdmissionConfig {
    #[must_use]
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    #[must_use]
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_admission_max_attempts(),
            retry_backoff_ms: default_admission_retry_backoff_ms(),
            lock_timeout_ms: default_admission_lock_timeout_ms(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "event-tracker".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}

fn default_jwt_issuer() -> String {
    "event-tracker-api".to_string()
}

fn default_jwt_audience() -> String {
    "event-tracker-client".to_string()
}

fn default_access_token_expiry() -> i64 {
    900 // 15 minutes
}

fn default_admission_max_attempts() -> u32 {
    3
}

fn default_admission_retry_backoff_ms() -> u64 {
    25
}

fn default_admission_lock_timeout_ms() -> u64 {
    5000
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Read an optional variable, failing only when it is set but unparsable
fn parse_var<T: FromStr>(key: &'static str, default: impl FnOnce() -> T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        Err(_) => Ok(default()),
    }
}

fn required_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingVar(key))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or
    /// a variable holds a value of the wrong type
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env_name = env::var("APP_ENV").unwrap_or_default();
        let admission = AdmissionConfig {
            max_attempts: parse_var("ADMISSION_MAX_ATTEMPTS", default_admission_max_attempts)?,
            retry_backoff_ms: parse_var(
                "ADMISSION_RETRY_BACKOFF_MS",
                default_admission_retry_backoff_ms,
            )?,
            lock_timeout_ms: parse_var(
                "ADMISSION_LOCK_TIMEOUT_MS",
                default_admission_lock_timeout_ms,
            )?,
        };
        if admission.max_attempts == 0 {
            return Err(ConfigError::InvalidValue(
                "ADMISSION_MAX_ATTEMPTS",
                "0".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: Environment::parse(&env_name).unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: required_var("API_PORT").and_then(|raw| {
                    raw.trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("API_PORT", raw))
                })?,
            },
            database: DatabaseConfig {
                url: required_var("DATABASE_URL")?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                run_migrations: parse_var("DATABASE_RUN_MIGRATIONS", default_run_migrations)?,
                migrations_dir: env::var("DATABASE_MIGRATIONS_DIR")
                    .unwrap_or_else(|_| default_migrations_dir()),
            },
            jwt: JwtConfig {
                secret: required_var("JWT_SECRET")?,
                issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| default_jwt_issuer()),
                audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| default_jwt_audience()),
                access_token_expiry: parse_var(
                    "JWT_ACCESS_TOKEN_EXPIRY",
                    default_access_token_expiry,
                )?,
            },
            admission,
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                )?,
                burst: parse_var("RATE_LIMIT_BURST", default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
