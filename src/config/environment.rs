use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Keys that must be present for the bot to start
const REQUIRED_KEYS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("Invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Tokens and destination chat, read once at startup
#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_period_secs: u64,
    pub http_timeout_secs: u64,
    pub initial_watermark: i64,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Every missing credential is collected before failing so the operator
    /// sees all absent keys in one log line.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| present(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let credentials = Credentials {
            practicum_token: present("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: present("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: present("TELEGRAM_CHAT_ID").unwrap_or_default(),
        };

        let endpoint = present("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let telegram_api_url = present("TELEGRAM_API_URL")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let retry_period_secs = parse_or(&present, "RETRY_PERIOD_SECS", DEFAULT_RETRY_PERIOD_SECS)?;
        if retry_period_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "RETRY_PERIOD_SECS",
                message: "must be greater than zero".to_string(),
            });
        }
        let http_timeout_secs = parse_or(&present, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;
        let initial_watermark = parse_or(&present, "INITIAL_WATERMARK", 0i64)?;

        Ok(Self {
            credentials,
            endpoint,
            telegram_api_url,
            retry_period_secs,
            http_timeout_secs,
            initial_watermark,
            log_file: present("LOG_FILE").map(PathBuf::from),
        })
    }

    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

/// Log file location, read ahead of the full configuration so that a
/// configuration failure still lands in the file.
pub fn log_file_from_env() -> Option<PathBuf> {
    env::var("LOG_FILE")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

fn parse_or<T, F>(present: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match present(key) {
        Some(val) => val.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}
