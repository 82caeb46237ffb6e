//! Process-wide configuration.
//!
//! Built once in `main.rs` from the environment (optionally seeded by a `.env`
//! file) and shared read-only with every handler as `web::Data<AppConfig>`.
//!
//! | Variable           | Default                | Meaning                               |
//! |--------------------|------------------------|---------------------------------------|
//! | `API_TOKEN`        | `default_secret_token` | shared secret for `/api/generate`     |
//! | `PORT`             | `5050`                 | listen port on all interfaces         |
//! | `MAX_UPLOAD_BYTES` | `5242880`              | cap on uploaded file and form bodies  |
//! | `MAX_BATCH_LINES`  | `1000`                 | lines per batch, `0` disables the cap |

use log::{info, warn};
use std::str::FromStr;

pub const DEFAULT_API_TOKEN: &str = "default_secret_token";
pub const DEFAULT_PORT: u16 = 5050;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_MAX_BATCH_LINES: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_token: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    /// `None` means unlimited.
    pub max_batch_lines: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: DEFAULT_API_TOKEN.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_batch_lines: Some(DEFAULT_MAX_BATCH_LINES),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so tests do not
    /// have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup("API_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_TOKEN.to_string());
        if api_token == DEFAULT_API_TOKEN {
            warn!("API endpoint is protected by the default token; set API_TOKEN in production");
        }

        let max_batch_lines = match parse_var(&lookup, "MAX_BATCH_LINES", DEFAULT_MAX_BATCH_LINES)? {
            0 => None,
            n => Some(n),
        };

        Ok(Self {
            api_token,
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            max_upload_bytes: parse_var(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            max_batch_lines,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

/// Loads the first `.env` found in the working directory or up to two levels
/// above it. Variables already present in the environment are not overridden.
///
/// Runs before the logger is installed so that `RUST_LOG` can come from the
/// file; the returned path is logged by the caller.
pub fn load_dotenv() -> Option<&'static str> {
    const CANDIDATES: [&str; 3] = [".env", "../.env", "../../.env"];
    CANDIDATES
        .into_iter()
        .find(|path| dotenvy::from_filename(path).is_ok())
}

pub fn log_dotenv(loaded: Option<&str>) {
    match loaded {
        Some(path) => info!("Loaded .env from: {path}"),
        None => info!("No .env file found, using system environment variables"),
    }
}
