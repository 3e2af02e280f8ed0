//! Server configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first, so local setups can
//! keep their settings there. Every key has a default; a value that is present
//! but unparsable aborts start-up instead of silently falling back.

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_PATH: &str = "hotels.sqlite";
const DEFAULT_STORAGE_ROOT: &str = "storage";
const DEFAULT_MAX_PICTURE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
#[error("invalid value '{value}' for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite database file.
    pub database_path: PathBuf,
    /// Directory that holds `pictures/<hotel_id>/...`.
    pub storage_root: PathBuf,
    /// Base URL prepended to stored picture paths, without trailing slash.
    pub public_url: String,
    /// Largest accepted picture upload.
    pub max_picture_bytes: usize,
    /// Open the UI in the default browser once the server is up.
    pub open_browser: bool,
    /// Insert the demo hotels when the database has no active hotels.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse(&lookup, "PORT", DEFAULT_PORT)?;
        let database_path = lookup("DATABASE_PATH")
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
            .into();
        let storage_root = lookup("STORAGE_ROOT")
            .unwrap_or_else(|| DEFAULT_STORAGE_ROOT.to_string())
            .into();
        let public_url = lookup("PUBLIC_URL")
            .unwrap_or_else(|| format!("http://{}:{}", host, port))
            .trim_end_matches('/')
            .to_string();
        let max_picture_bytes = parse(&lookup, "MAX_PICTURE_BYTES", DEFAULT_MAX_PICTURE_BYTES)?;
        let open_browser = parse(&lookup, "OPEN_BROWSER", false)?;
        let seed_demo_data = parse(&lookup, "SEED_DEMO_DATA", false)?;

        Ok(Self {
            host,
            port,
            database_path,
            storage_root,
            public_url,
            max_picture_bytes,
            open_browser,
            seed_demo_data,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError {
                key,
                reason: e.to_string(),
                value,
            }),
        },
    }
}
