//! Configuration management for the Spotify recommendations CLI.
//!
//! Credentials and endpoints are read from environment variables, which may
//! be provided by a `.env` file in the local data directory. The lookup
//! order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults (the real Spotify hosts and placeholder credentials)

use std::{env, path::PathBuf};

use crate::error::Error;

/// Placeholder client ID; replace it or set `SPOTIFY_API_AUTH_CLIENT_ID`.
pub const CLIENT_ID: &str = "your_client_id_here";
/// Placeholder client secret; replace it or set `SPOTIFY_API_AUTH_CLIENT_SECRET`.
pub const CLIENT_SECRET: &str = "your_client_secret_here";

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `spotrecs/.env` in the platform data directory:
/// - Linux: `~/.local/share/spotrecs/.env`
/// - macOS: `~/Library/Application Support/spotrecs/.env`
/// - Windows: `%LOCALAPPDATA%/spotrecs/.env`
///
/// A missing file is not an error; the built-in defaults apply instead.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created and
/// [`Error::Config`] if the file exists but cannot be parsed.
pub async fn load_env() -> Result<(), Error> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::Config(format!(
            "failed to load {}: {}",
            path.display(),
            e
        ))),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotrecs/.env");
    path
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Application credentials for the client-credentials grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Credentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `SPOTIFY_API_AUTH_CLIENT_ID` and `SPOTIFY_API_AUTH_CLIENT_SECRET`,
    /// falling back to [`CLIENT_ID`] and [`CLIENT_SECRET`].
    pub fn from_env() -> Self {
        Credentials::new(
            var_or("SPOTIFY_API_AUTH_CLIENT_ID", CLIENT_ID),
            var_or("SPOTIFY_API_AUTH_CLIENT_SECRET", CLIENT_SECRET),
        )
    }

    /// True while either value is still the shipped placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.client_id == CLIENT_ID || self.client_secret == CLIENT_SECRET
    }
}

/// Endpoints used by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Full URL of the token endpoint, e.g. `https://accounts.spotify.com/api/token`.
    pub token_url: String,
    /// Web API base without trailing slash, e.g. `https://api.spotify.com/v1`.
    pub api_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::new(DEFAULT_TOKEN_URL, DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(token_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        ApiConfig {
            token_url: token_url.into(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `SPOTIFY_API_TOKEN_URL` and `SPOTIFY_API_URL`, defaulting to the
    /// public Spotify hosts.
    pub fn from_env() -> Self {
        ApiConfig::new(
            var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            var_or("SPOTIFY_API_URL", DEFAULT_API_URL),
        )
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.api_url)
    }

    pub fn recommendations_url(&self) -> String {
        format!("{}/recommendations", self.api_url)
    }
}
