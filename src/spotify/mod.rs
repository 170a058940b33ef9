//! # Spotify Integration Module
//!
//! Thin wrappers around the three Spotify Web API endpoints this crate
//! talks to. Every function takes the shared [`reqwest::Client`], the
//! [`ApiConfig`](crate::config::ApiConfig) holding the endpoint URLs and,
//! once authenticated, an [`AccessToken`](crate::types::AccessToken).
//!
//! ```text
//! CLI Layer (demo scenarios, ad-hoc commands)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     ├── Catalog Search (artist, track)
//!     └── Recommendations (artist/track/genre seeds)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /search` - first artist or track matching a query
//! - `GET /recommendations` - tracks seeded by artists, tracks or genres
//!
//! ## Error Handling
//!
//! A status other than `200 OK` never panics: it comes back as
//! [`Error::Auth`](crate::Error::Auth) or [`Error::Request`](crate::Error::Request)
//! carrying the status code and the raw body. Nothing is retried. Transport
//! failures surface as [`Error::Http`](crate::Error::Http).
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = reqwest::Client::new();
//! let api = ApiConfig::from_env();
//! let token = spotify::auth::request_token(&client, &api, &Credentials::from_env()).await?;
//! let artist = spotify::search::search_artist(&client, &api, &token, "Talking Heads").await?;
//! let seeds = SeedSet::new().with_artists([artist.id]);
//! let recs = spotify::recommendations::get_recommendations(&client, &api, &token, &seeds, 10, None).await?;
//! ```

pub mod auth;
pub mod recommendations;
pub mod search;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Passes a `200 OK` response through, otherwise reads the body and turns
/// it into an [`Error::Request`].
pub(crate) async fn ensure_ok(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Request { status, body })
}

/// Reads the whole body and decodes it as JSON; a malformed body becomes
/// [`Error::Decode`].
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
