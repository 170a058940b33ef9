use serde::{Deserialize, Serialize};

/// Opaque bearer token returned by the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistMatch {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMatch {
    pub id: String,
    pub name: String,
    pub artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub artists: Option<Page<Artist>>,
    pub tracks: Option<Page<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

/// Track record as returned by both search and recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimpleArtist>,
    pub album: Option<Album>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

impl Track {
    pub fn primary_artist(&self) -> &str {
        self.artists
            .first()
            .map(|a| a.name.as_str())
            .unwrap_or("Unknown artist")
    }

    pub fn album_name(&self) -> &str {
        self.album
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or("Unknown album")
    }

    pub fn spotify_url(&self) -> &str {
        self.external_urls.spotify.as_deref().unwrap_or("-")
    }
}

/// Body of `GET /recommendations`. `tracks` is `None` when the service
/// omits the field entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub tracks: Option<Vec<Track>>,
}
