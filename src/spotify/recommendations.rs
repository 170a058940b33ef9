use reqwest::Client;

use crate::{
    config::ApiConfig,
    error::Error,
    spotify::{decode, ensure_ok},
    types::{AccessToken, Recommendations},
};

/// Most seeds the recommendations endpoint accepts across all categories.
pub const MAX_SEEDS: usize = 5;
/// Result count used when none is given.
pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// Artist IDs, track IDs and genre names used to bias a recommendation
/// query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSet {
    pub artists: Vec<String>,
    pub tracks: Vec<String>,
    pub genres: Vec<String>,
}

impl SeedSet {
    pub fn new() -> Self {
        SeedSet::default()
    }

    pub fn with_artists<I, S>(mut self, artists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artists.extend(artists.into_iter().map(Into::into));
        self
    }

    pub fn with_tracks<I, S>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracks.extend(tracks.into_iter().map(Into::into));
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    pub fn len(&self) -> usize {
        self.artists.len() + self.tracks.len() + self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks the constraints the remote service enforces: at least one
    /// seed and no more than [`MAX_SEEDS`] in total.
    pub fn validate(&self) -> Result<(), Error> {
        if self.is_empty() {
            return Err(Error::InvalidSeeds(
                "provide at least one artist, track or genre seed".to_string(),
            ));
        }
        if self.len() > MAX_SEEDS {
            return Err(Error::InvalidSeeds(format!(
                "{} seeds given, at most {} allowed",
                self.len(),
                MAX_SEEDS
            )));
        }
        Ok(())
    }

    /// Query parameters for the non-empty seed categories, values joined
    /// with commas in input order. Empty categories are left out.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        [
            ("seed_artists", &self.artists),
            ("seed_tracks", &self.tracks),
            ("seed_genres", &self.genres),
        ]
        .into_iter()
        .filter(|(_, seeds)| !seeds.is_empty())
        .map(|(key, seeds)| (key, seeds.join(",")))
        .collect()
    }
}

pub fn validate_limit(limit: u32) -> Result<u32, Error> {
    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(Error::InvalidLimit(limit))
    }
}

/// Fetches tracks recommended for the given seeds.
///
/// The seed set and limit are validated locally first, so a request the
/// service would reject is never sent. `market` is an ISO 3166-1 alpha-2
/// country code; tracks unavailable there are left out. It is only sent
/// when given and non-blank.
///
/// # Returns
///
/// - `Ok(Recommendations)` - decoded body of a `200 OK` response
/// - `Err(Error::InvalidSeeds | Error::InvalidLimit)` - local validation failed
/// - `Err(Error::Request)` - any other status, with status code and raw body
///
/// # Example
///
/// ```
/// let seeds = SeedSet::new().with_genres(["blues", "rock"]);
/// let recs = get_recommendations(&client, &api, &token, &seeds, 5, Some("US")).await?;
/// ```
pub async fn get_recommendations(
    client: &Client,
    api: &ApiConfig,
    token: &AccessToken,
    seeds: &SeedSet,
    limit: u32,
    market: Option<&str>,
) -> Result<Recommendations, Error> {
    seeds.validate()?;
    let limit = validate_limit(limit)?;

    let mut params = vec![("limit", limit.to_string())];
    params.extend(seeds.query_params());
    if let Some(market) = market.map(str::trim).filter(|m| !m.is_empty()) {
        params.push(("market", market.to_string()));
    }

    let response = client
        .get(api.recommendations_url())
        .bearer_auth(token.as_str())
        .query(&params)
        .send()
        .await?;

    let response = ensure_ok(response).await?;
    decode(response).await
}
