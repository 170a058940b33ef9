use reqwest::Client;

use crate::{
    config::ApiConfig,
    error::{Error, SearchKind},
    spotify::{decode, ensure_ok},
    types::{AccessToken, ArtistMatch, SearchResponse, TrackMatch},
};

/// Builds the free-text query for a track search.
///
/// With an artist the query becomes `"{track} artist:{artist}"`, which the
/// search endpoint treats as a field filter.
pub fn track_query(track_name: &str, artist_name: Option<&str>) -> String {
    match artist_name {
        Some(artist) if !artist.is_empty() => format!("{} artist:{}", track_name, artist),
        _ => track_name.to_string(),
    }
}

async fn search(
    client: &Client,
    api: &ApiConfig,
    token: &AccessToken,
    query: &str,
    kind: SearchKind,
) -> Result<SearchResponse, Error> {
    let response = client
        .get(api.search_url())
        .bearer_auth(token.as_str())
        .query(&[("q", query), ("type", kind.as_str()), ("limit", "1")])
        .send()
        .await?;

    let response = ensure_ok(response).await?;
    decode(response).await
}

/// Looks up an artist by name and returns the top match.
///
/// The search is limited to a single result, which is trusted as-is.
///
/// # Returns
///
/// - `Ok(ArtistMatch)` - ID and display name of the first artist
/// - `Err(Error::NoMatch)` - the search returned no artists
/// - `Err(Error::Request)` - the endpoint answered with a non-200 status
///
/// # Example
///
/// ```
/// let artist = search_artist(&client, &api, &token, "Talking Heads").await?;
/// println!("Found artist: {} (ID: {})", artist.name, artist.id);
/// ```
pub async fn search_artist(
    client: &Client,
    api: &ApiConfig,
    token: &AccessToken,
    artist_name: &str,
) -> Result<ArtistMatch, Error> {
    let res = search(client, api, token, artist_name, SearchKind::Artist).await?;

    res.artists
        .and_then(|page| page.items.into_iter().next())
        .map(|artist| ArtistMatch {
            id: artist.id,
            name: artist.name,
        })
        .ok_or_else(|| Error::NoMatch {
            kind: SearchKind::Artist,
            query: artist_name.to_string(),
        })
}

/// Looks up a track by name, optionally narrowed to an artist.
///
/// # Returns
///
/// - `Ok(TrackMatch)` - ID, title and primary artist of the first track
/// - `Err(Error::NoMatch)` - the search returned no tracks (or the first
///   track carries no ID)
/// - `Err(Error::Request)` - the endpoint answered with a non-200 status
///
/// # Example
///
/// ```
/// let track = search_track(&client, &api, &token, "Psycho Killer", Some("Talking Heads")).await?;
/// println!("Found track: {} by {}", track.name, track.artist);
/// ```
pub async fn search_track(
    client: &Client,
    api: &ApiConfig,
    token: &AccessToken,
    track_name: &str,
    artist_name: Option<&str>,
) -> Result<TrackMatch, Error> {
    let query = track_query(track_name, artist_name);
    let res = search(client, api, token, &query, SearchKind::Track).await?;

    let track = res.tracks.and_then(|page| page.items.into_iter().next());
    let Some((track, id)) = track.and_then(|t| t.id.clone().map(|id| (t, id))) else {
        return Err(Error::NoMatch {
            kind: SearchKind::Track,
            query,
        });
    };

    Ok(TrackMatch {
        id,
        artist: track.primary_artist().to_string(),
        name: track.name,
    })
}
