use reqwest::Client;

use crate::{
    cli::auth::access_token,
    config::ApiConfig,
    error,
    spotify::recommendations::{SeedSet, get_recommendations, validate_limit},
    utils::{self, ListingStyle},
    warning,
};

/// Prints recommendations for the given seeds.
///
/// Seeds and limit are checked before authenticating, so an invalid
/// combination never reaches the network.
pub async fn recommend(
    artists: Vec<String>,
    tracks: Vec<String>,
    genres: Vec<String>,
    limit: u32,
    market: Option<String>,
) {
    let seeds = SeedSet::new()
        .with_artists(artists)
        .with_tracks(tracks)
        .with_genres(genres);

    if let Err(e) = seeds.validate().and_then(|_| validate_limit(limit)) {
        error!("{}", e);
    }

    let api = ApiConfig::from_env();
    let client = Client::new();
    let token = access_token(&client, &api).await;

    let pb = utils::spinner("Getting recommendations...");
    let result =
        get_recommendations(&client, &api, &token, &seeds, limit, market.as_deref()).await;
    pb.finish_and_clear();

    let recs = match result {
        Ok(recs) => recs,
        Err(e) => error!("{}", e),
    };

    match recs.tracks {
        Some(tracks) => {
            let mut out = std::io::stdout();
            if let Err(e) =
                utils::write_listing(&mut out, &tracks, "recommendations", ListingStyle::Detailed)
            {
                error!("Failed to print recommendations: {}", e);
            }
        }
        None => warning!("Response did not contain any tracks"),
    }
}
