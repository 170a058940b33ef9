use reqwest::Client;

use crate::{
    cli::auth::access_token,
    config::ApiConfig,
    error::Error,
    info,
    spotify::search::{search_artist, search_track},
    success, utils, warning,
};

pub async fn artist(name: String) {
    let api = ApiConfig::from_env();
    let client = Client::new();
    let token = access_token(&client, &api).await;

    let pb = utils::spinner(&format!("Searching artist '{}'...", name));
    let result = search_artist(&client, &api, &token, &name).await;
    pb.finish_and_clear();

    match result {
        Ok(found) => {
            success!("Found artist: {}", found.name);
            info!("ID: {}", found.id);
        }
        Err(e @ Error::NoMatch { .. }) => warning!("{}", e),
        Err(e) => crate::error!("{}", e),
    }
}

pub async fn track(name: String, artist: Option<String>) {
    let api = ApiConfig::from_env();
    let client = Client::new();
    let token = access_token(&client, &api).await;

    let pb = utils::spinner(&format!("Searching track '{}'...", name));
    let result = search_track(&client, &api, &token, &name, artist.as_deref()).await;
    pb.finish_and_clear();

    match result {
        Ok(found) => {
            success!("Found track: {} by {}", found.name, found.artist);
            info!("Track ID: {}", found.id);
        }
        Err(e @ Error::NoMatch { .. }) => warning!("{}", e),
        Err(e) => crate::error!("{}", e),
    }
}
