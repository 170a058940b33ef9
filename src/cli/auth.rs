use reqwest::Client;

use crate::{
    config::{ApiConfig, Credentials},
    error,
    spotify::auth::request_token,
    types::AccessToken,
    utils,
};

/// Requests an application token for a single command run.
///
/// Terminates the program when the token endpoint refuses the credentials,
/// since no later request could succeed without one.
pub(crate) async fn access_token(client: &Client, api: &ApiConfig) -> AccessToken {
    let credentials = Credentials::from_env();

    let pb = utils::spinner("Getting access token...");
    let token = request_token(client, api, &credentials).await;
    pb.finish_and_clear();

    match token {
        Ok(token) => token,
        Err(e) => {
            println!("{}", e);
            error!("Failed to get access token. Check your credentials!");
        }
    }
}
