use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, StatusCode, header::AUTHORIZATION};

use crate::{
    config::{ApiConfig, Credentials},
    error::Error,
    spotify::decode,
    types::{AccessToken, TokenResponse},
};

/// Builds the value of the HTTP Basic credential for the token request.
///
/// The client ID and secret are joined with a colon and the UTF-8 bytes are
/// encoded with the standard base64 alphabet, padding included.
///
/// # Example
///
/// ```
/// let creds = Credentials::new("id", "secret");
/// assert_eq!(basic_credential(&creds), "aWQ6c2VjcmV0");
/// ```
pub fn basic_credential(credentials: &Credentials) -> String {
    let auth_string = format!("{}:{}", credentials.client_id, credentials.client_secret);
    STANDARD.encode(auth_string.as_bytes())
}

/// Exchanges the application credentials for a bearer token.
///
/// Sends `grant_type=client_credentials` as a form body to the token
/// endpoint, authenticated with [`basic_credential`]. The token is not
/// cached; every call performs a fresh exchange.
///
/// # Returns
///
/// - `Ok(AccessToken)` - the `access_token` field of a `200 OK` response
/// - `Err(Error::Auth)` - any other status, with the status code and raw body
/// - `Err(Error::Decode)` - a `200 OK` body without an `access_token`
/// - `Err(Error::Http)` - the request could not be sent at all
///
/// # Example
///
/// ```
/// let token = request_token(&client, &api, &Credentials::from_env()).await?;
/// ```
pub async fn request_token(
    client: &Client,
    api: &ApiConfig,
    credentials: &Credentials,
) -> Result<AccessToken, Error> {
    let res = client
        .post(&api.token_url)
        .header(
            AUTHORIZATION,
            format!("Basic {}", basic_credential(credentials)),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = res.status();
    if status != StatusCode::OK {
        let body = res.text().await.unwrap_or_default();
        return Err(Error::Auth { status, body });
    }

    let body: TokenResponse = decode(res).await?;
    body.access_token
        .filter(|t| !t.is_empty())
        .map(AccessToken::new)
        .ok_or_else(|| Error::Decode("token response without access_token".to_string()))
}
