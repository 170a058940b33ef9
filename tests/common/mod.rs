//! In-process stand-in for the Spotify token, search and recommendations
//! endpoints, served with axum on an ephemeral port.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use serde_json::{Value, json};
use spotrecs::config::{ApiConfig, Credentials};

pub const TOKEN: &str = "tok";

type RecommendationsHandler =
    Arc<dyn Fn(&HashMap<String, String>) -> (StatusCode, Value) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: &'static str,
    pub query: HashMap<String, String>,
}

pub struct MockSpotify {
    accept_token: bool,
    token_body: Option<Value>,
    artists: Vec<Value>,
    tracks: Vec<Value>,
    recommendations: RecommendationsHandler,
    requests: Mutex<Vec<Recorded>>,
}

pub fn credentials() -> Credentials {
    Credentials::new("id", "secret")
}

/// Recommendation track record numbered `i`.
pub fn track_json(i: usize) -> Value {
    json!({
        "id": format!("track{}", i),
        "name": format!("Track {}", i),
        "artists": [{ "name": format!("Artist {}", i) }],
        "album": { "name": format!("Album {}", i) },
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", i) }
    })
}

pub fn tracks_json(n: usize) -> Value {
    json!({ "tracks": (1..=n).map(track_json).collect::<Vec<_>>() })
}

fn no_recommendations(_: &HashMap<String, String>) -> (StatusCode, Value) {
    (StatusCode::OK, json!({ "tracks": [] }))
}

impl MockSpotify {
    pub fn new() -> Self {
        MockSpotify {
            accept_token: true,
            token_body: None,
            artists: Vec::new(),
            tracks: Vec::new(),
            recommendations: Arc::new(no_recommendations),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn reject_token(mut self) -> Self {
        self.accept_token = false;
        self
    }

    /// Answers accepted token requests with `200 OK` and this body.
    pub fn token_body(mut self, body: Value) -> Self {
        self.token_body = Some(body);
        self
    }

    pub fn artist(mut self, id: &str, name: &str) -> Self {
        self.artists.push(json!({ "id": id, "name": name, "genres": [] }));
        self
    }

    pub fn track(mut self, id: &str, name: &str, artist: &str) -> Self {
        self.tracks.push(json!({
            "id": id,
            "name": name,
            "artists": [{ "name": artist }],
            "album": { "name": "Talking Heads: 77" },
            "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", id) }
        }));
        self
    }

    pub fn recommendations<F>(mut self, handler: F) -> Self
    where
        F: Fn(&HashMap<String, String>) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        self.recommendations = Arc::new(handler);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    fn record(&self, path: &'static str, query: HashMap<String, String>) {
        self.requests.lock().unwrap().push(Recorded { path, query });
    }

    /// Serves the mock and returns endpoints pointing at it.
    pub async fn start(self) -> (ApiConfig, Arc<MockSpotify>) {
        let state = Arc::new(self);
        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/search", get(search))
            .route("/v1/recommendations", get(recommendations))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let api = ApiConfig::new(
            format!("http://{}/api/token", addr),
            format!("http://{}/v1", addr),
        );
        (api, state)
    }
}

fn has_bearer(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN))
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": { "status": 401, "message": "Invalid access token" } })),
    )
}

async fn token(
    State(state): State<Arc<MockSpotify>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.record("/api/token", form.clone());

    let basic_ok = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "Basic aWQ6c2VjcmV0");
    let grant_ok = form.get("grant_type").map(String::as_str) == Some("client_credentials");

    if state.accept_token && basic_ok && grant_ok {
        if let Some(body) = &state.token_body {
            return (StatusCode::OK, Json(body.clone()));
        }
        (
            StatusCode::OK,
            Json(json!({ "access_token": TOKEN, "token_type": "Bearer", "expires_in": 3600 })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_client", "error_description": "Invalid client" })),
        )
    }
}

async fn search(
    State(state): State<Arc<MockSpotify>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.record("/v1/search", query.clone());
    if !has_bearer(&headers) {
        return unauthorized();
    }

    let limit: usize = query
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);
    let body = match query.get("type").map(String::as_str) {
        Some("artist") => {
            let items: Vec<Value> = state.artists.iter().take(limit).cloned().collect();
            json!({ "artists": { "items": items } })
        }
        Some("track") => {
            let items: Vec<Value> = state.tracks.iter().take(limit).cloned().collect();
            json!({ "tracks": { "items": items } })
        }
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": { "status": 400, "message": "Missing parameter type" } })),
            );
        }
    };

    (StatusCode::OK, Json(body))
}

async fn recommendations(
    State(state): State<Arc<MockSpotify>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.record("/v1/recommendations", query.clone());
    if !has_bearer(&headers) {
        return unauthorized();
    }

    let (status, body) = (state.recommendations)(&query);
    (status, Json(body))
}
