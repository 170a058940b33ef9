use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::json;
use spotrecs::{
    Error,
    cli::{Scenario, default_scenarios},
    config::Credentials,
    spotify::{
        auth::basic_credential,
        recommendations::{SeedSet, validate_limit},
    },
    types::{Recommendations, Track},
    utils::{ListingStyle, write_listing},
};

// Helper function to create a test track
fn create_test_track(name: &str, artist: &str, album: &str, url: &str) -> Track {
    serde_json::from_value(json!({
        "id": format!("{}_id", name),
        "name": name,
        "artists": [{ "name": artist }],
        "album": { "name": album },
        "external_urls": { "spotify": url }
    }))
    .unwrap()
}

fn render(tracks: &[Track], noun: &str, style: ListingStyle) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    write_listing(&mut out, tracks, noun, style).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_basic_credential_round_trip() {
    let encoded = basic_credential(&Credentials::new("id", "secret"));
    assert_eq!(encoded, "aWQ6c2VjcmV0");

    let decoded = STANDARD.decode(&encoded).unwrap();
    assert_eq!(decoded, b"id:secret");
    assert_eq!(STANDARD.encode(decoded), "aWQ6c2VjcmV0");
}

#[test]
fn test_basic_credential_utf8() {
    let encoded = basic_credential(&Credentials::new("ü", "ß"));
    let decoded = STANDARD.decode(encoded).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "ü:ß");
}

#[test]
fn test_seed_query_params_joins_per_category() {
    let seeds = SeedSet::new().with_artists(["a", "b"]);
    assert_eq!(
        seeds.query_params(),
        vec![("seed_artists", "a,b".to_string())]
    );
}

#[test]
fn test_seed_query_params_omits_empty_categories() {
    let seeds = SeedSet::new()
        .with_tracks(["t1"])
        .with_genres(["blues", "rock"]);
    let params = seeds.query_params();

    assert_eq!(
        params,
        vec![
            ("seed_tracks", "t1".to_string()),
            ("seed_genres", "blues,rock".to_string()),
        ]
    );
    assert!(params.iter().all(|(key, _)| *key != "seed_artists"));

    assert!(SeedSet::new().query_params().is_empty());
}

#[test]
fn test_seed_validation() {
    // Empty set is rejected
    let result = SeedSet::new().validate();
    assert!(matches!(result, Err(Error::InvalidSeeds(_))));

    // Five seeds across categories are fine
    let seeds = SeedSet::new()
        .with_artists(["a1", "a2"])
        .with_tracks(["t1"])
        .with_genres(["blues", "rock"]);
    assert_eq!(seeds.len(), 5);
    assert!(seeds.validate().is_ok());

    // Six are too many
    let seeds = seeds.with_genres(["jazz"]);
    let err = seeds.validate().unwrap_err();
    assert!(err.to_string().contains("6 seeds given"));
}

#[test]
fn test_validate_limit() {
    assert_eq!(validate_limit(1).unwrap(), 1);
    assert_eq!(validate_limit(100).unwrap(), 100);
    assert!(matches!(validate_limit(0), Err(Error::InvalidLimit(0))));
    assert!(matches!(validate_limit(101), Err(Error::InvalidLimit(101))));
}

#[test]
fn test_write_listing_detailed() {
    let tracks = vec![
        create_test_track("Once in a Lifetime", "Talking Heads", "Remain in Light", "https://open.spotify.com/track/1"),
        create_test_track("Heroes", "David Bowie", "Heroes", "https://open.spotify.com/track/2"),
    ];
    let text = render(&tracks, "recommendations", ListingStyle::Detailed);

    assert!(text.contains("Found 2 recommendations:"));
    assert!(text.contains(
        "1. Once in a Lifetime\n   Artist: Talking Heads\n   Album: Remain in Light\n   Spotify URL: https://open.spotify.com/track/1\n"
    ));
    assert!(text.contains("2. Heroes\n   Artist: David Bowie\n"));
}

#[test]
fn test_write_listing_compact() {
    let tracks = vec![
        create_test_track("Red House", "Jimi Hendrix", "Are You Experienced", "u1"),
        create_test_track("Pride and Joy", "Stevie Ray Vaughan", "Texas Flood", "u2"),
    ];
    let text = render(&tracks, "similar tracks", ListingStyle::Compact);

    assert!(text.contains("Found 2 similar tracks:"));
    assert!(text.contains("1. Red House - Jimi Hendrix\n"));
    assert!(text.contains("2. Pride and Joy - Stevie Ray Vaughan\n"));
    assert!(!text.contains("Album:"));
}

#[test]
fn test_write_listing_empty() {
    let text = render(&[], "recommendations", ListingStyle::Detailed);
    assert!(text.contains("Found 0 recommendations:"));
    assert!(!text.contains("1."));
}

#[test]
fn test_track_without_artist_or_album() {
    let track: Track = serde_json::from_value(json!({ "name": "Untitled" })).unwrap();
    assert_eq!(track.primary_artist(), "Unknown artist");
    assert_eq!(track.album_name(), "Unknown album");
    assert_eq!(track.spotify_url(), "-");
}

#[test]
fn test_recommendations_without_tracks_field() {
    let recs: Recommendations = serde_json::from_value(json!({ "seeds": [] })).unwrap();
    assert!(recs.tracks.is_none());
}

#[test]
fn test_default_scenarios_order() {
    let scenarios = default_scenarios();
    assert_eq!(scenarios.len(), 3);

    assert_eq!(
        scenarios[0],
        Scenario::ArtistSeed {
            artist: "Talking Heads".to_string(),
            limit: 10
        }
    );
    assert_eq!(
        scenarios[1],
        Scenario::GenreSeed {
            genres: vec!["blues".to_string(), "rock".to_string()],
            limit: 5
        }
    );
    assert_eq!(
        scenarios[2],
        Scenario::TrackSeed {
            track: "Psycho Killer".to_string(),
            artist: Some("Talking Heads".to_string()),
            limit: 5
        }
    );
}
