use std::io::Write;

use colored::Colorize;
use reqwest::Client;

use crate::{
    Res,
    config::{ApiConfig, Credentials},
    error::Error,
    spotify::{
        auth::request_token,
        recommendations::{SeedSet, get_recommendations},
        search::{search_artist, search_track},
    },
    types::AccessToken,
    utils::{self, ListingStyle},
    warning,
};

/// One step of the demonstration sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scenario {
    /// Look up an artist by name, then recommend tracks seeded by it.
    ArtistSeed { artist: String, limit: u32 },
    /// Recommend tracks for a set of genre names.
    GenreSeed { genres: Vec<String>, limit: u32 },
    /// Look up a track, then recommend similar tracks.
    TrackSeed {
        track: String,
        artist: Option<String>,
        limit: u32,
    },
}

impl Scenario {
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::ArtistSeed { .. } => "Get recommendations based on an artist",
            Scenario::GenreSeed { .. } => "Get recommendations based on genres",
            Scenario::TrackSeed { .. } => "Get recommendations based on a track",
        }
    }
}

/// Artist seed, then genre seed, then track seed.
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::ArtistSeed {
            artist: "Talking Heads".to_string(),
            limit: 10,
        },
        Scenario::GenreSeed {
            genres: vec!["blues".to_string(), "rock".to_string()],
            limit: 5,
        },
        Scenario::TrackSeed {
            track: "Psycho Killer".to_string(),
            artist: Some("Talking Heads".to_string()),
            limit: 5,
        },
    ]
}

/// Titles of the scenarios that ran to completion and of those skipped
/// after a failed lookup or request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoSummary {
    pub completed: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

/// Runs the scenarios in order against a single access token.
///
/// The token is requested once up front. If that fails the error is
/// returned and no scenario runs. A scenario whose search or
/// recommendation request fails is reported to `out` and skipped; the
/// next one still runs. Transport and decoding failures are not
/// recoverable and end the run.
pub async fn run_scenarios<W: Write>(
    client: &Client,
    api: &ApiConfig,
    credentials: &Credentials,
    scenarios: &[Scenario],
    out: &mut W,
) -> Res<DemoSummary> {
    writeln!(out, "Getting access token...")?;
    let token = request_token(client, api, credentials).await?;
    writeln!(out, "{} Access token received!\n", "✓".green().bold())?;

    let mut summary = DemoSummary::default();
    for (i, scenario) in scenarios.iter().enumerate() {
        utils::write_banner(out, &format!("EXAMPLE {}: {}", i + 1, scenario.title()))?;

        match run_scenario(client, api, &token, scenario, out).await {
            Ok(()) => summary.completed.push(scenario.title()),
            Err(e @ (Error::Http(_) | Error::Decode(_) | Error::Io(_))) => return Err(e),
            Err(e) => {
                writeln!(out, "{}", e)?;
                summary.skipped.push(scenario.title());
            }
        }

        writeln!(out)?;
    }

    Ok(summary)
}

async fn run_scenario<W: Write>(
    client: &Client,
    api: &ApiConfig,
    token: &AccessToken,
    scenario: &Scenario,
    out: &mut W,
) -> Res<()> {
    match scenario {
        Scenario::ArtistSeed { artist, limit } => {
            let found = search_artist(client, api, token, artist).await?;
            writeln!(out, "Found artist: {} (ID: {})\n", found.name, found.id)?;
            writeln!(out, "Getting recommendations based on {}...", found.name)?;

            let seeds = SeedSet::new().with_artists([found.id]);
            let recs = get_recommendations(client, api, token, &seeds, *limit, None).await?;
            if let Some(tracks) = recs.tracks {
                utils::write_listing(out, &tracks, "recommendations", ListingStyle::Detailed)?;
            }
        }
        Scenario::GenreSeed { genres, limit } => {
            writeln!(out)?;
            writeln!(
                out,
                "Getting recommendations for genres: {}...",
                genres.join(", ")
            )?;

            let seeds = SeedSet::new().with_genres(genres.iter().cloned());
            let recs = get_recommendations(client, api, token, &seeds, *limit, None).await?;
            if let Some(tracks) = recs.tracks {
                utils::write_listing(out, &tracks, "recommendations", ListingStyle::Compact)?;
            }
        }
        Scenario::TrackSeed {
            track,
            artist,
            limit,
        } => {
            writeln!(out)?;
            let found = search_track(client, api, token, track, artist.as_deref()).await?;
            writeln!(out, "Found track: {} by {}", found.name, found.artist)?;
            writeln!(out, "Track ID: {}\n", found.id)?;
            writeln!(out, "Getting similar tracks...")?;

            let seeds = SeedSet::new().with_tracks([found.id]);
            let recs = get_recommendations(client, api, token, &seeds, *limit, None).await?;
            if let Some(tracks) = recs.tracks {
                utils::write_listing(out, &tracks, "similar tracks", ListingStyle::Compact)?;
            }
        }
    }

    Ok(())
}

/// Runs the default demonstration sequence against the configured account.
///
/// Exits the process with status 1 if no access token can be obtained.
pub async fn demo() {
    let credentials = Credentials::from_env();
    let api = ApiConfig::from_env();
    let mut out = std::io::stdout();

    if credentials.is_placeholder() {
        warning!(
            "Using placeholder credentials. Set SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET."
        );
    }

    println!("{}", utils::rule());
    println!("{}", "SPOTIFY RECOMMENDATIONS API".bold());
    println!("{}\n", utils::rule());

    let client = Client::new();
    match run_scenarios(&client, &api, &credentials, &default_scenarios(), &mut out).await {
        Ok(summary) => {
            if !summary.skipped.is_empty() {
                warning!("Skipped: {}", summary.skipped.join("; "));
            }
        }
        Err(e @ Error::Auth { .. }) => {
            println!("{}", e);
            crate::error!("Failed to get access token. Check your credentials!");
        }
        Err(e) => crate::error!("{}", e),
    }

    println!("{}", utils::rule());
    println!("INSTRUCTIONS:");
    println!("{}", utils::rule());
    println!(
        "1. Set SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET in your environment or .env"
    );
    println!("2. Run: spotrecs demo");
    println!();
    println!("You can also use the artist, track and recommend commands to try your own seeds!");
}
