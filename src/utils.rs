use std::{io::Write, time::Duration};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::types::Track;

const RULE_WIDTH: usize = 70;

/// How a recommendation list is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStyle {
    /// Number and title, then artist, album and Spotify URL on their own lines.
    Detailed,
    /// One `"{n}. {title} - {artist}"` line per track.
    Compact,
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Writes a title framed by two horizontal rules.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "{}", rule())
}

pub fn write_track_detailed<W: Write>(
    out: &mut W,
    number: usize,
    track: &Track,
) -> std::io::Result<()> {
    writeln!(out, "{}. {}", number, track.name)?;
    writeln!(out, "   Artist: {}", track.primary_artist())?;
    writeln!(out, "   Album: {}", track.album_name())?;
    writeln!(out, "   Spotify URL: {}", track.spotify_url())?;
    writeln!(out)
}

pub fn write_track_compact<W: Write>(
    out: &mut W,
    number: usize,
    track: &Track,
) -> std::io::Result<()> {
    writeln!(out, "{}. {} - {}", number, track.name, track.primary_artist())
}

/// Writes the `Found {n} {noun}:` header followed by the numbered tracks.
///
/// Numbering starts at 1. An empty list prints only the header.
pub fn write_listing<W: Write>(
    out: &mut W,
    tracks: &[Track],
    noun: &str,
    style: ListingStyle,
) -> std::io::Result<()> {
    writeln!(
        out,
        "\n{} Found {} {}:\n",
        "✓".green().bold(),
        tracks.len(),
        noun
    )?;

    for (i, track) in tracks.iter().enumerate() {
        match style {
            ListingStyle::Detailed => write_track_detailed(out, i + 1, track)?,
            ListingStyle::Compact => write_track_compact(out, i + 1, track)?,
        }
    }

    Ok(())
}

/// Spinner shown on stderr while a request is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
