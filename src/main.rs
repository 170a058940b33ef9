use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotrecs::{cli, config, spotify::recommendations::DEFAULT_LIMIT, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the demonstration: artist, genre and track seeded recommendations
    Demo,

    /// Find the first artist matching a name
    Artist(ArtistOptions),

    /// Find the first track matching a name
    Track(TrackOptions),

    /// Get recommendations for your own seeds (at most 5 in total)
    Recommend(RecommendOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Artist name to search for
    name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TrackOptions {
    /// Track name to search for
    name: String,

    /// Only match tracks by this artist
    #[clap(long)]
    artist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Artist ID to seed with; can be repeated
    #[clap(long = "artist", action = ArgAction::Append)]
    artists: Vec<String>,

    /// Track ID to seed with; can be repeated
    #[clap(long = "track", action = ArgAction::Append)]
    tracks: Vec<String>,

    /// Genre name to seed with; can be repeated
    #[clap(long = "genre", action = ArgAction::Append)]
    genres: Vec<String>,

    /// Number of recommendations (1-100)
    #[clap(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,

    /// Only recommend tracks available in this market (ISO country code, e.g. US)
    #[clap(long)]
    market: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => cli::demo().await,
        Command::Artist(opt) => cli::artist(opt.name).await,
        Command::Track(opt) => cli::track(opt.name, opt.artist).await,
        Command::Recommend(opt) => {
            cli::recommend(opt.artists, opt.tracks, opt.genres, opt.limit, opt.market).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
