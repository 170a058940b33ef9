use reqwest::StatusCode;
use thiserror::Error;

/// Which catalog a search ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Artist,
    Track,
}

impl SearchKind {
    /// Value of the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Artist => "artist",
            SearchKind::Track => "track",
        }
    }
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error getting token: {}\n{body}", .status.as_u16())]
    Auth { status: StatusCode, body: String },

    #[error("Error: {}\n{body}", .status.as_u16())]
    Request { status: StatusCode, body: String },

    #[error("No {kind} found for '{query}'")]
    NoMatch { kind: SearchKind, query: String },

    #[error("Invalid seeds: {0}")]
    InvalidSeeds(String),

    #[error("Invalid limit {0}: must be between 1 and 100")]
    InvalidLimit(u32),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
