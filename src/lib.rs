//! Spotify Recommendations CLI Library
//!
//! This library provides a thin client for the Spotify Web API: it obtains
//! an application token with the client-credentials grant, searches the
//! catalog for artists and tracks, and fetches recommendation lists seeded
//! by artists, tracks or genres. All recommendation logic happens on the
//! remote service; this crate builds requests and prints what comes back.
//!
//! # Modules
//!
//! - `cli` - Command implementations, including the demo scenario runner
//! - `config` - Credentials, endpoints and `.env` loading
//! - `error` - The crate error type
//! - `spotify` - Spotify Web API client functions
//! - `types` - Request and response data structures
//! - `utils` - Console formatting helpers
//!
//! # Example
//!
//! ```
//! use spotrecs::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> spotrecs::Res<()> {
//!     config::load_env().await?;
//!     cli::demo().await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate reports a [`Error`], so callers
/// can tell an authentication failure from a failed request or an empty
/// search result and decide whether to continue.
///
/// # Example
///
/// ```
/// use spotrecs::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Used for progress updates such as "Getting access token...".
///
/// # Example
///
/// ```
/// info!("Getting recommendations for genres: {}", genres);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Access token received!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only used
/// for failures that make every remaining step pointless, such as a
/// rejected token request.
///
/// # Example
///
/// ```
/// error!("Failed to get access token. Check your credentials!");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures, e.g. a search that returned nothing or a
/// recommendation request the service rejected.
///
/// # Example
///
/// ```
/// warning!("No artist found for '{}'", name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
