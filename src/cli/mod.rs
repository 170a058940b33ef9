//! # CLI Module
//!
//! User-facing commands of spotrecs. Each command builds its own
//! [`reqwest::Client`], requests an application token once and then runs
//! its requests one after another.
//!
//! ## Commands
//!
//! - [`demo`] - Runs the fixed demonstration sequence: recommendations
//!   seeded by an artist, by a genre pair and by a track
//! - [`artist`] - Prints the first artist matching a name
//! - [`track`] - Prints the first track matching a name, optionally
//!   narrowed to an artist
//! - [`recommend`] - Prints recommendations for user-supplied seeds
//!
//! The demo sequence is also available as a library function,
//! [`run_scenarios`], which writes to any [`std::io::Write`] sink and
//! reports which scenarios were skipped.
//!
//! ## Error Handling
//!
//! A rejected token request ends the program. Inside the demo a failed
//! search or recommendation request only skips that scenario.
//!
//! ## Usage
//!
//! ```bash
//! spotrecs                                  # same as `spotrecs demo`
//! spotrecs artist "Talking Heads"
//! spotrecs track "Psycho Killer" --artist "Talking Heads"
//! spotrecs recommend --genre blues --genre rock --limit 5
//! ```

mod auth;
mod demo;
mod recommend;
mod search;

pub use demo::DemoSummary;
pub use demo::Scenario;
pub use demo::default_scenarios;
pub use demo::demo;
pub use demo::run_scenarios;
pub use recommend::recommend;
pub use search::artist;
pub use search::track;
