//! Mood Song Picker Library
//!
//! This library picks a random track from a curated list for a mood, resolves
//! it to a storefront page through a song-search API, and turns that page into
//! a universal cross-platform link through a link-aggregation API. It also
//! ships the small proxy endpoint that relays link-aggregation requests for
//! clients that cannot reach the service directly.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the proxy server
//! - `cli` - Terminal front end (home, loading and result screens)
//! - `config` - Environment loading and the immutable `Settings`
//! - `error` - Error taxonomy shared by the resolver chain and the proxy
//! - `logging` - `tracing` subscriber setup for diagnostics
//! - `mood` - Mood picker, session state machine and the pick flow
//! - `resolve` - Outbound clients for the song-search and link APIs
//! - `server` - Router construction and binding for the proxy
//! - `types` - Data structures and wire types
//! - `utils` - Parsing and URL helpers
//!
//! # Example
//!
//! ```
//! use moodpick::{config, mood};
//!
//! #[tokio::main]
//! async fn main() -> moodpick::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env();
//!     // Drive a session with mood::get_mood(...)
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mood;
pub mod resolve;
pub mod server;
pub mod types;
pub mod utils;

/// Crate-wide boxed error result, used where errors only get reported.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// ```
/// info!("Starting proxy on {}...", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a red `!` and exits with status 1.
///
/// Only for failures the command cannot continue from. Evaluates to `!`,
/// so it can stand in a `match` arm of any type:
///
/// ```
/// let client = match utils::http_client(timeout) {
///     Ok(client) => client,
///     Err(e) => error!("Cannot create HTTP client. Err: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a line prefixed with a yellow `!` and carries on.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
