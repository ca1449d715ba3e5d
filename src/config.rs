//! Configuration management for the mood song picker.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Every value has a default, so the
//! application runs without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults
//!
//! [`Settings`] is built once at startup and shared read-only afterwards.

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use crate::types::{Identity, Mood};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_FEEL_GOOD_URL: &str =
    "https://raw.githubusercontent.com/oellado/mood/refs/heads/main/Data/chill.txt";
pub const DEFAULT_NOSTALGIC_URL: &str =
    "https://raw.githubusercontent.com/oellado/mood/refs/heads/main/Data/melancholy.txt";
pub const DEFAULT_ENERGETIC_URL: &str =
    "https://raw.githubusercontent.com/oellado/mood/refs/heads/main/Data/energetic.txt";
pub const DEFAULT_ITUNES_SEARCH_URL: &str = "https://itunes.apple.com/search";
pub const DEFAULT_SONGLINK_API_URL: &str = "https://api.song.link/v1-alpha.1/links";
pub const DEFAULT_PROXY_USER_AGENT: &str = "mood-mini-app-proxy";
pub const DEFAULT_EMBED_BASE_URL: &str = "https://embed.odesli.co/";
pub const DEFAULT_SHARE_COMPOSE_URL: &str = "https://farcaster.xyz/~/compose";
pub const DEFAULT_SHARE_APP_URL: &str = "https://mood-randomizer.vercel.app";
pub const DEFAULT_CURATOR_CREDIT: &str =
    "Mood-based songs, curated by @janicka.eth (https://farcaster.xyz/janicka.eth)";
pub const DEFAULT_LOADING_MIN_MS: u64 = 700;
pub const DEFAULT_LOADING_MAX_MS: u64 = 1200;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory if needed and loads `moodpick/.env` from the
/// platform-specific local data directory:
/// - Linux: `~/.local/share/moodpick/.env`
/// - macOS: `~/Library/Application Support/moodpick/.env`
/// - Windows: `%LOCALAPPDATA%/moodpick/.env`
///
/// A missing file is not an error; defaults apply.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodpick/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Address the proxy server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Fixed mood to track-list mapping.
#[derive(Debug, Clone)]
pub struct MoodCatalog {
    feel_good: String,
    nostalgic: String,
    energetic: String,
}

impl MoodCatalog {
    pub fn new(feel_good: String, nostalgic: String, energetic: String) -> Self {
        Self {
            feel_good,
            nostalgic,
            energetic,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            var_or("MOOD_FEEL_GOOD_URL", DEFAULT_FEEL_GOOD_URL),
            var_or("MOOD_NOSTALGIC_URL", DEFAULT_NOSTALGIC_URL),
            var_or("MOOD_ENERGETIC_URL", DEFAULT_ENERGETIC_URL),
        )
    }

    pub fn source(&self, mood: Mood) -> &str {
        match mood {
            Mood::FeelGood => &self.feel_good,
            Mood::Nostalgic => &self.nostalgic,
            Mood::Energetic => &self.energetic,
        }
    }

    pub fn moods(&self) -> &'static [Mood] {
        &Mood::ALL
    }
}

impl Default for MoodCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_FEEL_GOOD_URL.to_string(),
            DEFAULT_NOSTALGIC_URL.to_string(),
            DEFAULT_ENERGETIC_URL.to_string(),
        )
    }
}

/// How universal links are requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRoute {
    /// Straight to the link-aggregation API.
    Direct(String),
    /// Through a proxy exposing `/api/songlink`.
    Proxy(String),
}

/// Loading-screen timing.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    /// Loading stays visible at least this long.
    pub min_loading: Duration,
    /// Loading is dropped after this long even if resolution is still running.
    pub max_loading: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            min_loading: Duration::from_millis(DEFAULT_LOADING_MIN_MS),
            max_loading: Duration::from_millis(DEFAULT_LOADING_MAX_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_addr: String,
    pub catalog: MoodCatalog,
    pub search_url: String,
    pub songlink_url: String,
    pub link_route: LinkRoute,
    pub proxy_user_agent: String,
    pub timings: Timings,
    pub http_timeout: Duration,
    pub embed_base_url: String,
    pub share_compose_url: String,
    pub share_app_url: String,
    /// Footer line shown under every screen.
    pub curator_credit: String,
    pub identity: Identity,
}

impl Settings {
    /// Reads every setting from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let songlink_url = var_or("SONGLINK_API_URL", DEFAULT_SONGLINK_API_URL);
        let link_route = match optional("SONGLINK_PROXY_URL") {
            Some(proxy) => LinkRoute::Proxy(proxy),
            None => LinkRoute::Direct(songlink_url.clone()),
        };

        Self {
            server_addr: server_addr(),
            catalog: MoodCatalog::from_env(),
            search_url: var_or("ITUNES_SEARCH_URL", DEFAULT_ITUNES_SEARCH_URL),
            songlink_url,
            link_route,
            proxy_user_agent: var_or("PROXY_USER_AGENT", DEFAULT_PROXY_USER_AGENT),
            timings: Timings {
                min_loading: Duration::from_millis(parsed_or(
                    "LOADING_MIN_MS",
                    DEFAULT_LOADING_MIN_MS,
                )),
                max_loading: Duration::from_millis(parsed_or(
                    "LOADING_MAX_MS",
                    DEFAULT_LOADING_MAX_MS,
                )),
            },
            http_timeout: Duration::from_secs(parsed_or(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
            embed_base_url: var_or("EMBED_BASE_URL", DEFAULT_EMBED_BASE_URL),
            share_compose_url: var_or("SHARE_COMPOSE_URL", DEFAULT_SHARE_COMPOSE_URL),
            share_app_url: var_or("SHARE_APP_URL", DEFAULT_SHARE_APP_URL),
            curator_credit: var_or("CURATOR_CREDIT", DEFAULT_CURATOR_CREDIT),
            identity: Identity {
                display_name: optional("MOODPICK_USER_NAME"),
                avatar_url: optional("MOODPICK_AVATAR_URL"),
            },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            catalog: MoodCatalog::default(),
            search_url: DEFAULT_ITUNES_SEARCH_URL.to_string(),
            songlink_url: DEFAULT_SONGLINK_API_URL.to_string(),
            link_route: LinkRoute::Direct(DEFAULT_SONGLINK_API_URL.to_string()),
            proxy_user_agent: DEFAULT_PROXY_USER_AGENT.to_string(),
            timings: Timings::default(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            embed_base_url: DEFAULT_EMBED_BASE_URL.to_string(),
            share_compose_url: DEFAULT_SHARE_COMPOSE_URL.to_string(),
            share_app_url: DEFAULT_SHARE_APP_URL.to_string(),
            curator_credit: DEFAULT_CURATOR_CREDIT.to_string(),
            identity: Identity::default(),
        }
    }
}
