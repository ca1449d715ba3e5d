use thiserror::Error;

use crate::types::Mood;

/// Shown to the user for every failed pick, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unknown error occurred. Please try again.";

pub const MISSING_URL_MESSAGE: &str = "Missing url parameter";

#[derive(Error, Debug)]
pub enum MoodError {
    #[error("No tracks found for mood: {0}")]
    NoTracksForMood(Mood),

    #[error("Song not found in catalog: {0}")]
    TrackNotFound(String),

    #[error("No universal link returned for {0}")]
    NoUniversalLink(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Missing url parameter")]
    InvalidProxyInput,

    #[error("{0}")]
    UpstreamFailure(String),
}

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Nothing to share")]
    NothingToShare,

    #[error("Cannot build share link: {0}")]
    InvalidUrl(String),

    #[error("Cannot open share target: {0}")]
    Launch(#[from] std::io::Error),
}

/// Flattens an error and its sources into one line, e.g.
/// `error sending request: operation timed out`.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
