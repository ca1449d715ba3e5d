use rand::Rng;
use reqwest::Client;

use crate::{
    config::MoodCatalog,
    error::MoodError,
    resolve::fetch_track_list,
    types::{MoodPick, MoodSelection},
    utils,
};

/// Picks a mood (resolving `Random` uniformly) and a random track from its list.
///
/// Makes exactly one GET for the mood's track list; no retries.
///
/// # Errors
///
/// - [`MoodError::NoTracksForMood`] when the list has no parseable line
/// - [`MoodError::Network`] when the list cannot be fetched
pub async fn pick_mood(
    client: &Client,
    catalog: &MoodCatalog,
    selection: MoodSelection,
) -> Result<MoodPick, MoodError> {
    let mood = utils::resolve_selection(selection, &mut rand::rng());
    let body = fetch_track_list(client, catalog.source(mood)).await?;
    pick_mood_with(MoodSelection::Mood(mood), &body, &mut rand::rng())
}

/// Offline half of [`pick_mood`]: resolves the selection and draws a track
/// from an already fetched list body.
pub fn pick_mood_with<R: Rng + ?Sized>(
    selection: MoodSelection,
    body: &str,
    rng: &mut R,
) -> Result<MoodPick, MoodError> {
    let mood = utils::resolve_selection(selection, rng);
    let tracks = utils::parse_tracks(body);
    let track = utils::choose_track(&tracks, rng).ok_or(MoodError::NoTracksForMood(mood))?;
    Ok(MoodPick { mood, track })
}

