use reqwest::Client;

use crate::{error::MoodError, types::SearchResponse, types::Track, utils};

/// Finds the storefront page for a track through the song-search API.
///
/// Queries `<search_url>?term=<artist name>&entity=song&limit=1` and returns
/// the first result's `trackViewUrl`.
///
/// # Errors
///
/// - [`MoodError::TrackNotFound`] when the search has no usable result
/// - [`MoodError::Network`] on transport failures and non-2xx statuses
pub async fn resolve_storefront_url(
    client: &Client,
    search_url: &str,
    track: &Track,
) -> Result<String, MoodError> {
    let term = utils::search_term(track);
    let res = client
        .get(search_url)
        .query(&[("term", term.as_str()), ("entity", "song"), ("limit", "1")])
        .send()
        .await?
        .error_for_status()?
        .json::<SearchResponse>()
        .await?;

    res.results
        .into_iter()
        .next()
        .and_then(|r| r.track_view_url)
        .filter(|url| !url.is_empty())
        .ok_or(MoodError::TrackNotFound(term))
}
