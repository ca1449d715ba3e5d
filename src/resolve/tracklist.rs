use reqwest::Client;

use crate::error::MoodError;

/// Downloads a mood's plain-text track list.
pub async fn fetch_track_list(client: &Client, url: &str) -> Result<String, MoodError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(body)
}
