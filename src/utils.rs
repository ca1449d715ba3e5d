use std::time::Duration;

use rand::{Rng, seq::IndexedRandom};
use reqwest::{Client, Url};

use crate::types::{Mood, MoodSelection, ResolutionResult, Track};

/// Parses one `Track Name, Artist` line. The split happens on the first comma;
/// lines without one, or with an empty side, yield `None`.
pub fn parse_track_line(line: &str) -> Option<Track> {
    let (name, artist) = line.split_once(',')?;
    let name = name.trim();
    let artist = artist.trim();
    if name.is_empty() || artist.is_empty() {
        return None;
    }

    Some(Track {
        name: name.to_string(),
        artist: artist.to_string(),
    })
}

pub fn parse_tracks(body: &str) -> Vec<Track> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_track_line)
        .collect()
}

pub fn resolve_selection<R: Rng + ?Sized>(selection: MoodSelection, rng: &mut R) -> Mood {
    match selection {
        MoodSelection::Mood(mood) => mood,
        MoodSelection::Random => *Mood::ALL.choose(rng).unwrap_or(&Mood::FeelGood),
    }
}

pub fn choose_track<R: Rng + ?Sized>(tracks: &[Track], rng: &mut R) -> Option<Track> {
    tracks.choose(rng).cloned()
}

/// clap value parser for mood arguments.
pub fn parse_mood_selection(s: &str) -> Result<MoodSelection, String> {
    let normalized: String = s
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    match normalized.as_str() {
        "feelgood" => Ok(MoodSelection::Mood(Mood::FeelGood)),
        "nostalgic" => Ok(MoodSelection::Mood(Mood::Nostalgic)),
        "energetic" => Ok(MoodSelection::Mood(Mood::Energetic)),
        "random" => Ok(MoodSelection::Random),
        _ => Err(format!(
            "Unknown mood '{}'. Use one of: feel-good, nostalgic, energetic, random",
            s
        )),
    }
}

/// Home-screen input: menu number (`1`..`4`) or a mood name.
pub fn parse_menu_choice(input: &str) -> Option<MoodSelection> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=Mood::ALL.len()).contains(&n) => Some(MoodSelection::Mood(Mood::ALL[n - 1])),
        Ok(n) if n == Mood::ALL.len() + 1 => Some(MoodSelection::Random),
        Ok(_) => None,
        Err(_) => parse_mood_selection(input).ok(),
    }
}

/// Search term sent to the catalog: `artist name`.
pub fn search_term(track: &Track) -> String {
    format!("{} {}", track.artist, track.name)
}

pub fn embed_url(base: &str, universal_link: &str) -> Result<Url, String> {
    Url::parse_with_params(base, &[("url", universal_link), ("theme", "dark")])
        .map_err(|e| e.to_string())
}

pub fn share_text(result: &ResolutionResult, app_url: &str) -> String {
    format!(
        "My mood today is {mood}! Listening to {name} by {artist}. Check it out: {app_url}",
        mood = result.display_mood,
        name = result.track.name,
        artist = result.track.artist,
    )
}

pub fn compose_url(base: &str, text: &str, embeds: &[String]) -> Result<Url, String> {
    let mut params: Vec<(&str, &str)> = vec![("text", text)];
    params.extend(embeds.iter().map(|e| ("embeds[]", e.as_str())));
    Url::parse_with_params(base, &params).map_err(|e| e.to_string())
}

pub fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}
