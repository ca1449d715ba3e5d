use colored::Colorize;

use crate::types::{Identity, Mood, ResolutionResult};

pub const PLACEHOLDER_AVATAR: &str = "( )";

/// Title bar: app name on the left, avatar (or a placeholder) on the right.
pub fn header(identity: &Identity) -> String {
    let avatar = match &identity.avatar_url {
        Some(url) => format!("[{}]", url),
        None => PLACEHOLDER_AVATAR.to_string(),
    };
    let user = match &identity.display_name {
        Some(name) => format!("{} {}", name.bold(), avatar),
        None => avatar,
    };
    format!("{}    {}", "Mood".bold().magenta(), user)
}

/// Curator credit shown under every screen.
pub fn footer(curator: &str) -> String {
    curator.dimmed().to_string()
}

pub fn home_screen(identity: &Identity, notice: Option<&str>, curator: &str) -> String {
    let mut out = header(identity);
    out.push('\n');
    if let Some(notice) = notice {
        out.push('\n');
        out.push_str(&notice.red().to_string());
        out.push('\n');
    }
    out.push('\n');
    for (i, mood) in Mood::ALL.iter().enumerate() {
        out.push_str(&format!("  {}) {}\n", i + 1, mood.label()));
    }
    out.push_str(&format!("  {}) Random\n", Mood::ALL.len() + 1));
    out.push_str("  q) Quit\n\n");
    out.push_str(&footer(curator));
    out
}

pub fn result_screen(
    identity: &Identity,
    result: &ResolutionResult,
    player_url: &str,
    curator: &str,
) -> String {
    format!(
        "{header}\n\nYour MOOD today is {mood}\nSong: {name} by {artist}\n\n  Link:   {link}\n  Player: {player}\n\n{footer}",
        header = header(identity),
        mood = result.display_mood.bold().magenta(),
        name = result.track.name,
        artist = result.track.artist,
        link = result.universal_link_url.underline(),
        player = player_url,
        footer = footer(curator),
    )
}

pub const RESULT_ACTIONS: &str = "[s]hare  [t]ry again  [h]ome  [o]pen player  [q]uit";
