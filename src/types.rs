use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A curated mood. Each mood maps to exactly one track list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    FeelGood,
    Nostalgic,
    Energetic,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::FeelGood, Mood::Nostalgic, Mood::Energetic];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::FeelGood => "Feel Good",
            Mood::Nostalgic => "Nostalgic",
            Mood::Energetic => "Energetic",
        }
    }

    /// Label as shown on the result screen, e.g. `FEEL GOOD`.
    pub fn display_label(&self) -> String {
        self.label().to_uppercase()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the user asked for: a concrete mood or a random one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodSelection {
    Mood(Mood),
    Random,
}

impl fmt::Display for MoodSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodSelection::Mood(mood) => f.write_str(mood.label()),
            MoodSelection::Random => f.write_str("Random"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String,
}

/// A track together with the mood it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodPick {
    pub mood: Mood,
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub display_mood: String,
    pub track: Track,
    pub universal_link_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub text: String,
    pub embeds: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Identity {
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub track_view_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksResponse {
    pub page_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Tabled)]
pub struct MoodTableRow {
    pub mood: String,
    pub source: String,
}
