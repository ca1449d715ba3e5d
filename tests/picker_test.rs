mod common;

use std::{collections::HashSet, time::Duration};

use moodpick::{
    config::MoodCatalog,
    error::MoodError,
    mood::{pick_mood, pick_mood_with},
    types::{Mood, MoodSelection, Track},
};
use rand::{SeedableRng, rngs::StdRng};

const LIST: &str = "Song A, Artist A\nSong B, Artist B\nSong C, Artist C\n";

#[test]
fn test_pick_returns_listed_track() {
    let mut rng = StdRng::seed_from_u64(7);
    let listed = moodpick::utils::parse_tracks(LIST);

    for _ in 0..50 {
        let pick = pick_mood_with(MoodSelection::Mood(Mood::Nostalgic), LIST, &mut rng).unwrap();
        assert_eq!(pick.mood, Mood::Nostalgic);
        assert!(listed.contains(&pick.track));
        assert!(!pick.track.name.is_empty());
        assert!(!pick.track.artist.is_empty());
    }
}

#[test]
fn test_pick_eventually_covers_whole_list() {
    let mut rng = StdRng::seed_from_u64(42);
    let seen: HashSet<String> = (0..200)
        .map(|_| {
            pick_mood_with(MoodSelection::Mood(Mood::FeelGood), LIST, &mut rng)
                .unwrap()
                .track
                .name
        })
        .collect();

    assert_eq!(seen.len(), 3);
}

#[test]
fn test_random_only_yields_known_moods() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut seen = HashSet::new();

    for _ in 0..300 {
        let pick = pick_mood_with(MoodSelection::Random, LIST, &mut rng).unwrap();
        assert!(Mood::ALL.contains(&pick.mood));
        seen.insert(pick.mood);
    }

    // Uniform over three moods: all of them show up
    assert_eq!(seen.len(), Mood::ALL.len());
}

#[test]
fn test_empty_list_is_an_error() {
    let mut rng = StdRng::seed_from_u64(3);

    for body in ["", "\n", "\n\n  \n", "no delimiter here\n"] {
        let err = pick_mood_with(MoodSelection::Mood(Mood::Energetic), body, &mut rng).unwrap_err();
        assert!(matches!(err, MoodError::NoTracksForMood(Mood::Energetic)));
    }
}

#[test]
fn test_single_track_list() {
    let mut rng = StdRng::seed_from_u64(9);
    let pick = pick_mood_with(MoodSelection::Random, "Only One, Solo\n", &mut rng).unwrap();
    assert_eq!(
        pick.track,
        Track {
            name: "Only One".to_string(),
            artist: "Solo".to_string()
        }
    );
}

#[tokio::test]
async fn test_pick_mood_fetches_list() {
    let base = common::spawn_app(common::fake_upstreams(Duration::ZERO)).await;
    let client = reqwest::Client::new();

    let pick = pick_mood(
        &client,
        &common::catalog(&base, "good"),
        MoodSelection::Mood(Mood::FeelGood),
    )
    .await
    .unwrap();

    assert_eq!(pick.mood, Mood::FeelGood);
    assert!(moodpick::utils::parse_tracks(common::FEEL_GOOD_LIST).contains(&pick.track));
}

#[tokio::test]
async fn test_pick_mood_empty_remote_list() {
    let base = common::spawn_app(common::fake_upstreams(Duration::ZERO)).await;
    let client = reqwest::Client::new();

    let err = pick_mood(
        &client,
        &common::catalog(&base, "empty"),
        MoodSelection::Random,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, MoodError::NoTracksForMood(_)));
}

#[tokio::test]
async fn test_pick_mood_missing_list_is_network_error() {
    let base = common::spawn_app(common::fake_upstreams(Duration::ZERO)).await;
    let client = reqwest::Client::new();
    let url = format!("{}/lists/absent", base);
    let catalog = MoodCatalog::new(url.clone(), url.clone(), url);

    let err = pick_mood(&client, &catalog, MoodSelection::Mood(Mood::Nostalgic))
        .await
        .unwrap_err();

    assert!(matches!(err, MoodError::Network(_)));
}
