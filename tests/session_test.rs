use std::cell::RefCell;

use moodpick::{
    error::{GENERIC_FAILURE_MESSAGE, MoodError, ShareError},
    mood::{Session, Sharer, ViewState, build_share_payload},
    types::{Mood, ResolutionResult, SharePayload, Track},
};

const APP_URL: &str = "https://mood-randomizer.vercel.app";

fn create_test_result(name: &str) -> ResolutionResult {
    ResolutionResult {
        display_mood: Mood::Energetic.display_label(),
        track: Track {
            name: name.to_string(),
            artist: "Daft Punk".to_string(),
        },
        universal_link_url: "https://song.link/xyz".to_string(),
    }
}

#[derive(Default)]
struct RecordingSharer {
    shared: RefCell<Vec<SharePayload>>,
}

impl Sharer for RecordingSharer {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        self.shared.borrow_mut().push(payload.clone());
        Ok(())
    }
}

struct FailingSharer;

impl Sharer for FailingSharer {
    fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Launch(std::io::Error::other("no browser")))
    }
}

#[test]
fn test_new_session_is_home() {
    let session = Session::new();
    assert_eq!(session.state(), &ViewState::Home { notice: None });
    assert!(!session.is_loading());
    assert!(session.result().is_none());
}

#[test]
fn test_success_goes_home_loading_result() {
    let mut session = Session::new();

    let generation = session.begin().unwrap();
    assert_eq!(session.state(), &ViewState::Loading { generation });
    assert!(session.result().is_none());

    assert!(session.settle(generation, Ok(create_test_result("One More Time"))));
    assert!(!session.is_loading());
    assert_eq!(session.result().unwrap().display_mood, "ENERGETIC");
}

#[test]
fn test_failure_returns_home_with_generic_notice() {
    let mut session = Session::new();
    let generation = session.begin().unwrap();

    session.settle(
        generation,
        Err(MoodError::TrackNotFound("Nobody Nothing".to_string())),
    );

    assert_eq!(
        session.state(),
        &ViewState::Home {
            notice: Some(GENERIC_FAILURE_MESSAGE.to_string())
        }
    );
}

#[test]
fn test_begin_is_refused_while_loading() {
    let mut session = Session::new();
    let first = session.begin().unwrap();

    assert!(session.begin().is_none());
    assert_eq!(session.generation(), first);
}

#[test]
fn test_expire_drops_loading() {
    let mut session = Session::new();
    let generation = session.begin().unwrap();

    assert!(session.expire(generation));
    assert_eq!(session.state(), &ViewState::Home { notice: None });

    // Expiring again, or once settled, changes nothing
    assert!(!session.expire(generation));
    session.settle(generation, Ok(create_test_result("Around the World")));
    assert!(!session.expire(generation));
    assert!(session.result().is_some());
}

#[test]
fn test_late_outcome_of_current_pick_still_lands() {
    let mut session = Session::new();
    let generation = session.begin().unwrap();
    session.expire(generation);

    assert!(session.settle(generation, Ok(create_test_result("Digital Love"))));
    assert_eq!(session.result().unwrap().track.name, "Digital Love");
}

#[test]
fn test_stale_outcome_cannot_overwrite_newer_pick() {
    let mut session = Session::new();
    let old = session.begin().unwrap();
    session.expire(old);

    let new = session.begin().unwrap();
    assert!(new > old);

    assert!(!session.settle(old, Ok(create_test_result("Stale"))));
    assert_eq!(session.state(), &ViewState::Loading { generation: new });

    assert!(session.settle(new, Ok(create_test_result("Fresh"))));
    assert!(!session.settle(new, Ok(create_test_result("Twice"))));
    assert_eq!(session.result().unwrap().track.name, "Fresh");
}

#[test]
fn test_try_again_and_header_go_home() {
    let mut session = Session::new();
    let generation = session.begin().unwrap();
    session.settle(generation, Ok(create_test_result("Veridis Quo")));

    session.try_again();
    assert_eq!(session.state(), &ViewState::Home { notice: None });

    let generation = session.begin().unwrap();
    session.settle(generation, Ok(create_test_result("Veridis Quo")));
    session.go_home();
    assert_eq!(session.state(), &ViewState::Home { notice: None });
}

#[test]
fn test_go_home_ignored_while_loading() {
    let mut session = Session::new();
    let generation = session.begin().unwrap();

    session.go_home();
    assert_eq!(session.state(), &ViewState::Loading { generation });
}

#[test]
fn test_share_does_not_mutate_state() {
    let mut session = Session::new();
    let generation = session.begin().unwrap();
    session.settle(generation, Ok(create_test_result("Get Lucky")));
    let before = session.state().clone();

    let sharer = RecordingSharer::default();
    session.share(&sharer, APP_URL).unwrap();
    session.share(&sharer, APP_URL).unwrap();

    assert_eq!(session.state(), &before);

    let shared = sharer.shared.borrow();
    assert_eq!(shared.len(), 2);
    assert_eq!(shared[0], shared[1]);
    assert_eq!(shared[0].embeds, vec!["https://song.link/xyz".to_string()]);
    assert_eq!(
        shared[0].text,
        "My mood today is ENERGETIC! Listening to Get Lucky by Daft Punk. Check it out: https://mood-randomizer.vercel.app"
    );
}

#[test]
fn test_share_without_result() {
    let session = Session::new();
    let sharer = RecordingSharer::default();

    assert!(matches!(
        session.share(&sharer, APP_URL),
        Err(ShareError::NothingToShare)
    ));
    assert!(sharer.shared.borrow().is_empty());
}

#[test]
fn test_share_failure_leaves_result_in_place() {
    let mut session = Session::new();
    let generation = session.begin().unwrap();
    session.settle(generation, Ok(create_test_result("Instant Crush")));

    assert!(session.share(&FailingSharer, APP_URL).is_err());
    assert_eq!(session.result().unwrap().track.name, "Instant Crush");
}

#[test]
fn test_build_share_payload_uses_structured_result() {
    let payload = build_share_payload(&create_test_result("Lose Yourself to Dance"), APP_URL);
    assert!(payload.text.contains("ENERGETIC"));
    assert!(payload.text.contains("Lose Yourself to Dance by Daft Punk"));
    assert_eq!(payload.embeds.len(), 1);
}
