//! Deck behaviour seen from the outside: gestures, buttons, reset and sinks.

use auradeck_deck::{
    CandidateSource, DeckConfig, DeckEngine, DecisionSink, FixtureSource, Indicator,
    RecordingSink, SourceError, SwipeDecision, SwipeDirection,
};
use auradeck_integration_tests::{abc_deck, candidate};
use auradeck_persona::CandidateId;
use proptest::prelude::*;
use serde_json::json;

fn names(deck: &DeckEngine) -> Vec<String> {
    deck.candidates().map(|c| c.name().to_string()).collect()
}

#[test]
fn accept_reject_reset() {
    let mut deck = abc_deck();

    deck.begin_gesture((200.0, 400.0));
    deck.update_gesture((260.0, 410.0));
    deck.update_gesture((350.0, 420.0));
    assert_eq!(deck.end_gesture(), Some(SwipeDecision::accept(CandidateId::new("1"))));
    assert_eq!(names(&deck), ["B", "C"]);

    assert_eq!(
        deck.decide(SwipeDirection::Left),
        Some(SwipeDecision::reject(CandidateId::new("2")))
    );
    assert_eq!(names(&deck), ["C"]);

    deck.reset();
    assert_eq!(names(&deck), ["A", "B", "C"]);
    assert!(!deck.is_gesture_active());
}

#[test]
fn reset_mid_gesture_clears_it() {
    let mut deck = abc_deck();
    deck.decide(SwipeDirection::Right);
    deck.begin_gesture((0.0, 0.0));
    deck.update_gesture((-90.0, 0.0));
    deck.reset();
    assert!(deck.gesture().is_none());
    assert_eq!(deck.end_gesture(), None);
    assert_eq!(deck.len(), 3);
}

#[test]
fn vertical_motion_never_decides() {
    let mut deck = abc_deck();
    deck.begin_gesture((0.0, 0.0));
    deck.update_gesture((10.0, 900.0));
    assert_eq!(deck.end_gesture(), None);
    assert_eq!(deck.len(), 3);
}

#[test]
fn indicator_follows_drag() {
    let mut deck = abc_deck();
    deck.begin_gesture((0.0, 0.0));

    deck.update_gesture((30.0, 0.0));
    assert_eq!(deck.front_visual().indicator, None);

    deck.update_gesture((-70.0, 0.0));
    let visual = deck.front_visual();
    assert_eq!(visual.indicator, Some(Indicator::Nope));
    assert!(visual.rotation_deg < 0.0);

    deck.cancel_gesture();
    assert_eq!(deck.front_visual().indicator, None);
}

#[tokio::test]
async fn bundled_deck_into_sink() {
    let mut deck = DeckEngine::load(&FixtureSource::bundled(), DeckConfig::default())
        .await
        .expect("fixture source never fails");
    let sink = RecordingSink::new();

    while let Some(front) = deck.front().map(|c| c.name().to_string()) {
        let direction = if front == "PixelDrifter" { SwipeDirection::Left } else { SwipeDirection::Right };
        if let Some(decision) = deck.decide(direction) {
            sink.record(&decision);
        }
    }

    assert_eq!(sink.accepted(), [CandidateId::new("1"), CandidateId::new("3")]);
    assert_eq!(deck.decided_count(), 3);
    assert!(deck.visible_stack().is_empty());
}

#[test]
fn second_touch_mid_drag_still_commits() {
    let mut deck = abc_deck();
    deck.begin_gesture((0.0, 0.0));
    deck.update_gesture((150.0, 0.0));
    deck.begin_gesture((150.0, 0.0));
    assert_eq!(deck.end_gesture(), Some(SwipeDecision::accept(CandidateId::new("1"))));
    assert_eq!(names(&deck), ["B", "C"]);
}

#[tokio::test]
async fn backend_payload_feeds_the_deck() {
    let body = json!([
        {
            "id": "65f0c2a1b2c3d4e5f6a7b8c9",
            "username": "NeonGhost",
            "age": 24,
            "aura_color": "#7B1FA2",
            "looking_for": ["Rave Buddy", "Vibes"],
            "sliders": { "social_battery": 3, "texting_style": 2, "planning_style": 8, "humor": 9 }
        },
        { "id": "65f0c2a1b2c3d4e5f6a7b8ca", "red_flags": "" },
        { "id": "65f0c2a1b2c3d4e5f6a7b8c9", "username": "Duplicate" }
    ])
    .to_string();

    let source = FixtureSource::from_json(&body).expect("well-formed payload");
    let mut deck = DeckEngine::load(&source, DeckConfig::default()).await.expect("fixture source never fails");
    assert_eq!(names(&deck), ["NeonGhost", "Mystery Soul"]);

    let decision = deck.decide(SwipeDirection::Right).expect("deck not empty");
    assert_eq!(decision.candidate_id.as_str(), "65f0c2a1b2c3d4e5f6a7b8c9");
    assert_eq!(
        serde_json::to_value(&decision).expect("decision serializes")["candidate_id"],
        "65f0c2a1b2c3d4e5f6a7b8c9"
    );
}

#[tokio::test]
async fn malformed_payload_is_reported() {
    let err = FixtureSource::from_json(&json!({ "candidates": [] }).to_string()).unwrap_err();
    assert!(matches!(err, SourceError::Malformed(_)));

    let empty = FixtureSource::from_json("[]").expect("empty list is valid");
    assert!(empty.fetch_candidates().await.expect("fixture source never fails").is_empty());
}

proptest! {
    #[test]
    fn reset_always_restores_original(
        count in 0usize..8,
        swipes in prop::collection::vec(-300.0f64..300.0, 0..12),
    ) {
        let original: Vec<_> = (0..count as u64).map(|i| candidate(i, &format!("C{i}"))).collect();
        let mut deck = DeckEngine::new(original.clone());
        for dx in swipes {
            deck.begin_gesture((0.0, 0.0));
            deck.update_gesture((dx, 0.0));
            let before = deck.len();
            match deck.end_gesture() {
                Some(_) => {
                    prop_assert_eq!(deck.len(), before - 1);
                }
                None => {
                    prop_assert_eq!(deck.len(), before);
                }
            }
        }
        deck.reset();
        prop_assert_eq!(deck.candidates().cloned().collect::<Vec<_>>(), original);
    }
}
