use super::{finding, record_of, state_with_applied};
use crate::record::PersistedState;

use redline::Fingerprint;

#[test]
fn test_record_carries_content_fingerprint() {
    let original = finding("Filler", "This is actually fine.", "actually", 8, 16);
    let mut drifted = original.clone();
    drifted.begin = 80;
    drifted.end = 88;

    assert_eq!(record_of(&original).fingerprint, record_of(&drifted).fingerprint);
    assert_eq!(record_of(&original).fingerprint, Fingerprint::of(&original));
}

#[test]
fn test_state_round_trips_through_ron() {
    let state = state_with_applied(vec![
        record_of(&finding("Filler", "This is actually fine.", "actually", 8, 16)),
        record_of(&finding("LongWord", "Internationalization hurts.", "Internationalization", 0, 20)),
    ]);

    let serialized = state.to_ron().unwrap();
    let restored = PersistedState::from_ron(&serialized).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_missing_state_is_empty_history() {
    let state = PersistedState::load_or_empty(None);
    assert!(state.is_empty());
}

#[test]
fn test_corrupt_state_is_empty_history() {
    let state = PersistedState::load_or_empty(Some("not a state blob ]]"));
    assert!(state.is_empty());
}

#[test]
fn test_corrupt_state_is_reported_to_codec_callers() {
    assert!(PersistedState::from_ron("(previously_applied: oops").is_err());
}
