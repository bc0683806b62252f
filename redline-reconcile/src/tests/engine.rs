use super::{finding, record_of, state_with_applied};
use crate::engine::ReconciliationEngine;
use crate::record::PersistedState;

const SENTENCE: &str = "This sentence is way too long to read comfortably.";
const REWORDED: &str = "This sentence is far too long to read comfortably.";

#[test]
fn test_no_history_applies_everything() {
    let engine = ReconciliationEngine::default();
    let detected = vec![
        finding("LongSentence", SENTENCE, "too long", 20, 28),
        finding("Filler", SENTENCE, "way", 17, 20),
    ];

    let result = engine.reconcile(&PersistedState::default(), detected);
    assert_eq!(result.to_apply.len(), 2);
    assert!(result.redundant.is_empty());
    assert!(result.false_positives.is_empty());
}

#[test]
fn test_exact_redundant_matches() {
    // Four findings applied in an earlier pass, all four rediscovered
    // (with drifted offsets): nothing to apply, four redundant.
    let engine = ReconciliationEngine::default();
    let earlier: Vec<_> = (0..4)
        .map(|i| {
            finding(
                "Filler",
                &format!("Sentence number {} is actually fine.", i),
                "actually",
                10 * i,
                10 * i + 8,
            )
        })
        .collect();
    let state = state_with_applied(earlier.iter().map(record_of).collect());

    let redetected: Vec<_> = earlier
        .iter()
        .map(|f| {
            let mut drifted = f.clone();
            drifted.begin += 37;
            drifted.end += 37;
            drifted
        })
        .collect();

    let result = engine.reconcile(&state, redetected);
    assert_eq!(result.to_apply.len(), 0);
    assert_eq!(result.redundant.len(), 4);
    assert_eq!(result.false_positives.len(), 0);
}

#[test]
fn test_false_positives_are_suppressed() {
    let engine = ReconciliationEngine::default();
    let rejected: Vec<_> = (0..3)
        .map(|i| {
            finding(
                "PassiveVoice",
                &format!("Sentence {} was written by the author.", i),
                "was written",
                0,
                11,
            )
        })
        .collect();
    let state = PersistedState {
        false_positives: rejected.iter().map(record_of).collect(),
        ..PersistedState::default()
    };

    let result = engine.reconcile(&state, rejected.clone());
    assert_eq!(result.to_apply.len(), 0);
    assert_eq!(result.redundant.len(), 0);
    assert_eq!(result.false_positives.len(), 3);
}

#[test]
fn test_fuzzy_redundant_on_reworded_sentence() {
    let engine = ReconciliationEngine::default();
    let applied = finding("LongSentence", SENTENCE, "too long", 20, 28);
    let state = state_with_applied(vec![record_of(&applied)]);

    // Same rule, sentence reworded by a few characters: still redundant.
    let redetected = finding("LongSentence", REWORDED, "too long", 20, 28);
    let result = engine.reconcile(&state, vec![redetected]);
    assert_eq!(result.to_apply.len(), 0);
    assert_eq!(result.redundant.len(), 1);
}

#[test]
fn test_fuzzy_requires_same_rule() {
    let engine = ReconciliationEngine::default();
    let applied = finding("LongSentence", SENTENCE, "too long", 20, 28);
    let state = state_with_applied(vec![record_of(&applied)]);

    let other_rule = finding("Filler", REWORDED, "far", 17, 20);
    let result = engine.reconcile(&state, vec![other_rule]);
    assert_eq!(result.to_apply.len(), 1);
    assert_eq!(result.redundant.len(), 0);
}

#[test]
fn test_fuzzy_gives_up_on_heavy_rewrite() {
    let engine = ReconciliationEngine::default();
    let applied = finding("LongSentence", SENTENCE, "too long", 20, 28);
    let state = state_with_applied(vec![record_of(&applied)]);

    let rewritten = finding("LongSentence", "Short now.", "Short", 0, 5);
    let result = engine.reconcile(&state, vec![rewritten]);
    assert_eq!(result.to_apply.len(), 1);
    assert_eq!(result.redundant.len(), 0);
}

#[test]
fn test_fuzzy_distance_is_configurable() {
    let strict = ReconciliationEngine::new(1);
    let applied = finding("LongSentence", SENTENCE, "too long", 20, 28);
    let state = state_with_applied(vec![record_of(&applied)]);

    let redetected = finding("LongSentence", REWORDED, "too long", 20, 28);
    let result = strict.reconcile(&state, vec![redetected]);
    // Two edits apart, which a distance bound of 1 no longer accepts.
    assert_eq!(result.to_apply.len(), 1);
}

#[test]
fn test_partition_is_exact() {
    let engine = ReconciliationEngine::default();
    let applied = finding("LongSentence", SENTENCE, "too long", 20, 28);
    let rejected = finding("PassiveVoice", "It was done by them.", "was done", 3, 11);
    let state = PersistedState {
        previously_applied: vec![record_of(&applied)],
        false_positives: vec![record_of(&rejected)],
        ..PersistedState::default()
    };

    let detected = vec![
        applied.clone(),                                             // redundant
        rejected.clone(),                                            // false positive
        finding("Filler", "A completely different sentence.", "completely", 2, 12),
    ];
    let total = detected.len();

    let result = engine.reconcile(&state, detected);
    assert_eq!(
        result.to_apply.len() + result.redundant.len() + result.false_positives.len(),
        total
    );
    assert_eq!(result.to_apply.len(), 1);
    assert_eq!(result.redundant.len(), 1);
    assert_eq!(result.false_positives.len(), 1);
}

#[test]
fn test_incorporated_when_defect_disappears() {
    let engine = ReconciliationEngine::default();
    let fixed = finding("Filler", "The author actually fixed this one.", "actually", 11, 19);
    let still_there = finding("LongSentence", SENTENCE, "too long", 20, 28);
    let state = state_with_applied(vec![record_of(&fixed), record_of(&still_there)]);

    // Only the long sentence is redetected; two fresh findings get applied.
    let result = engine.reconcile(
        &state,
        vec![
            still_there.clone(),
            finding(
                "Filler",
                "Moreover, the quarterly report deadline has been moved up again.",
                "Moreover",
                0,
                8,
            ),
            finding("LongWord", "Internationalization is a long word.", "Internationalization", 0, 20),
        ],
    );
    assert_eq!(result.redundant.len(), 1);
    assert_eq!(result.to_apply.len(), 2);

    let next = engine.next_state(
        &state,
        &result.to_apply,
        &result.redundant,
        &result.false_positives,
    );
    assert_eq!(next.incorporated.len(), 1);
    assert_eq!(next.incorporated[0].name, "Filler");
    // Next previously-applied = redundant + applied.
    assert_eq!(next.previously_applied.len(), 3);
}

#[test]
fn test_incorporated_is_monotonic() {
    let engine = ReconciliationEngine::default();
    let long_gone = finding("Filler", "An old, long since fixed sentence.", "old", 3, 6);
    let state = PersistedState {
        incorporated: vec![record_of(&long_gone)],
        ..PersistedState::default()
    };

    let next = engine.next_state(&state, &[], &[], &[]);
    assert_eq!(next.incorporated.len(), 1);
    assert_eq!(next.incorporated[0], record_of(&long_gone));
}

#[test]
fn test_fuzzy_match_excludes_record_from_incorporated() {
    let engine = ReconciliationEngine::default();
    let applied = finding("LongSentence", SENTENCE, "too long", 20, 28);
    let state = state_with_applied(vec![record_of(&applied)]);

    // The reworded rediscovery is redundant; the original record must not
    // be counted as incorporated, the defect still exists.
    let redetected = finding("LongSentence", REWORDED, "too long", 20, 28);
    let result = engine.reconcile(&state, vec![redetected]);
    assert_eq!(result.redundant.len(), 1);

    let next = engine.next_state(&state, &[], &result.redundant, &result.false_positives);
    assert!(next.incorporated.is_empty());
}

#[test]
fn test_false_positives_accumulate_without_duplicates() {
    let engine = ReconciliationEngine::default();
    let rejected = finding("PassiveVoice", "It was done by them.", "was done", 3, 11);
    let state = PersistedState {
        false_positives: vec![record_of(&rejected)],
        ..PersistedState::default()
    };

    let result = engine.reconcile(&state, vec![rejected.clone()]);
    let next = engine.next_state(&state, &[], &result.redundant, &result.false_positives);
    assert_eq!(next.false_positives.len(), 1);
}

#[test]
fn test_prefilter_drops_extraction_artifacts() {
    let engine = ReconciliationEngine::default();
    let detected = vec![
        finding("Filler", "www", "www", 0, 3),
        finding("Filler", "http", "http", 0, 4),
        finding("Filler", "A real sentence, actually.", "actually", 17, 25),
    ];

    let kept = engine.prefilter(detected);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].sentence, "A real sentence, actually.");
}
