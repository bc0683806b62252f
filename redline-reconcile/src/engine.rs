//! Classifying freshly detected findings against the previous pass.
//!
//! Reconciliation is a pure partition: every detected finding ends up in
//! exactly one of three buckets. Findings already annotated in the
//! document are redundant, findings the user previously rejected are
//! false positives, and the rest are handed to the applier. A second,
//! fuzzy filter catches findings whose enclosing sentence was lightly
//! reworded between passes but still carries the same defect.
//!
//! The engine itself holds no state; everything that spans passes lives
//! in the [`PersistedState`] passed in and out.

use std::collections::BTreeSet;

use tracing::debug;

use redline::{Finding, Fingerprint};

use crate::distance::levenshtein;
use crate::record::{PersistedRecord, PersistedState};

/// Maximum number of character edits at which two sentences still count
/// as "the same sentence, lightly reworded".
///
/// Absolute character edits, deliberately not normalized by sentence
/// length; the value is historical and tunable per engine instance.
pub const DEFAULT_FUZZY_DISTANCE: usize = 30;

/// Sentences that are artifacts of text extraction rather than prose;
/// findings inside them are noise and are dropped before reconciliation.
const SENTENCE_ARTIFACTS: [&str; 6] = ["REF", "www", "/", "\\", "http", "ARABIC"];

#[derive(Debug, Clone)]
pub struct ReconciliationEngine {
    /// Edit-distance bound for the fuzzy redundant filter.
    pub fuzzy_distance: usize,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        ReconciliationEngine {
            fuzzy_distance: DEFAULT_FUZZY_DISTANCE,
        }
    }
}

/// The partition produced by one reconciliation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    /// Findings not seen before; input to the applier, original order.
    pub to_apply: Vec<Finding>,
    /// Findings matching an already-annotated defect (exactly or fuzzily).
    pub redundant: Vec<PersistedRecord>,
    /// Findings matching a defect the user rejected earlier.
    pub false_positives: Vec<PersistedRecord>,
}

impl ReconciliationEngine {
    pub fn new(fuzzy_distance: usize) -> Self {
        ReconciliationEngine { fuzzy_distance }
    }

    /// Drop findings whose enclosing sentence is an extraction artifact.
    ///
    /// Kept separate from [`reconcile`](Self::reconcile) so that
    /// reconciliation stays an exact partition of its input.
    pub fn prefilter(&self, detected: Vec<Finding>) -> Vec<Finding> {
        let before = detected.len();
        let kept: Vec<Finding> = detected
            .into_iter()
            .filter(|finding| {
                !SENTENCE_ARTIFACTS.contains(&finding.sentence.as_str())
            })
            .collect();
        if kept.len() != before {
            debug!(dropped = before - kept.len(), "dropped artifact findings");
        }
        kept
    }

    /// Partition `detected` against the previous pass.
    pub fn reconcile(&self, state: &PersistedState, detected: Vec<Finding>) -> Reconciliation {
        debug!(detected = detected.len(), "reconciling detected findings");

        let applied_fingerprints: BTreeSet<Fingerprint> = state
            .previously_applied
            .iter()
            .map(|record| record.fingerprint)
            .collect();
        let false_positive_fingerprints: BTreeSet<Fingerprint> = state
            .false_positives
            .iter()
            .map(|record| record.fingerprint)
            .collect();

        let mut result = Reconciliation::default();

        for finding in detected {
            let fingerprint = Fingerprint::of(&finding);

            if applied_fingerprints.contains(&fingerprint) {
                result.redundant.push(PersistedRecord::from_finding(&finding));
            } else if false_positive_fingerprints.contains(&fingerprint) {
                result
                    .false_positives
                    .push(PersistedRecord::from_finding(&finding));
            } else if let Some(record) = self.fuzzy_match(&finding, &state.previously_applied) {
                debug!(
                    rule = finding.name.as_str(),
                    sentence = finding.sentence.as_str(),
                    matched = record.sentence.as_str(),
                    "fuzzy redundant"
                );
                result.redundant.push(PersistedRecord::from_finding(&finding));
            } else {
                result.to_apply.push(finding);
            }
        }

        debug!(
            to_apply = result.to_apply.len(),
            redundant = result.redundant.len(),
            false_positives = result.false_positives.len(),
            "reconciliation done"
        );
        result
    }

    /// Compute the state to persist for the next pass.
    ///
    /// Incorporated means: previously applied, no longer detected (not
    /// even as a reworded sentence), and not rejected. Once a record is
    /// incorporated it stays incorporated; a defect that is literally
    /// reintroduced later shows up again through the applied list.
    pub fn next_state(
        &self,
        state: &PersistedState,
        applied: &[Finding],
        redundant: &[PersistedRecord],
        false_positives: &[PersistedRecord],
    ) -> PersistedState {
        let matched_fingerprints: BTreeSet<Fingerprint> = redundant
            .iter()
            .chain(false_positives.iter())
            .map(|record| record.fingerprint)
            .collect();

        let mut incorporated: Vec<PersistedRecord> = state
            .previously_applied
            .iter()
            .filter(|record| !matched_fingerprints.contains(&record.fingerprint))
            .filter(|record| {
                !redundant.iter().any(|r| {
                    r.name == record.name
                        && levenshtein(&r.sentence, &record.sentence) < self.fuzzy_distance
                })
            })
            .cloned()
            .collect();
        incorporated.extend(state.incorporated.iter().cloned());
        dedupe_by_fingerprint(&mut incorporated);

        let mut previously_applied: Vec<PersistedRecord> = redundant.to_vec();
        previously_applied.extend(applied.iter().map(PersistedRecord::from_finding));

        let mut all_false_positives = state.false_positives.clone();
        all_false_positives.extend(false_positives.iter().cloned());
        dedupe_by_fingerprint(&mut all_false_positives);

        debug!(
            previously_applied = previously_applied.len(),
            false_positives = all_false_positives.len(),
            incorporated = incorporated.len(),
            "prepared state for next pass"
        );

        PersistedState {
            previously_applied,
            false_positives: all_false_positives,
            incorporated,
        }
    }

    fn fuzzy_match<'a>(
        &self,
        finding: &Finding,
        previously_applied: &'a [PersistedRecord],
    ) -> Option<&'a PersistedRecord> {
        previously_applied.iter().find(|record| {
            record.name == finding.name
                && levenshtein(&record.sentence, &finding.sentence) < self.fuzzy_distance
        })
    }
}

fn dedupe_by_fingerprint(records: &mut Vec<PersistedRecord>) {
    let mut seen = BTreeSet::new();
    records.retain(|record| seen.insert(record.fingerprint));
}
